//! Types shared between the backend and the browser app, plus the
//! `APIClient` used by both the UI and the integration tests.

pub mod api_client;
pub mod requests;
pub mod responses;
pub mod signup;

pub use api_client::{APIClient, ClientError};

use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id type wrapper helps ensure we don't mix up ids for different entities.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub struct UserId(pub Uuid);
