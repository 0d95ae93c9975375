pub mod auth_form;
pub mod layout;

pub use auth_form::{AuthForm, AuthMode};
