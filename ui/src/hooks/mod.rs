pub mod use_push_route;
pub mod use_refresh;
pub mod use_service_status;

pub use use_push_route::use_push_route;
pub use use_refresh::use_refresh;
pub use use_service_status::{ServiceStatus, use_service_status};
