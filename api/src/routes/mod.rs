pub mod auth;

use actix_web::{
    HttpRequest, HttpResponse, Responder, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, error::JsonPayloadError, get, http::StatusCode,
    web,
};
use payloads::responses::{ErrorDetail, HealthStatus, ServiceInfo};

use crate::password::{AuthError, CreateUserError};
use crate::store::StoreError;
use crate::telemetry::log_error;

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api")
        .service(health_check)
        .service(web::scope("/auth").service(auth::signup).service(auth::login))
}

#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(ServiceInfo {
        message: "Todo API running successfully 🚀".into(),
    })
}

#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok".into(),
    })
}

/// Reject malformed JSON bodies with the same `{"detail": ...}` shape as
/// every other error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(
    err: JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let response = HttpResponse::UnprocessableEntity()
        .json(ErrorDetail::new(format!("Invalid request body: {err}")));
    actix_web::error::InternalError::from_response(err, response).into()
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Invalid email or password")]
    AuthError(#[source] anyhow::Error),
    #[error("{0}")]
    BadRequest(String),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl ResponseError for APIError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::AuthError(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        if let Self::UnexpectedError(e) = self {
            log_error(e);
        }
        HttpResponse::build(self.status_code())
            .json(ErrorDetail::new(self.to_string()))
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateEmail => APIError::BadRequest(e.to_string()),
            StoreError::UserNotFound => APIError::AuthError(e.into()),
        }
    }
}

impl From<CreateUserError> for APIError {
    fn from(e: CreateUserError) -> Self {
        match e {
            CreateUserError::Store(e) => e.into(),
            CreateUserError::UnexpectedError(e) => APIError::UnexpectedError(e),
        }
    }
}

impl From<AuthError> for APIError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidCredentials(_) => APIError::AuthError(e.into()),
            AuthError::UnexpectedError(e) => APIError::UnexpectedError(e),
        }
    }
}
