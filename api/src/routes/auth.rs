use actix_web::{HttpResponse, post, web};
use payloads::requests::credentials_error;
use payloads::responses::{ServiceInfo, SignupCreated};
use secrecy::ExposeSecret;

use crate::password::{Credentials, create_user, validate_credentials};
use crate::store::AccountStore;

use super::APIError;

#[tracing::instrument(
    skip(credentials, store),
    fields(email = %credentials.email),
    ret,
)]
#[post("/signup")]
pub async fn signup(
    credentials: web::Json<Credentials>,
    store: web::Data<AccountStore>,
) -> Result<HttpResponse, APIError> {
    let credentials = credentials.into_inner();

    if let Some(message) = credentials_error(
        &credentials.email,
        credentials.password.expose_secret(),
    ) {
        return Err(APIError::BadRequest(message.to_string()));
    }

    let account = create_user(credentials, &store).await?;

    Ok(HttpResponse::Created().json(SignupCreated {
        id: account.id,
        email: account.email,
    }))
}

#[tracing::instrument(
    skip(credentials, store),
    fields(email = %credentials.email),
    ret,
)]
#[post("/login")]
pub async fn login(
    credentials: web::Json<Credentials>,
    store: web::Data<AccountStore>,
) -> Result<HttpResponse, APIError> {
    let user_id = validate_credentials(credentials.into_inner(), &store).await?;
    tracing::info!(%user_id, "login succeeded");
    Ok(HttpResponse::Ok().json(ServiceInfo {
        message: "Login successful".into(),
    }))
}
