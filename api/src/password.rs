use crate::store::{Account, AccountStore, StoreError};
use crate::telemetry::spawn_blocking_with_tracing;
use anyhow::Context;
use argon2::password_hash::SaltString;
use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier,
    Version,
};
use payloads::UserId;
use secrecy::{ExposeSecret, SecretBox};

#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials(#[source] anyhow::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

#[derive(serde::Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: SecretBox<String>,
}

#[tracing::instrument(
    name = "Validate credentials",
    skip(credentials, store),
    fields(email = %credentials.email)
)]
pub async fn validate_credentials(
    credentials: Credentials,
    store: &AccountStore,
) -> Result<UserId, AuthError> {
    let mut user_id = None;
    // fallback password hash to prevent timing differences
    let mut expected_password_hash = SecretBox::new(Box::new(
        "$argon2id$v=19$m=15000,t=2,p=1$\
        gZiV/M1gPc22ElAH/Jh1Hw$\
        CWOrkoo7oJBQ/iyh7uJ0LO2aLEfrHwTWllSAxT0zRno"
            .to_string(),
    ));

    match store.get_stored_credentials(&credentials.email).await {
        Ok((stored_user_id, stored_password_hash)) => {
            user_id = Some(stored_user_id);
            expected_password_hash = stored_password_hash;
        }
        Err(StoreError::UserNotFound) => {}
        Err(e) => return Err(AuthError::UnexpectedError(e.into())),
    }

    spawn_blocking_with_tracing(move || {
        verify_password_hash(expected_password_hash, credentials.password)
    })
    .await
    .context("Failed to spawn blocking task.")??;

    user_id
        .ok_or_else(|| anyhow::anyhow!("Unknown email."))
        .map_err(AuthError::InvalidCredentials)
}

#[tracing::instrument(
    name = "Verify password hash",
    skip(expected_password_hash, password_candidate)
)]
fn verify_password_hash(
    expected_password_hash: SecretBox<String>,
    password_candidate: SecretBox<String>,
) -> Result<(), AuthError> {
    let expected_password_hash =
        PasswordHash::new(expected_password_hash.expose_secret())
            .context("Failed to parse hash in PHC string format.")?;

    Argon2::default()
        .verify_password(
            password_candidate.expose_secret().as_bytes(),
            &expected_password_hash,
        )
        .context("Invalid password.")
        .map_err(AuthError::InvalidCredentials)
}

#[tracing::instrument(
    name = "Create user",
    skip(credentials, store),
    fields(email = %credentials.email, user_id = tracing::field::Empty)
)]
pub async fn create_user(
    credentials: Credentials,
    store: &AccountStore,
) -> Result<Account, CreateUserError> {
    let Credentials { email, password } = credentials;
    let password_hash =
        spawn_blocking_with_tracing(move || compute_password_hash(password))
            .await
            .map_err(anyhow::Error::from)?
            .context("Failed to hash password")?;
    let account = store
        .create_user(&email, password_hash.expose_secret().clone())
        .await?;
    tracing::Span::current()
        .record("user_id", tracing::field::display(&account.id));
    Ok(account)
}

#[derive(thiserror::Error, Debug)]
pub enum CreateUserError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

fn compute_password_hash(
    password: SecretBox<String>,
) -> Result<SecretBox<String>, anyhow::Error> {
    let salt = SaltString::generate(&mut rand_core::OsRng);
    let params =
        Params::new(15000, 2, 1, None).map_err(|e| anyhow::anyhow!(e))?;
    let password_hash = Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(password.expose_secret().as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e))?
        .to_string();
    Ok(SecretBox::new(Box::new(password_hash)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_only_the_original_password() {
        let hash = compute_password_hash(SecretBox::new(Box::new(
            "correct horse".to_string(),
        )))
        .unwrap();
        let hash_copy = SecretBox::new(Box::new(hash.expose_secret().clone()));

        verify_password_hash(
            hash,
            SecretBox::new(Box::new("correct horse".to_string())),
        )
        .unwrap();

        let result = verify_password_hash(
            hash_copy,
            SecretBox::new(Box::new("battery staple".to_string())),
        );
        assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
    }
}
