use payloads::requests::AuthCredentials;
use payloads::signup::SignupOutcome;
use reqwest::StatusCode;

use test_helpers::{alice_credentials, assert_status_code, spawn_app};

#[tokio::test]
async fn signup_creates_account() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let outcome = app.client.signup(&alice_credentials()).await?;
    assert_eq!(outcome, SignupOutcome::Created);

    Ok(())
}

#[tokio::test]
async fn duplicate_signup_is_classified_as_already_registered()
-> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;

    // same address with different casing is still the same account
    let body = AuthCredentials {
        email: "ALICE@example.com".into(),
        password: "anotherpassword".into(),
    };
    let outcome = app.client.signup(&body).await?;
    assert_eq!(outcome, SignupOutcome::AlreadyRegistered);

    let (status, detail) = app
        .post_raw(
            "auth/signup",
            r#"{"email": "alice@example.com", "password": "supersecret"}"#,
        )
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(detail.message(), Some("Email already registered"));

    Ok(())
}

#[tokio::test]
async fn invalid_signup_is_rejected_with_detail() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let body = AuthCredentials {
        email: "bob@example.com".into(),
        password: "short".into(),
    };
    let outcome = app.client.signup(&body).await?;
    assert_eq!(
        outcome,
        SignupOutcome::Rejected {
            status: StatusCode::BAD_REQUEST,
            message: "Password must be at least 8 characters".into(),
        }
    );

    let body = AuthCredentials {
        email: "not-an-email".into(),
        password: "supersecret".into(),
    };
    let outcome = app.client.signup(&body).await?;
    assert_eq!(
        outcome,
        SignupOutcome::Rejected {
            status: StatusCode::BAD_REQUEST,
            message: "Please enter a valid email address".into(),
        }
    );

    Ok(())
}

#[tokio::test]
async fn malformed_body_gets_json_detail() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let (status, detail) =
        app.post_raw("auth/signup", r#"{"email": "x@y.z"}"#).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        detail
            .message()
            .is_some_and(|m| m.starts_with("Invalid request body"))
    );

    Ok(())
}

#[tokio::test]
async fn login_after_signup() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let credentials = app.create_alice_user().await?;

    let response = app.client.login(&credentials).await?;
    assert_eq!(response.message, "Login successful");

    Ok(())
}

#[tokio::test]
async fn login_refused() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;

    let wrong_password = AuthCredentials {
        email: "alice@example.com".into(),
        password: "not-the-password".into(),
    };
    let result = app.client.login(&wrong_password).await;
    match result {
        Err(payloads::ClientError::APIError(code, text)) => {
            assert_eq!(code, StatusCode::UNAUTHORIZED);
            assert_eq!(text, "Invalid email or password");
        }
        _ => panic!("Expected APIError"),
    }

    let unknown = AuthCredentials {
        email: "nobody@example.com".into(),
        password: "whatever123".into(),
    };
    assert_status_code(
        app.client.login(&unknown).await,
        StatusCode::UNAUTHORIZED,
    );

    Ok(())
}
