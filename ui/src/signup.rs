//! The signup submit sequence and what the page does once it settles.

use std::future::Future;

use payloads::{ClientError, signup::SignupOutcome};

/// Delay before leaving for the login page when the account already exists.
pub const DUPLICATE_REDIRECT_DELAY_MS: u32 = 1500;
/// Delay before leaving for the login page after a successful signup.
pub const SUCCESS_REDIRECT_DELAY_MS: u32 = 2000;

pub const DUPLICATE_ACCOUNT_ALERT: &str =
    "Email already registered! Redirecting to login page...";
pub const SIGNUP_SUCCESS_ALERT: &str = "✅ Signup successful! Your account \
     has been created. Redirecting to login...";
pub const UNEXPECTED_ERROR_FALLBACK: &str = "An unexpected error occurred.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupResolution {
    /// Show a blocking alert, then go to the login page after `delay_ms`.
    RedirectToLogin {
        alert: &'static str,
        delay_ms: u32,
    },
    /// Stay on the page and show the message inline.
    ShowError(String),
}

impl SignupResolution {
    pub fn from_result(result: Result<SignupOutcome, ClientError>) -> Self {
        match result {
            Ok(SignupOutcome::Created) => Self::RedirectToLogin {
                alert: SIGNUP_SUCCESS_ALERT,
                delay_ms: SUCCESS_REDIRECT_DELAY_MS,
            },
            Ok(SignupOutcome::AlreadyRegistered) => Self::RedirectToLogin {
                alert: DUPLICATE_ACCOUNT_ALERT,
                delay_ms: DUPLICATE_REDIRECT_DELAY_MS,
            },
            Ok(SignupOutcome::Rejected { message, .. }) => {
                Self::ShowError(message)
            }
            Err(e) => {
                let message = e.to_string();
                if message.is_empty() {
                    Self::ShowError(UNEXPECTED_ERROR_FALLBACK.to_string())
                } else {
                    Self::ShowError(message)
                }
            }
        }
    }
}

/// The page-side effects of a signup submission.
pub trait SignupView {
    fn set_loading(&self, is_loading: bool);
    fn set_error(&self, error: Option<String>);
    /// Show `alert` and navigate to the login page after `delay_ms`.
    fn redirect_to_login(&self, alert: &'static str, delay_ms: u32);
}

/// Run one signup round-trip against `view`.
///
/// Loading is raised and any previous error cleared before `request` is
/// polled; loading is lowered once the outcome has been applied, whatever
/// it was.
pub async fn submit_signup<V, F>(view: &V, request: F) -> SignupResolution
where
    V: SignupView,
    F: Future<Output = Result<SignupOutcome, ClientError>>,
{
    view.set_loading(true);
    view.set_error(None);

    let result = request.await;
    if let Err(e) = &result {
        tracing::error!("Signup error: {e}");
    }

    let resolution = SignupResolution::from_result(result);
    match &resolution {
        SignupResolution::RedirectToLogin { alert, delay_ms } => {
            view.redirect_to_login(alert, *delay_ms);
        }
        SignupResolution::ShowError(message) => {
            view.set_error(Some(message.clone()));
        }
    }

    view.set_loading(false);
    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use payloads::signup::SIGNUP_FAILED_FALLBACK;
    use reqwest::StatusCode;
    use serde_json::json;
    use std::cell::RefCell;

    fn resolve(status: u16, body: serde_json::Value) -> SignupResolution {
        let status = StatusCode::from_u16(status).unwrap();
        SignupResolution::from_result(Ok(SignupOutcome::from_response(
            status, &body,
        )))
    }

    /// A reqwest error without touching the network: the url never parses.
    fn transport_error() -> reqwest::Error {
        reqwest::Client::new()
            .post("not a url")
            .build()
            .expect_err("relative url should not build")
    }

    #[derive(Default)]
    struct RecordingView {
        loading: RefCell<Vec<bool>>,
        error: RefCell<Option<String>>,
        redirect: RefCell<Option<(&'static str, u32)>>,
    }

    impl SignupView for RecordingView {
        fn set_loading(&self, is_loading: bool) {
            self.loading.borrow_mut().push(is_loading);
        }

        fn set_error(&self, error: Option<String>) {
            *self.error.borrow_mut() = error;
        }

        fn redirect_to_login(&self, alert: &'static str, delay_ms: u32) {
            *self.redirect.borrow_mut() = Some((alert, delay_ms));
        }
    }

    fn submit_with(
        result: Result<SignupOutcome, ClientError>,
    ) -> RecordingView {
        let view = RecordingView {
            error: RefCell::new(Some("stale error".into())),
            ..Default::default()
        };
        block_on(submit_signup(&view, async { result }));
        view
    }

    #[test]
    fn created_redirects_after_two_seconds() {
        assert_eq!(
            resolve(201, json!({})),
            SignupResolution::RedirectToLogin {
                alert: SIGNUP_SUCCESS_ALERT,
                delay_ms: 2000,
            }
        );
    }

    #[test]
    fn existing_email_redirects_after_a_second_and_a_half() {
        assert_eq!(
            resolve(400, json!({"detail": "Email already exists"})),
            SignupResolution::RedirectToLogin {
                alert: DUPLICATE_ACCOUNT_ALERT,
                delay_ms: 1500,
            }
        );
    }

    #[test]
    fn other_refusals_show_detail_inline() {
        assert_eq!(
            resolve(400, json!({"detail": "Password too short"})),
            SignupResolution::ShowError("Password too short".into())
        );
        assert_eq!(
            resolve(500, json!({})),
            SignupResolution::ShowError(SIGNUP_FAILED_FALLBACK.into())
        );
    }

    #[test]
    fn client_errors_show_their_message() {
        let parse_error =
            serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let resolution =
            SignupResolution::from_result(Err(ClientError::InvalidBody(
                parse_error,
            )));
        match resolution {
            SignupResolution::ShowError(message) => {
                assert!(message.starts_with("Unexpected response from server"))
            }
            other => panic!("expected inline error, got {other:?}"),
        }
    }

    #[test]
    fn transport_failure_shows_the_transport_message() {
        let error = transport_error();
        let expected = error.to_string();
        assert!(!expected.is_empty());

        assert_eq!(
            SignupResolution::from_result(Err(ClientError::Network(error))),
            SignupResolution::ShowError(expected)
        );
    }

    #[test]
    fn loading_ends_false_after_success() {
        let view = submit_with(Ok(SignupOutcome::Created));
        assert_eq!(*view.loading.borrow(), vec![true, false]);
        assert_eq!(*view.error.borrow(), None);
        assert_eq!(
            *view.redirect.borrow(),
            Some((SIGNUP_SUCCESS_ALERT, SUCCESS_REDIRECT_DELAY_MS))
        );
    }

    #[test]
    fn loading_ends_false_after_duplicate() {
        let view = submit_with(Ok(SignupOutcome::AlreadyRegistered));
        assert_eq!(*view.loading.borrow(), vec![true, false]);
        assert_eq!(*view.error.borrow(), None);
        assert_eq!(
            *view.redirect.borrow(),
            Some((DUPLICATE_ACCOUNT_ALERT, DUPLICATE_REDIRECT_DELAY_MS))
        );
    }

    #[test]
    fn loading_ends_false_after_refusal() {
        let view = submit_with(Ok(SignupOutcome::Rejected {
            status: StatusCode::BAD_REQUEST,
            message: "Password too short".into(),
        }));
        assert_eq!(*view.loading.borrow(), vec![true, false]);
        assert_eq!(
            view.error.borrow().as_deref(),
            Some("Password too short")
        );
        assert_eq!(*view.redirect.borrow(), None);
    }

    #[test]
    fn loading_ends_false_after_transport_failure() {
        let error = transport_error();
        let expected = error.to_string();

        let view = submit_with(Err(ClientError::Network(error)));
        assert_eq!(*view.loading.borrow(), vec![true, false]);
        assert_eq!(view.error.borrow().as_deref(), Some(expected.as_str()));
        assert_eq!(*view.redirect.borrow(), None);
    }
}
