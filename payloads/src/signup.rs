//! Classification of signup responses.
//!
//! The backend does not send a structured error code for an email that is
//! already taken, so a failed signup is recognized as a duplicate account by
//! looking for keywords in the lower-cased `detail` message. Any message that
//! happens to contain one of the keywords (for example "exists") lands in the
//! duplicate branch, even if the server meant something else.

use reqwest::StatusCode;

use crate::responses::ErrorDetail;

/// Lower-case substrings that mark a failed signup as a duplicate account.
pub const DUPLICATE_ACCOUNT_KEYWORDS: &[&str] =
    &["already registered", "email already", "exists", "duplicate"];

/// Inline message shown when a failed signup carries no usable detail.
pub const SIGNUP_FAILED_FALLBACK: &str = "Signup failed. Please try again.";

/// What a single signup round-trip resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    /// The server accepted the account.
    Created,
    /// The server refused because the account already exists.
    AlreadyRegistered,
    /// Any other refusal. `message` is the server's detail, or the fallback.
    Rejected { status: StatusCode, message: String },
}

impl SignupOutcome {
    /// Classify a response whose body has already been parsed as JSON.
    pub fn from_response(status: StatusCode, body: &serde_json::Value) -> Self {
        if status.is_success() {
            return Self::Created;
        }

        let detail: ErrorDetail =
            serde_json::from_value(body.clone()).unwrap_or_default();
        let message = detail.message().unwrap_or_default();

        if is_duplicate_account_detail(message) {
            Self::AlreadyRegistered
        } else if message.is_empty() {
            Self::Rejected {
                status,
                message: SIGNUP_FAILED_FALLBACK.to_string(),
            }
        } else {
            Self::Rejected {
                status,
                message: message.to_string(),
            }
        }
    }
}

/// Case-insensitive keyword match on a server detail message.
pub fn is_duplicate_account_detail(detail: &str) -> bool {
    let detail = detail.to_lowercase();
    DUPLICATE_ACCOUNT_KEYWORDS
        .iter()
        .any(|keyword| detail.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_status_is_created() {
        assert_eq!(
            SignupOutcome::from_response(StatusCode::CREATED, &json!({})),
            SignupOutcome::Created
        );
        // Any detail on a success response is ignored.
        assert_eq!(
            SignupOutcome::from_response(
                StatusCode::OK,
                &json!({"detail": "duplicate"})
            ),
            SignupOutcome::Created
        );
    }

    #[test]
    fn duplicate_keywords_redirect() {
        for detail in [
            "Email already exists",
            "Email already registered",
            "EMAIL ALREADY taken",
            "User Exists",
            "duplicate key value violates unique constraint",
        ] {
            assert_eq!(
                SignupOutcome::from_response(
                    StatusCode::BAD_REQUEST,
                    &json!({ "detail": detail })
                ),
                SignupOutcome::AlreadyRegistered,
                "{detail}"
            );
        }
    }

    #[test]
    fn unrelated_message_containing_exists_still_matches() {
        assert!(is_duplicate_account_detail(
            "Referral code no longer exists"
        ));
    }

    #[test]
    fn other_failures_keep_detail_verbatim() {
        assert_eq!(
            SignupOutcome::from_response(
                StatusCode::BAD_REQUEST,
                &json!({"detail": "Password too short"})
            ),
            SignupOutcome::Rejected {
                status: StatusCode::BAD_REQUEST,
                message: "Password too short".into(),
            }
        );
    }

    #[test]
    fn missing_or_non_string_detail_uses_fallback() {
        for body in [
            json!({}),
            json!({"detail": ""}),
            json!({"detail": null}),
            json!({"detail": [{"loc": ["body", "email"], "msg": "field required"}]}),
            json!([1, 2, 3]),
        ] {
            assert_eq!(
                SignupOutcome::from_response(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    &body
                ),
                SignupOutcome::Rejected {
                    status: StatusCode::UNPROCESSABLE_ENTITY,
                    message: SIGNUP_FAILED_FALLBACK.into(),
                },
                "{body}"
            );
        }
    }
}
