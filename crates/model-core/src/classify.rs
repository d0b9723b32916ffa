//! Mapping raw model failures to user-facing messages.
//!
//! Classification is pure and synchronous; no retries are attempted.
//! Callers log the original error before classifying it.

/// Shown when the server-side API key is missing or rejected.
pub const CREDENTIAL_MESSAGE: &str =
    "The AI service is not configured correctly. Please contact the administrator.";

/// Shown when the provider reports an exhausted quota.
pub const QUOTA_MESSAGE: &str =
    "The AI service quota has been exceeded. Please try again later.";

/// Shown when the proxy could not reach the provider.
pub const UPSTREAM_MESSAGE: &str =
    "Could not reach the AI service. Please check your connection and try again.";

/// Shown when the failure carried no message at all.
pub const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

/// Produce a single user-facing message for a raw failure.
///
/// Rules are checked in order against the lower-cased message:
/// credential, quota, upstream communication, then a generic wrapper
/// embedding the original text.
pub fn user_message(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return GENERIC_MESSAGE.to_string();
    };

    let lowered = raw.to_lowercase();
    if lowered.contains("api key not valid") || lowered.contains("api_key_invalid") {
        CREDENTIAL_MESSAGE.to_string()
    } else if lowered.contains("quota") {
        QUOTA_MESSAGE.to_string()
    } else if lowered.contains("failed to call the ai service") {
        UPSTREAM_MESSAGE.to_string()
    } else {
        format!("An error occurred: {}", raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_variants() {
        assert_eq!(
            user_message(Some("400 API key not valid. Please pass a valid API key.")),
            CREDENTIAL_MESSAGE
        );
        assert_eq!(
            user_message(Some("error: API_KEY_INVALID")),
            CREDENTIAL_MESSAGE
        );
    }

    #[test]
    fn test_quota_any_case() {
        assert_eq!(user_message(Some("Quota exceeded for model")), QUOTA_MESSAGE);
        assert_eq!(user_message(Some("RESOURCE_EXHAUSTED: QUOTA")), QUOTA_MESSAGE);
    }

    #[test]
    fn test_upstream_phrase() {
        assert_eq!(
            user_message(Some("Failed to call the AI service.")),
            UPSTREAM_MESSAGE
        );
    }

    #[test]
    fn test_unrecognized_wrapped_verbatim() {
        assert_eq!(
            user_message(Some("candidate was blocked")),
            "An error occurred: candidate was blocked"
        );
    }

    #[test]
    fn test_no_message() {
        assert_eq!(user_message(None), GENERIC_MESSAGE);
    }

    #[test]
    fn test_credential_beats_quota() {
        // Rules apply in order; a message mentioning both is a key problem.
        assert_eq!(
            user_message(Some("API_KEY_INVALID while checking quota")),
            CREDENTIAL_MESSAGE
        );
    }
}
