use serde_json::Value;

/// Failure of a backend call, carrying a message fit for display.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("{0}")]
    Transport(String),

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("{0}")]
    Storage(#[from] mealsu_shared::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Response payload as the client saw it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Body {
    Json(Value),
    Text(String),
}

/// Picks the message of a failed response: JSON `message`, then JSON
/// `error`, then the raw text, then the HTTP reason phrase.
pub(crate) fn failure_message(body: &Body, reason: Option<&str>) -> String {
    let found = match body {
        Body::Json(value) => ["message", "error"]
            .iter()
            .filter_map(|field| value.get(field).and_then(Value::as_str))
            .find(|text| !text.trim().is_empty())
            .map(str::to_owned),
        Body::Text(text) if !text.trim().is_empty() => Some(text.to_owned()),
        Body::Text(_) => None,
    };

    found
        .or_else(|| reason.map(str::to_owned))
        .unwrap_or_else(|| "Request failed".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_field_wins() {
        let body = Body::Json(json!({"message": "Invalid credentials", "error": "unauthorized"}));
        assert_eq!(failure_message(&body, Some("Unauthorized")), "Invalid credentials");
    }

    #[test]
    fn error_field_is_second_choice() {
        let body = Body::Json(json!({"message": "", "error": "email taken"}));
        assert_eq!(failure_message(&body, Some("Conflict")), "email taken");
    }

    #[test]
    fn raw_text_then_reason() {
        assert_eq!(
            failure_message(&Body::Text("upstream down".to_owned()), Some("Bad Gateway")),
            "upstream down"
        );
        assert_eq!(
            failure_message(&Body::Text(String::new()), Some("Bad Gateway")),
            "Bad Gateway"
        );
        assert_eq!(
            failure_message(&Body::Json(json!({"detail": 1})), Some("Not Found")),
            "Not Found"
        );
        assert_eq!(failure_message(&Body::Json(json!(null)), None), "Request failed");
    }
}
