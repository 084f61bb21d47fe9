use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use talentrack_core::{DecisionError, FormError};

pub const NON_JSON_MESSAGE: &str = "Backend devolvió HTML (revisa ruta/auth).";

/// Every failure a page can show, already phrased for the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl From<FormError> for ApiError {
    fn from(error: FormError) -> Self {
        Self::validation(error.to_string())
    }
}

impl From<DecisionError> for ApiError {
    fn from(error: DecisionError) -> Self {
        Self::validation(error.to_string())
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn non_json() -> Self {
        Self {
            error: NON_JSON_MESSAGE.to_string(),
            code: "NON_JSON_RESPONSE".to_string(),
            details: None,
        }
    }

    /// Builds the error for a non-2xx response.
    ///
    /// A string `detail` is shown verbatim; any other JSON payload is shown
    /// as its serialization; a body that is not JSON at all usually means
    /// the request hit the SPA host instead of the API.
    pub fn from_response(status: u16, body: &str) -> Self {
        let Ok(payload) = serde_json::from_str::<Value>(body) else {
            return Self::non_json();
        };
        let error = match payload.get("detail").and_then(Value::as_str) {
            Some(detail) => detail.to_string(),
            None => payload.to_string(),
        };
        Self {
            error,
            code: status_code_name(status),
            details: Some(payload),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }
}

fn status_code_name(status: u16) -> String {
    match status {
        400 => "BAD_REQUEST".into(),
        401 => "UNAUTHORIZED".into(),
        403 => "FORBIDDEN".into(),
        404 => "NOT_FOUND".into(),
        409 => "CONFLICT".into(),
        other => format!("HTTP_{}", other),
    }
}

/// Body of `POST /auth/refresh/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    #[serde(default)]
    pub access: Option<String>,
}
