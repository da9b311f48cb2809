use serde::Serialize;
use serde_json::Value;

/// `{message, response?}` wrapper every collection endpoint answers with.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct Envelope {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub response: Option<Value>,
}

impl Envelope {
    pub fn message(message: impl Into<String>) -> Self {
        Self { message: message.into(), response: None }
    }

    pub fn with(message: impl Into<String>, response: impl Serialize) -> Self {
        Self {
            message: message.into(),
            response: Some(serde_json::json!(response)),
        }
    }
}
