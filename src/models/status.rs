use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: "ok", message: None }
    }

    pub fn ok_with_message(message: impl Into<String>) -> Self {
        Self { status: "ok", message: Some(message.into()) }
    }

    pub fn alive() -> Self {
        Self { status: "alive", message: None }
    }
}
