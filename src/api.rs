//! Calls to the RUMI backend.
//!
//! Both endpoints take an empty JSON POST and answer `{"status": "ok"}` when
//! the operation happened. Anything else counts as "did not happen"; callers
//! leave the page untouched in that case.

use gloo_net::http::Request;
use serde::Deserialize;

/// Response body shared by both endpoints.
#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    status: String,
}

impl StatusResponse {
    /// Only the exact status `"ok"` confirms the operation.
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

pub type ApiResult = Result<StatusResponse, gloo_net::Error>;

/// `POST /konten/{konten_id}/selesai` — records that the learner opened
/// (and thereby completed) a piece of learning content.
pub async fn mark_content_complete(konten_id: &str) -> ApiResult {
    post_empty(&format!("/konten/{konten_id}/selesai")).await
}

/// `POST /notifikasi/baca` — flags every unread notification as read.
pub async fn mark_notifications_read() -> ApiResult {
    post_empty("/notifikasi/baca").await
}

async fn post_empty(url: &str) -> ApiResult {
    Request::post(url)
        .header("Content-Type", "application/json")
        .send()
        .await?
        .json::<StatusResponse>()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_status() {
        let response: StatusResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(response.is_ok());
    }

    #[test]
    fn test_non_ok_status() {
        let response: StatusResponse = serde_json::from_str(r#"{"status":"error"}"#).unwrap();
        assert!(!response.is_ok());
    }

    #[test]
    fn test_missing_status_field() {
        let response: StatusResponse = serde_json::from_str("{}").unwrap();
        assert!(!response.is_ok());
    }

    #[test]
    fn test_status_is_case_sensitive() {
        let response: StatusResponse = serde_json::from_str(r#"{"status":"OK"}"#).unwrap();
        assert!(!response.is_ok());
    }
}
