// src/web/response.rs

use serde::Serialize;

/// The uniform response envelope every endpoint speaks.
///
/// `data` is omitted from the JSON entirely when there is no payload, not
/// serialized as `null`. Error responses are built by
/// [`crate::errors::AppError::error_response`] and never carry a `data` key.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
  pub success: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
  /// Success envelope carrying a payload.
  pub fn success(message: impl Into<String>, data: T) -> Self {
    Self {
      success: true,
      message: message.into(),
      data: Some(data),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn data_key_is_omitted_when_absent() {
    let envelope = ApiResponse::<()> {
      success: true,
      message: "ok".to_string(),
      data: None,
    };

    let json = serde_json::to_value(&envelope).unwrap();
    assert_eq!(json, serde_json::json!({"success": true, "message": "ok"}));
  }

  #[test]
  fn data_key_is_present_when_set() {
    let envelope = ApiResponse::success("ok", vec![1, 2, 3]);

    let json = serde_json::to_value(&envelope).unwrap();
    assert_eq!(
      json,
      serde_json::json!({"success": true, "message": "ok", "data": [1, 2, 3]})
    );
  }
}
