//! Data models for the playground service.
//!
//! These types mirror the JSON exchanged between the editor page, this
//! server, and the upstream Go playground. Field names follow the wire
//! format, which is why the compile types use PascalCase.

use serde::{Deserialize, Serialize};

/// Protocol version the page sends with every compile request.
pub const COMPILE_VERSION: u32 = 2;

// ============================================================================
// Compile
// ============================================================================

/// Body of `POST /compile` as sent by the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompileRequest {
    pub version: u32,
    pub body: String,
}

impl CompileRequest {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            version: COMPILE_VERSION,
            body: body.into(),
        }
    }
}

/// One output record produced by running a program.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Event {
    pub message: String,
    /// "stdout" or "stderr"
    #[serde(default)]
    pub kind: String,
    /// Nanoseconds to wait before printing this event.
    #[serde(default)]
    pub delay: i64,
}

impl Event {
    pub fn stdout(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: "stdout".to_string(),
            delay: 0,
        }
    }
}

/// Response of `POST /compile`.
///
/// A non-empty `errors` string wins over `events`. The playground sends
/// `"Events": null` when compilation fails, so `events` is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CompileResponse {
    #[serde(default)]
    pub errors: String,
    #[serde(default)]
    pub events: Option<Vec<Event>>,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub is_test: bool,
    #[serde(default)]
    pub tests_failed: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vet_errors: Option<String>,
}

impl CompileResponse {
    pub fn events(&self) -> &[Event] {
        self.events.as_deref().unwrap_or(&[])
    }
}

// ============================================================================
// Share
// ============================================================================

/// Response of `POST /share`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShareResponse {
    #[serde(rename = "shareURL")]
    pub share_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_request_wire_format() {
        let json = serde_json::to_value(CompileRequest::new("package main")).unwrap();
        assert_eq!(json, serde_json::json!({"version": 2, "body": "package main"}));
    }

    #[test]
    fn test_compile_response_from_playground() {
        let raw = r#"{"Errors":"","Events":[{"Message":"Hello, Go!\n","Kind":"stdout","Delay":0}],"Status":0,"IsTest":false,"TestsFailed":0}"#;
        let resp: CompileResponse = serde_json::from_str(raw).unwrap();
        assert!(resp.errors.is_empty());
        assert_eq!(resp.events().len(), 1);
        assert_eq!(resp.events()[0].message, "Hello, Go!\n");
        assert_eq!(resp.events()[0].kind, "stdout");
    }

    #[test]
    fn test_compile_response_null_events() {
        let raw = r#"{"Errors":"prog.go:3:1: syntax error","Events":null}"#;
        let resp: CompileResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.errors, "prog.go:3:1: syntax error");
        assert!(resp.events().is_empty());
    }

    #[test]
    fn test_compile_response_minimal_fields() {
        let resp: CompileResponse =
            serde_json::from_str(r#"{"Events":[{"Message":"hi"}]}"#).unwrap();
        assert_eq!(resp.events()[0], Event { message: "hi".into(), kind: String::new(), delay: 0 });
    }

    #[test]
    fn test_share_response_field_name() {
        let json = serde_json::to_string(&ShareResponse {
            share_url: "https://go.dev/play/p/abc".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"shareURL":"https://go.dev/play/p/abc"}"#);
    }
}
