//! `/status` response body handling.
//!
//! The endpoint answers with `{"state": "RUNNING"}` style JSON, or with an
//! empty body (usually alongside HTTP 404) when the web application never
//! deployed.

use serde::Deserialize;

/// Expected JSON shape of the `/status` response entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatusBody {
    /// Reported lifecycle state. Absent field decodes as empty.
    #[serde(default)]
    pub state: String,
}

/// Whether the body carries nothing but whitespace.
pub fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

/// Decode the `state` field from a response body.
///
/// # Errors
/// Returns the serde error when the body is not a JSON object with a
/// string `state` field.
pub fn parse_state(body: &[u8]) -> Result<String, serde_json::Error> {
    serde_json::from_slice::<StatusBody>(body).map(|b| b.state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_bodies() {
        assert!(is_blank(b""));
        assert!(is_blank(b"\n"));
        assert!(is_blank(b"  \r\n\t \n"));
        assert!(!is_blank(b" {} "));
    }

    #[test]
    fn test_parse_running() {
        assert_eq!(parse_state(br#"{"state":"RUNNING"}"#).unwrap(), "RUNNING");
    }

    #[test]
    fn test_parse_ignores_extra_fields_and_whitespace() {
        let body = b"{ \"state\" : \"STARTING\", \"progress\": 40 }\n";
        assert_eq!(parse_state(body).unwrap(), "STARTING");
    }

    #[test]
    fn test_parse_missing_field_is_empty() {
        assert_eq!(parse_state(b"{}").unwrap(), "");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_state(b"not json").is_err());
        assert!(parse_state(br#"{"state": 3}"#).is_err());
        assert!(parse_state(b"<html>502 Bad Gateway</html>").is_err());
    }
}
