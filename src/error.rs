use std::fmt;

/// Custom error type for Meraki dashboard operations
#[derive(Debug)]
pub enum MerakiError {
    /// HTTP request failed at the connection level
    Http(reqwest::Error),
    /// Dashboard returned a response outside the accepted status set.
    /// The body is carried verbatim so callers see exactly what the
    /// dashboard reported (e.g. `{"errors": [...]}` on a rejected VLAN).
    Api {
        status: u16,
        body: serde_json::Value,
    },
    /// Response body was not the JSON shape we expect
    Parse(String),
    /// A named entity (organization, network) was not found among candidates
    NotFound { kind: &'static str, name: String },
    /// A discovery walk completed without errors but matched no clients
    NoClients(String),
    /// Configuration error
    Config(String),
    /// Requested action exists upstream but is not implemented
    Unsupported(String),
}

impl fmt::Display for MerakiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MerakiError::Http(e) => write!(f, "HTTP request failed: {}", e),
            MerakiError::Api { status, body } => {
                write!(f, "API error (status {}): {}", status, body)
            }
            MerakiError::Parse(msg) => write!(f, "Parse error: {}", msg),
            MerakiError::NotFound { kind, name } => {
                write!(f, "{} '{}' not found", kind, name)
            }
            MerakiError::NoClients(msg) => write!(f, "{}", msg),
            MerakiError::Config(msg) => write!(f, "Configuration error: {}", msg),
            MerakiError::Unsupported(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for MerakiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MerakiError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MerakiError {
    fn from(err: reqwest::Error) -> Self {
        MerakiError::Http(err)
    }
}

impl From<serde_json::Error> for MerakiError {
    fn from(err: serde_json::Error) -> Self {
        MerakiError::Parse(err.to_string())
    }
}

/// Result type alias for Meraki operations
pub type Result<T> = std::result::Result<T, MerakiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_carries_body_verbatim() {
        let err = MerakiError::Api {
            status: 400,
            body: serde_json::json!({"errors": ["Validation failed: Vlan has already been taken"]}),
        };
        let msg = err.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("Vlan has already been taken"));
    }

    #[test]
    fn test_not_found_display() {
        let err = MerakiError::NotFound {
            kind: "Organization",
            name: "WWT".to_string(),
        };
        assert_eq!(err.to_string(), "Organization 'WWT' not found");
    }

    #[test]
    fn test_no_clients_display() {
        let err = MerakiError::NoClients("Returned: 0 clients".to_string());
        assert_eq!(err.to_string(), "Returned: 0 clients");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        // Verify MerakiError is Send + Sync for async usage
        assert_send_sync::<MerakiError>();
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: MerakiError = json_err.into();
        match err {
            MerakiError::Parse(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected MerakiError::Parse"),
        }
    }

    #[test]
    fn test_error_source_non_http_is_none() {
        use std::error::Error;
        let err = MerakiError::Config("missing api key".to_string());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_unsupported_display() {
        let err = MerakiError::Unsupported("Delete and Update not implemented".to_string());
        assert_eq!(err.to_string(), "Delete and Update not implemented");
    }
}
