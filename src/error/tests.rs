//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod kards_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let kards_error = KardsError::from(json_error);

        match kards_error {
            KardsError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed");
        let kards_error = KardsError::from(io_error);

        match kards_error {
            KardsError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let kards_error = KardsError::from(header_error);

        match kards_error {
            KardsError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_graphql_error_joins_messages() {
        let error = KardsError::GraphQl {
            messages: vec!["first".to_string(), "second".to_string()],
        };

        assert_eq!(
            error.to_string(),
            "GraphQL request returned errors: first; second"
        );
    }

    #[test]
    fn test_timeout_error() {
        let error = KardsError::Timeout { secs: 30 };
        assert_eq!(error.to_string(), "Request timed out after 30s");
    }

    #[test]
    fn test_invalid_player_id_error() {
        let error = KardsError::InvalidPlayerId {
            value: "12ab".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Invalid player id"));
        assert!(error_string.contains("12ab"));
    }

    #[test]
    fn test_invalid_environment_error() {
        let error = KardsError::InvalidEnvironment {
            value: "staging".to_string(),
        };

        assert!(error.to_string().contains("staging"));
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let kards_error = KardsError::from(io_error);

        let error_trait: &dyn std::error::Error = &kards_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_error_debug_formatting() {
        let error = KardsError::NoPlayerLoaded;
        assert_eq!(format!("{:?}", error), "NoPlayerLoaded");
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(KardsError::RequestInFlight)
        }

        match test_function().unwrap_err() {
            KardsError::RequestInFlight => (),
            _ => panic!("Expected RequestInFlight error"),
        }
    }
}

#[cfg(test)]
mod request_failure_tests {
    use super::*;

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            RequestFailure::Validation.message(),
            "Invalid player name / id format"
        );
        assert_eq!(RequestFailure::Protocol.message(), "Unknown Response");
        assert_eq!(RequestFailure::Transport.message(), "Unknown error");
    }

    #[test]
    fn test_domain_message_is_verbatim() {
        let failure = RequestFailure::Domain("Player not found".to_string());
        assert_eq!(failure.message(), "Player not found");
        assert_eq!(failure.to_string(), "Player not found");
    }
}
