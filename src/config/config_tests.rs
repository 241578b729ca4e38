//! Tests for configuration defaults and validation.

use super::{ClientConfig, ConfigError, DEFAULT_ENDPOINT};
use url::Url;

mod defaults {
    use super::*;

    #[test]
    fn new_points_at_the_live_endpoint() {
        let config = ClientConfig::new("user", "key");

        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.endpoint.path(), "/");
    }

    #[test]
    fn safe_defaults_are_on() {
        let config = ClientConfig::new("user", "key");

        assert!(config.verify_tls);
        assert!(config.sanitize_logs);
        assert!(!config.compact_logs);
        assert_eq!(config.codec, "xml");
        assert!(config.read_timeout.is_none());
        assert!(config.connect_timeout.is_none());
        assert!(config.proxy.is_none());
    }
}

mod validation {
    use super::*;

    #[test]
    fn valid_config_passes() {
        assert!(ClientConfig::new("user", "key").validate().is_ok());
    }

    #[test]
    fn empty_username_is_rejected() {
        let error = ClientConfig::new("", "key").validate();

        assert!(matches!(
            error,
            Err(ConfigError::MissingRequired { field: "username", .. })
        ));
    }

    #[test]
    fn empty_key_is_rejected() {
        let error = ClientConfig::new("user", "").validate();

        assert!(matches!(
            error,
            Err(ConfigError::MissingRequired { field: "key", .. })
        ));
    }

    #[test]
    fn non_http_endpoint_scheme_is_rejected() {
        let config = ClientConfig::new("user", "key")
            .with_endpoint(Url::parse("ftp://example.net/").unwrap());

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }
}

mod debug_redaction {
    use super::*;

    #[test]
    fn key_and_password_never_appear_in_debug_output() {
        let config = ClientConfig::new("user", "deep-secret").with_password("hunter2");

        let debugged = format!("{config:?}");

        assert!(!debugged.contains("deep-secret"));
        assert!(!debugged.contains("hunter2"));
        assert!(debugged.contains("<redacted>"));
    }
}
