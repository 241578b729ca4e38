//! Tests for log redaction rules.

use super::{MASK, Redactor, Rule};
use crate::envelope::Metadata;
use crate::logging::LogKind;
use regex::Regex;

const PAYLOAD: &str = r#"<dt_assoc><item key="domain">example.com</item><item key="reg_password">hunter2</item></dt_assoc>"#;

fn register_meta() -> Metadata {
    Metadata {
        object: Some("DOMAIN".to_owned()),
        action: Some("SW_REGISTER".to_owned()),
    }
}

#[test]
fn register_request_masks_the_password() {
    let redacted = Redactor::new(true).redact(LogKind::Request, PAYLOAD, &register_meta());

    assert!(redacted.contains(r#"<item key="reg_password">**sanitized**</item>"#));
    assert!(!redacted.contains("hunter2"));
    // Everything else is untouched.
    assert!(redacted.contains(r#"<item key="domain">example.com</item>"#));
}

#[test]
fn other_object_action_combinations_pass_through() {
    let meta = Metadata {
        object: Some("DOMAIN".to_owned()),
        action: Some("LOOKUP".to_owned()),
    };

    let redacted = Redactor::new(true).redact(LogKind::Request, PAYLOAD, &meta);

    assert_eq!(redacted, PAYLOAD);
}

#[test]
fn responses_are_not_subject_to_the_register_rule() {
    let redacted = Redactor::new(true).redact(LogKind::Response, PAYLOAD, &register_meta());

    assert_eq!(redacted, PAYLOAD);
}

#[test]
fn disabled_redactor_returns_input_unchanged() {
    let redacted = Redactor::new(false).redact(LogKind::Request, PAYLOAD, &register_meta());

    assert_eq!(redacted, PAYLOAD);
    assert!(redacted.contains("hunter2"));
}

#[test]
fn appended_rules_run_after_the_defaults() {
    let redactor = Redactor::new(true).with_rule(Rule::new(
        "domain-name",
        |kind, _| kind == LogKind::Request,
        Regex::new(r#"(<item key="domain">).*?(</item>)"#).unwrap(),
        format!("${{1}}{MASK}${{2}}"),
    ));

    let redacted = redactor.redact(LogKind::Request, PAYLOAD, &register_meta());

    assert!(!redacted.contains("example.com"));
    assert!(!redacted.contains("hunter2"));
}

#[test]
fn rule_names_are_exposed_for_diagnostics() {
    let rule = Rule::new(
        "noop",
        |_, _| false,
        Regex::new("x").unwrap(),
        "y".to_owned(),
    );

    assert_eq!(rule.name(), "noop");
}
