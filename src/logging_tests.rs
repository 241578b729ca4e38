//! Tests for wire log-line formatting.

use super::{LogKind, wire_line};
use crate::envelope::Metadata;

fn meta(object: &str, action: &str) -> Metadata {
    Metadata {
        object: Some(object.to_owned()),
        action: Some(action.to_owned()),
    }
}

#[test]
fn request_line_carries_object_and_action() {
    let line = wire_line(
        LogKind::Request,
        &meta("DOMAIN", "SW_REGISTER"),
        "<xml/>",
        false,
    );

    assert_eq!(line, "[XCP] Request XML for DOMAIN SW_REGISTER\n<xml/>");
}

#[test]
fn response_line_without_metadata_has_no_for_clause() {
    let line = wire_line(LogKind::Response, &Metadata::default(), "<xml/>", false);

    assert_eq!(line, "[XCP] Response XML\n<xml/>");
}

#[test]
fn partial_metadata_is_omitted() {
    let partial = Metadata {
        object: Some("DOMAIN".to_owned()),
        action: None,
    };

    let line = wire_line(LogKind::Request, &partial, "<xml/>", false);

    assert_eq!(line, "[XCP] Request XML\n<xml/>");
}

#[test]
fn compaction_strips_line_breaks_and_leading_whitespace() {
    let payload = "<dt_assoc>\n  <item key=\"x\">1</item>\n</dt_assoc>";

    let line = wire_line(LogKind::Response, &Metadata::default(), payload, true);

    assert!(!line.contains('\n'));
    assert_eq!(
        line,
        "[XCP] Response XML <dt_assoc><item key=\"x\">1</item></dt_assoc>"
    );
}
