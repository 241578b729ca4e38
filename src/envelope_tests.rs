//! Tests for envelope values and base merging.

use super::{Envelope, Metadata, PROTOCOL_KEY, Value, merge_over_base};

fn fields(pairs: &[(&str, &str)]) -> Envelope {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_owned(), Value::from(*value)))
        .collect()
}

mod merging {
    use super::*;

    #[test]
    fn base_supplies_protocol_when_caller_omits_it() {
        let merged = merge_over_base(fields(&[("action", "LOOKUP")]));

        assert_eq!(
            merged.get(PROTOCOL_KEY).and_then(Value::as_text),
            Some("XCP")
        );
        assert_eq!(merged.get("action").and_then(Value::as_text), Some("LOOKUP"));
    }

    #[test]
    fn caller_protocol_overrides_base() {
        let merged = merge_over_base(fields(&[(PROTOCOL_KEY, "XCP2")]));

        assert_eq!(
            merged.get(PROTOCOL_KEY).and_then(Value::as_text),
            Some("XCP2")
        );
    }

    #[test]
    fn empty_fields_yield_only_the_base() {
        let merged = merge_over_base(Envelope::new());

        assert_eq!(merged.len(), 1);
        assert_eq!(
            merged.get(PROTOCOL_KEY).and_then(Value::as_text),
            Some("XCP")
        );
    }
}

mod metadata {
    use super::*;

    #[test]
    fn object_and_action_are_pulled_from_fields() {
        let envelope = fields(&[("object", "DOMAIN"), ("action", "SW_REGISTER")]);

        let meta = Metadata::from_envelope(&envelope);

        assert_eq!(meta.object.as_deref(), Some("DOMAIN"));
        assert_eq!(meta.action.as_deref(), Some("SW_REGISTER"));
    }

    #[test]
    fn missing_fields_leave_metadata_empty() {
        let meta = Metadata::from_envelope(&Envelope::new());

        assert_eq!(meta, Metadata::default());
    }

    #[test]
    fn non_text_fields_are_ignored() {
        let mut envelope = Envelope::new();
        envelope.insert("object".to_owned(), Value::List(vec![]));

        let meta = Metadata::from_envelope(&envelope);

        assert_eq!(meta.object, None);
    }
}

mod values {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn accessors_match_variants() {
        let text = Value::from("hello");
        let assoc = Value::Assoc(BTreeMap::new());
        let list = Value::List(vec![Value::from("a")]);

        assert_eq!(text.as_text(), Some("hello"));
        assert!(text.as_assoc().is_none());
        assert!(assoc.as_assoc().is_some());
        assert_eq!(list.as_list().map(<[Value]>::len), Some(1));
    }
}
