//! Unit tests for top-level CHIP-0007 document parsing
//!
//! Covers required fields per mode, defaults, unknown keys, decode errors,
//! format handling and the output shape of parsed records.

use nftmeta_parser::{
    parse_metadata, Error, ErrorKind, ErrorTag, Format, Metadata, SensitiveContent,
};
use serde_json::{json, Value};

fn parse(doc: &Value, strict: bool) -> nftmeta_parser::Result<Metadata> {
    parse_metadata(&doc.to_string(), strict, Format::Chip0007)
}

fn full_document() -> Value {
    json!({
        "format": "CHIP-0007",
        "name": "Pikachu",
        "description": "Electric-type Pokémon with stretchy cheeks",
        "minting_tool": "SuperMinter/2.5.2",
        "sensitive_content": false,
        "series_number": 22,
        "series_total": 1000,
        "attributes": [
            {"trait_type": "Species", "value": "Mouse"},
            {"trait_type": "Color", "value": "Yellow"},
            {"trait_type": "Friendship", "value": 50, "min_value": 0, "max_value": 255}
        ],
        "collection": {
            "name": "Example Pokémon Collection",
            "id": "e43fcfe6-1d5c-4d6e-82da-5de3aa8b3b57",
            "attributes": [
                {"type": "description", "value": "Example Pokémon Collection is the best Pokémon collection."},
                {"type": "icon", "value": "https://pokemon.com/collection/icon.png"}
            ]
        },
        "data": {"example_data": "VGhpcyBpcyBhbiBleGFtcGxlIG9mIGRhdGEgdGhhdCB5b3UgbWlnaHQgd2FudCB0byBzdG9yZSBpbiB0aGUgZGF0YSBmaWVsZCBvZiB5b3VyIG1ldGFkYXRhLg=="}
    })
}

#[cfg(test)]
mod valid_documents {
    use super::*;

    #[test]
    fn test_minimal_document_lenient() {
        let doc = json!({"format": "CHIP-0007", "name": "N", "description": "D"});
        let metadata = parse(&doc, false).unwrap();
        assert_eq!(metadata, Metadata::new(Format::Chip0007, "N", "D"));
    }

    #[test]
    fn test_full_document_both_modes() {
        for strict in [true, false] {
            let metadata = parse(&full_document(), strict).unwrap();
            assert_eq!(metadata.name, "Pikachu");
            assert_eq!(metadata.minting_tool.as_deref(), Some("SuperMinter/2.5.2"));
            assert_eq!(metadata.sensitive_content, Some(SensitiveContent::Flag(false)));
            assert_eq!(metadata.series_number, Some(22));
            assert_eq!(metadata.series_total, Some(1000));
            assert_eq!(metadata.attributes.as_ref().map(Vec::len), Some(3));
            assert_eq!(metadata.collection.as_ref().map(|c| c.id.as_str()), Some("e43fcfe6-1d5c-4d6e-82da-5de3aa8b3b57"));
            assert!(metadata.data.is_some());
        }
    }

    #[test]
    fn test_reserved_format_identifier_is_accepted_in_documents() {
        let doc = json!({"format": "CHIP-0015", "name": "N", "description": "D"});
        assert_eq!(parse(&doc, true).unwrap().format, Format::Chip0015);
    }

    #[test]
    fn test_data_is_passed_through() {
        let doc = json!({"name": "N", "data": [1, {"nested": null}, "x"]});
        assert_eq!(parse(&doc, false).unwrap().data, Some(json!([1, {"nested": null}, "x"])));

        let doc = json!({"name": "N", "data": null});
        assert_eq!(parse(&doc, false).unwrap().data, Some(Value::Null));
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        for strict in [true, false] {
            let first = parse(&full_document(), strict).unwrap();
            let serialized = serde_json::to_value(&first).unwrap();
            assert_eq!(serialized, full_document());

            let second = parse(&serialized, strict).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_absent_optionals_are_not_serialized() {
        let metadata = parse(&json!({"name": "N"}), false).unwrap();
        assert_eq!(
            serde_json::to_value(&metadata).unwrap(),
            json!({"format": "CHIP-0007", "name": "N", "description": ""})
        );
    }
}

#[cfg(test)]
mod lenient_defaults {
    use super::*;

    #[test]
    fn test_empty_document_gets_defaults() {
        let metadata = parse(&json!({}), false).unwrap();
        assert_eq!(metadata.format, Format::Chip0007);
        assert_eq!(metadata.name, "");
        assert_eq!(metadata.description, "");
        assert_eq!(metadata.series_number, None);
        assert_eq!(metadata.series_total, None);
    }

    #[test]
    fn test_empty_text_is_kept() {
        let doc = json!({"format": "CHIP-0007", "name": "", "description": ""});
        let metadata = parse(&doc, false).unwrap();
        assert_eq!(metadata.name, "");
        assert_eq!(metadata.description, "");
    }

    #[test]
    fn test_unknown_top_level_key_ignored() {
        let doc = json!({"format": "CHIP-0007", "name": "N", "description": "D", "license": "CC0"});
        assert_eq!(parse(&doc, false).unwrap(), Metadata::new(Format::Chip0007, "N", "D"));
    }

    #[test]
    fn test_sensitive_content_text_flag() {
        let doc = json!({"format": "CHIP-0007", "name": "N", "description": "D", "sensitive_content": "TRUE"});
        assert_eq!(parse(&doc, false).unwrap().sensitive_content, Some(SensitiveContent::Flag(true)));

        let doc = json!({"name": "N", "sensitive_content": "False"});
        assert_eq!(parse(&doc, false).unwrap().sensitive_content, Some(SensitiveContent::Flag(false)));
    }
}

#[cfg(test)]
mod strict_requirements {
    use super::*;

    fn assert_missing_or_invalid(doc: Value, tag: ErrorTag) {
        let err = parse(&doc, true).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::MissingOrInvalidField), "{}", err);
        assert_eq!(err.tag(), Some(tag), "{}", err);
    }

    #[test]
    fn test_missing_format() {
        let err = parse(&json!({"name": "N"}), true).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::MissingOrInvalidField));
        assert_eq!(err.tag(), Some(ErrorTag::InvalidFormat));
        assert_eq!(err.to_string(), "Missing or invalid format: undefined [parser0001]");
    }

    #[test]
    fn test_missing_name_and_description() {
        assert_missing_or_invalid(json!({"format": "CHIP-0007", "description": "D"}), ErrorTag::InvalidName);
        assert_missing_or_invalid(json!({"format": "CHIP-0007", "name": "N"}), ErrorTag::InvalidDescription);
    }

    #[test]
    fn test_empty_name_and_description() {
        assert_missing_or_invalid(json!({"format": "CHIP-0007", "name": "", "description": "D"}), ErrorTag::InvalidName);
        assert_missing_or_invalid(json!({"format": "CHIP-0007", "name": "N", "description": ""}), ErrorTag::InvalidDescription);
    }

    #[test]
    fn test_malformed_optional_fields() {
        let base = json!({"format": "CHIP-0007", "name": "N", "description": "D"});
        let cases = [
            ("minting_tool", json!(5), ErrorTag::InvalidMintingTool),
            ("sensitive_content", json!("true"), ErrorTag::InvalidSensitiveContent),
            ("series_number", json!("1"), ErrorTag::InvalidSeriesNumber),
            ("series_total", json!(null), ErrorTag::InvalidSeriesTotal),
            ("attributes", json!({}), ErrorTag::InvalidAttributes),
        ];
        for (key, value, tag) in cases {
            let mut doc = base.clone();
            doc[key] = value;
            assert_missing_or_invalid(doc, tag);
        }
    }

    #[test]
    fn test_unknown_top_level_key_rejected() {
        let doc = json!({"format": "CHIP-0007", "name": "N", "description": "D", "license": "CC0"});
        let err = parse(&doc, true).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidProperty));
        assert_eq!(err.as_validation().unwrap().name, "license");
    }
}

#[cfg(test)]
mod invalid_fields {
    use super::*;

    #[test]
    fn test_unknown_format_value() {
        let doc = json!({"format": "CHIP-9999", "name": "N", "description": "D"});
        let err = parse(&doc, false).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidField));
        assert_eq!(err.tag(), Some(ErrorTag::InvalidFormat));

        let err = parse(&doc, true).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::MissingOrInvalidField));
    }

    #[test]
    fn test_wrong_types_are_never_swallowed_in_lenient_mode() {
        let cases = [
            ("format", json!(7), ErrorTag::InvalidFormat),
            ("name", json!(["N"]), ErrorTag::InvalidName),
            ("description", json!(false), ErrorTag::InvalidDescription),
            ("minting_tool", json!({}), ErrorTag::InvalidMintingTool),
            ("sensitive_content", json!([true]), ErrorTag::InvalidSensitiveContent),
            ("series_number", json!("22"), ErrorTag::InvalidSeriesNumber),
            ("series_total", json!(true), ErrorTag::InvalidSeriesTotal),
            ("attributes", json!("[]"), ErrorTag::InvalidAttributes),
            ("collection", json!([]), ErrorTag::InvalidCollection),
        ];
        for (key, value, tag) in cases {
            let mut doc = json!({});
            doc[key] = value.clone();
            let err = parse(&doc, false).unwrap_err();
            assert_eq!(err.kind(), Some(ErrorKind::InvalidField), "{}", key);
            assert_eq!(err.tag(), Some(tag), "{}", key);
            assert_eq!(err.as_validation().unwrap().value, Some(value));
        }
    }

    #[test]
    fn test_fractional_series_number_invalid_in_both_modes() {
        for strict in [true, false] {
            let doc = json!({"format": "CHIP-0007", "name": "N", "description": "D", "series_number": 2.5});
            let err = parse(&doc, strict).unwrap_err();
            assert_eq!(err.kind(), Some(ErrorKind::InvalidField));
            assert_eq!(err.tag(), Some(ErrorTag::InvalidSeriesNumber));
        }
    }

    #[test]
    fn test_whole_float_series_number_accepted() {
        let doc = json!({"name": "N", "series_number": 3.0});
        assert_eq!(parse(&doc, false).unwrap().series_number, Some(3));
    }

    #[test]
    fn test_first_failure_wins() {
        let doc = json!({"format": "CHIP-0007", "name": 1, "description": 2});
        let err = parse(&doc, false).unwrap_err();
        assert_eq!(err.tag(), Some(ErrorTag::InvalidName));
    }

    #[test]
    fn test_non_object_document() {
        for doc in [json!([]), json!("metadata"), json!(42), Value::Null] {
            let err = parse(&doc, false).unwrap_err();
            assert_eq!(err.tag(), Some(ErrorTag::InvalidMetadata));
        }
    }
}

#[cfg(test)]
mod entry_point {
    use super::*;

    #[test]
    fn test_malformed_json_is_not_a_validation_error() {
        for strict in [true, false] {
            let err = parse_metadata("{\"name\": ", strict, Format::Chip0007).unwrap_err();
            assert!(matches!(err, Error::Json { .. }));
            assert!(!err.is_validation());
            assert_eq!(err.tag(), None);
        }
    }

    #[test]
    fn test_unsupported_requested_format() {
        let json = r#"{"format": "CHIP-0015", "name": "N", "description": "D"}"#;
        let err = parse_metadata(json, false, Format::Chip0015).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { format: Format::Chip0015 }));
        assert_eq!(err.to_string(), "Unsupported format: CHIP-0015");
    }
}
