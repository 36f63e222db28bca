//! Tests for the public codec API
//!
//! Exercises the crate the way a host application would: build a schema,
//! fill a record, ship the string, read it back.

use pairpack::prelude::*;
use pairpack::escape::{ESCAPE_CHAR, FIELD_SEP, PAIR_SEP, escape};
use pairpack::table::to_base36;

fn editor() -> Schema {
    Schema::builder()
        .text("name")
        .choice("status", ["draft", "active", "done"])
        .build()
        .unwrap()
}

#[test]
fn test_documented_example() {
    let schema = editor();
    let mut record = Record::new(&schema);
    record.set("name", "ab").unwrap();
    record.set("status", "active").unwrap();

    let expected = format!(
        "0{}{}{}1{}{}{}",
        FIELD_SEP,
        escape("ab"),
        PAIR_SEP,
        FIELD_SEP,
        escape("1"),
        PAIR_SEP
    );
    assert_eq!(encode(&record), expected);
    assert_eq!(decode(&expected, &schema).unwrap(), record);
}

#[test]
fn test_encoding_is_url_safe_for_ascii_values() {
    let schema = editor();
    let mut record = Record::new(&schema);
    record.set("name", "quiz-jazz_42").unwrap();
    record.set("status", "done").unwrap();

    let encoded = encode(&record);
    assert!(
        encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
}

#[test]
fn test_every_reserved_combination_roundtrips() {
    let schema = editor();
    let reserved = [ESCAPE_CHAR, FIELD_SEP, PAIR_SEP];

    for a in reserved {
        for b in reserved {
            for c in reserved {
                let value: String = [a, b, c].iter().collect();
                let mut record = Record::new(&schema);
                record.set("name", value.clone()).unwrap();

                let decoded = decode(&encode(&record), &schema).unwrap();
                assert_eq!(decoded.get("name").unwrap(), Some(value.as_str()));
            }
        }
    }
}

#[test]
fn test_codes_follow_declaration_order() {
    let names: Vec<String> = (0..50).map(|i| format!("field_{}", i)).collect();
    let mut builder = Schema::builder();
    for name in &names {
        builder = builder.text(name.clone());
    }
    let schema = builder.build().unwrap();

    for (i, name) in names.iter().enumerate() {
        assert_eq!(schema.table().field_code(name), Some(to_base36(i).as_str()));
    }
}

#[test]
fn test_decode_with_incompatible_schema() {
    let wide = Schema::builder()
        .text("a")
        .text("b")
        .text("c")
        .build()
        .unwrap();
    let mut record = Record::new(&wide);
    record.set("c", "x").unwrap();
    let encoded = encode(&record);

    let narrow = Schema::builder().text("a").build().unwrap();
    assert_eq!(
        decode(&encoded, &narrow).unwrap_err(),
        CodecError::UnknownFieldCode("2".to_string())
    );
}

#[test]
fn test_registry_schema_roundtrip() {
    let registry = SchemaRegistry::load_default().unwrap();
    let schema = registry.build_schema("search").unwrap();

    let mut record = Record::with_defaults(&schema);
    record.set("query", "jq zsh tricks").unwrap();
    record.set("scope", "title").unwrap();

    let encoded = record.encode();
    let decoded = decode(&encoded, &schema).unwrap();
    assert_eq!(decoded, record);
    assert_eq!(decoded.get("sort").unwrap(), Some("relevance"));
}

#[test]
fn test_schema_shared_across_threads() {
    let schema = std::sync::Arc::new(editor());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let schema = std::sync::Arc::clone(&schema);
            std::thread::spawn(move || {
                let mut record = Record::new(&schema);
                record.set("name", format!("worker z{}", i)).unwrap();
                let encoded = encode(&record);
                decode(&encoded, &schema).unwrap().get("name").unwrap().map(String::from)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Some(format!("worker z{}", i)));
    }
}
