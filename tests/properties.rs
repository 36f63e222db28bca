//! Property tests for escaping and the record round trip.

use pairpack::escape::{PAIR_SEP, escape, split_unescaped, unescape};
use pairpack::{Record, Schema, decode, encode};
use proptest::prelude::*;

/// Strings biased towards the reserved characters
fn wire_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => prop::sample::select(vec!['z', 'q', 'j']),
            2 => prop::sample::select(vec!['a', '0', ' ', '%', '&', '=']),
            1 => any::<char>(),
        ],
        0..32,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn schema() -> Schema {
    let options: Vec<String> = (0..40).map(|i| format!("opt{}", i)).collect();
    Schema::builder()
        .text("title")
        .choice("pick", options)
        .text("body")
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn escape_then_unescape_is_identity(s in wire_string()) {
        prop_assert_eq!(unescape(&escape(&s)), s);
    }

    #[test]
    fn escaped_text_has_no_bare_pair_separator(s in wire_string()) {
        let escaped = escape(&s);
        prop_assert_eq!(split_unescaped(&escaped, PAIR_SEP), vec![escaped.as_str()]);
    }

    #[test]
    fn record_roundtrip(
        title in prop::option::of(wire_string()),
        pick in prop::option::of(0usize..40),
        body in prop::option::of(wire_string()),
    ) {
        let schema = schema();
        let mut record = Record::new(&schema);
        if let Some(title) = &title {
            record.set("title", title.clone()).unwrap();
        }
        if let Some(pick) = pick {
            record.set("pick", format!("opt{}", pick)).unwrap();
        }
        if let Some(body) = &body {
            record.set("body", body.clone()).unwrap();
        }

        let encoded = encode(&record);
        let decoded = decode(&encoded, &schema).unwrap();
        prop_assert_eq!(decoded, record);
    }

    #[test]
    fn decode_never_panics(input in wire_string()) {
        let schema = schema();
        let _ = decode(&input, &schema);
    }
}
