//! Record ⇄ string translation.
//!
//! # Format
//!
//! ```text
//! encoded := pair*
//! pair    := escape(field_code) 'q' escape(value_token) 'j'
//! ```
//!
//! The value token is the raw string for Text fields and the option code
//! for Choice fields. Field codes, option codes and text values all pass
//! through [`escape`](crate::escape::escape), since base-36 codes can be
//! reserved letters themselves (`j` = 19, `q` = 26, `z` = 35).

use crate::error::CodecError;
use crate::escape::{self, FIELD_SEP, PAIR_SEP};
use crate::record::Record;
use crate::schema::{FieldSpec, Schema};
use tracing::{debug, trace};

/// Encode a record into its compact string form.
///
/// Pairs are emitted in schema declaration order and unset fields are
/// skipped. The output always ends with an unescaped pair separator unless
/// the record is empty, in which case it is the empty string.
///
/// # Example
///
/// ```
/// use pairpack::{Record, Schema, encode};
///
/// let schema = Schema::builder()
///     .text("name")
///     .choice("status", ["draft", "active", "done"])
///     .build()
///     .unwrap();
///
/// let mut record = Record::new(&schema);
/// record.set("name", "ab").unwrap();
/// record.set("status", "active").unwrap();
///
/// assert_eq!(encode(&record), "0qabj1q1j");
/// ```
pub fn encode(record: &Record<'_>) -> String {
    let schema = record.schema();
    let table = schema.table();
    let mut encoded = String::new();

    for (index, (field, value)) in schema.fields().iter().zip(record.values()).enumerate() {
        let Some(value) = value else {
            continue;
        };

        let token = match &field.spec {
            FieldSpec::Text => value.as_str(),
            // Record::set only stores declared options
            FieldSpec::Choice { .. } => table.option_code_at(index, value).unwrap_or_default(),
        };

        encoded.push_str(&escape::escape(table.field_code_at(index)));
        encoded.push(FIELD_SEP);
        encoded.push_str(&escape::escape(token));
        encoded.push(PAIR_SEP);
    }

    debug!(fields = record.len(), bytes = encoded.len(), "encoded record");
    encoded
}

/// Decode a string produced by [`encode`] back into a record.
///
/// Fields missing from the string stay unset. Decoding either succeeds
/// completely or returns the first error found.
///
/// A pair is split at its first unescaped field separator; any later bare
/// separator stays in the value, as in `0qaqbj` decoding `name` to `aqb`.
///
/// # Errors
///
/// * `CodecError::MalformedEncoding` - missing trailing pair separator, a
///   dangling escape, a pair without a field separator, or the same field
///   code appearing twice
/// * `CodecError::UnknownFieldCode` - the field code is not in the schema
/// * `CodecError::UnknownOptionCode` - the option code is not declared for
///   its Choice field
pub fn decode<'s>(encoded: &str, schema: &'s Schema) -> Result<Record<'s>, CodecError> {
    if let Some(position) = escape::find_dangling_escape(encoded) {
        return Err(CodecError::malformed(format!(
            "escape character at byte {} does not precede a reserved character",
            position
        )));
    }

    let mut pairs = escape::split_unescaped(encoded, PAIR_SEP);
    if pairs.pop() != Some("") {
        return Err(CodecError::malformed(format!(
            "input does not end with pair separator '{}'",
            PAIR_SEP
        )));
    }

    let table = schema.table();
    let mut record = Record::new(schema);

    for pair in &pairs {
        let (key_part, value_part) = split_pair(pair)?;

        let code = escape::unescape(key_part);
        let index = table
            .field_index(&code)
            .ok_or_else(|| CodecError::UnknownFieldCode(code.clone()))?;
        let field = &schema.fields()[index];

        let token = escape::unescape(value_part);
        let value = match &field.spec {
            FieldSpec::Text => token,
            FieldSpec::Choice { .. } => table
                .option_name_at(index, &token)
                .ok_or_else(|| CodecError::UnknownOptionCode {
                    field: field.name.clone(),
                    code: token.clone(),
                })?
                .to_string(),
        };

        trace!(field = %field.name, code = %code, "decoded pair");
        if record.put(index, value).is_some() {
            return Err(CodecError::malformed(format!(
                "field code '{}' appears more than once",
                code
            )));
        }
    }

    debug!(pairs = pairs.len(), "decoded record");
    Ok(record)
}

/// Split one pair at its first unescaped field separator.
fn split_pair(pair: &str) -> Result<(&str, &str), CodecError> {
    escape::split_once_unescaped(pair, FIELD_SEP).ok_or_else(|| {
        CodecError::malformed(format!("pair '{}' has no field separator", pair))
    })
}
