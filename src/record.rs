use crate::codec;
use crate::error::CodecError;
use crate::schema::{FieldSpec, Schema};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Field values conforming to a [`Schema`].
///
/// Text fields hold any string. Choice fields hold one of their declared
/// option names; every write is validated before the record changes.
#[derive(Debug, Clone)]
pub struct Record<'s> {
    schema: &'s Schema,
    values: Vec<Option<String>>,
}

impl<'s> Record<'s> {
    /// Empty record: no field is set.
    pub fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            values: vec![None; schema.len()],
        }
    }

    /// Record populated with every declared default.
    pub fn with_defaults(schema: &'s Schema) -> Self {
        Self {
            schema,
            values: schema.fields().iter().map(|f| f.default.clone()).collect(),
        }
    }

    /// Populate a record from a JSON object whose values are strings.
    ///
    /// # Errors
    ///
    /// * `CodecError::InvalidInput` - not a JSON object, or a non-string value
    /// * `CodecError::UnknownField` / `CodecError::InvalidOption` - as for [`Record::set`]
    pub fn from_json(schema: &'s Schema, json: &str) -> Result<Self, CodecError> {
        let parsed: Value = serde_json::from_str(json)
            .map_err(|e| CodecError::InvalidInput(format!("invalid JSON: {}", e)))?;

        let Value::Object(map) = parsed else {
            return Err(CodecError::InvalidInput(
                "expected a JSON object of field values".to_string(),
            ));
        };

        let mut record = Self::new(schema);
        for (field, value) in map {
            match value {
                Value::String(s) => record.set(&field, s)?,
                other => {
                    return Err(CodecError::InvalidInput(format!(
                        "field '{}' must be a string, got {}",
                        field, other
                    )));
                }
            }
        }

        Ok(record)
    }

    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    /// Set a field's value.
    ///
    /// A failed validation leaves the record unchanged.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), CodecError> {
        let index = self.resolve(field)?;
        let value = value.into();
        self.validate(index, &value)?;
        self.values[index] = Some(value);
        Ok(())
    }

    /// Current value of a field, `None` when unset.
    pub fn get(&self, field: &str) -> Result<Option<&str>, CodecError> {
        let index = self.resolve(field)?;
        Ok(self.values[index].as_deref())
    }

    /// Clear a field, returning its previous value.
    pub fn unset(&mut self, field: &str) -> Result<Option<String>, CodecError> {
        let index = self.resolve(field)?;
        Ok(self.values[index].take())
    }

    /// Whether the field currently holds `value`.
    ///
    /// `value` is validated like [`Record::set`], so asking about an
    /// undeclared option of a Choice field is an error rather than `false`.
    pub fn is(&self, field: &str, value: &str) -> Result<bool, CodecError> {
        let index = self.resolve(field)?;
        self.validate(index, value)?;
        Ok(self.values[index].as_deref() == Some(value))
    }

    /// Set fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.schema
            .fields()
            .iter()
            .zip(&self.values)
            .filter_map(|(field, value)| Some((field.name.as_str(), value.as_deref()?)))
    }

    /// Number of set fields
    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Encode this record; see [`codec::encode`].
    pub fn encode(&self) -> String {
        codec::encode(self)
    }

    pub(crate) fn values(&self) -> &[Option<String>] {
        &self.values
    }

    /// Store an already-validated value by declaration index.
    pub(crate) fn put(&mut self, index: usize, value: String) -> Option<String> {
        self.values[index].replace(value)
    }

    fn resolve(&self, field: &str) -> Result<usize, CodecError> {
        self.schema
            .index_of(field)
            .ok_or_else(|| CodecError::unknown_field(field, self.schema.field_names()))
    }

    fn validate(&self, index: usize, value: &str) -> Result<(), CodecError> {
        let field = &self.schema.fields()[index];
        match &field.spec {
            FieldSpec::Text => Ok(()),
            FieldSpec::Choice { options } => {
                if options.iter().any(|o| o == value) {
                    Ok(())
                } else {
                    Err(CodecError::InvalidOption {
                        field: field.name.clone(),
                        value: value.to_string(),
                        options: options.clone(),
                    })
                }
            }
        }
    }
}

/// Records are equal when the same fields are set to the same values.
impl PartialEq for Record<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for Record<'_> {}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::builder()
            .text_with_default("name", "untitled")
            .choice_with_default("status", ["draft", "active", "done"], "draft")
            .text("note")
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_record_is_empty() {
        let schema = schema();
        let record = Record::new(&schema);

        assert!(record.is_empty());
        assert_eq!(record.get("name").unwrap(), None);
        assert_eq!(record.iter().count(), 0);
    }

    #[test]
    fn test_with_defaults() {
        let schema = schema();
        let record = Record::with_defaults(&schema);

        assert_eq!(record.get("name").unwrap(), Some("untitled"));
        assert_eq!(record.get("status").unwrap(), Some("draft"));
        assert_eq!(record.get("note").unwrap(), None);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_set_and_get() {
        let schema = schema();
        let mut record = Record::new(&schema);

        record.set("name", "zqj").unwrap();
        record.set("status", "done").unwrap();
        record.set("note", "").unwrap();

        assert_eq!(record.get("name").unwrap(), Some("zqj"));
        assert_eq!(record.get("status").unwrap(), Some("done"));
        assert_eq!(record.get("note").unwrap(), Some(""));
    }

    #[test]
    fn test_unknown_field_suggests() {
        let schema = schema();
        let mut record = Record::new(&schema);

        let err = record.set("stauts", "done").unwrap_err();
        assert_eq!(
            err,
            CodecError::UnknownField {
                name: "stauts".to_string(),
                suggestion: Some("status".to_string()),
            }
        );
        assert!(record.get("color").is_err());
    }

    #[test]
    fn test_invalid_option_keeps_prior_value() {
        let schema = schema();
        let mut record = Record::new(&schema);
        record.set("status", "active").unwrap();

        let err = record.set("status", "archived").unwrap_err();
        assert!(matches!(err, CodecError::InvalidOption { .. }));
        assert_eq!(record.get("status").unwrap(), Some("active"));
    }

    #[test]
    fn test_is_validates_candidate() {
        let schema = schema();
        let mut record = Record::new(&schema);
        record.set("status", "active").unwrap();

        assert!(record.is("status", "active").unwrap());
        assert!(!record.is("status", "done").unwrap());
        assert!(record.is("status", "archived").is_err());
        assert!(!record.is("name", "anything").unwrap());
    }

    #[test]
    fn test_unset() {
        let schema = schema();
        let mut record = Record::with_defaults(&schema);

        assert_eq!(record.unset("name").unwrap(), Some("untitled".to_string()));
        assert_eq!(record.get("name").unwrap(), None);
        assert_eq!(record.unset("name").unwrap(), None);
    }

    #[test]
    fn test_equality_ignores_set_order() {
        let schema = schema();
        let mut a = Record::new(&schema);
        a.set("note", "x").unwrap();
        a.set("name", "y").unwrap();

        let mut b = Record::new(&schema);
        b.set("name", "y").unwrap();
        b.set("note", "x").unwrap();

        assert_eq!(a, b);

        b.set("note", "").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_serialize_json_in_declaration_order() {
        let schema = schema();
        let mut record = Record::new(&schema);
        record.set("note", "n").unwrap();
        record.set("name", "ab").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"ab","note":"n"}"#);
    }

    #[test]
    fn test_from_json() {
        let schema = schema();
        let record = Record::from_json(&schema, r#"{"name":"ab","status":"active"}"#).unwrap();

        assert_eq!(record.get("name").unwrap(), Some("ab"));
        assert_eq!(record.get("status").unwrap(), Some("active"));
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        let schema = schema();

        assert!(matches!(
            Record::from_json(&schema, "[1,2]"),
            Err(CodecError::InvalidInput(_))
        ));
        assert!(matches!(
            Record::from_json(&schema, r#"{"name":42}"#),
            Err(CodecError::InvalidInput(_))
        ));
        assert!(matches!(
            Record::from_json(&schema, r#"{"status":"archived"}"#),
            Err(CodecError::InvalidOption { .. })
        ));
        assert!(matches!(
            Record::from_json(&schema, "{not json"),
            Err(CodecError::InvalidInput(_))
        ));
    }
}
