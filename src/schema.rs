use crate::error::SchemaError;
use crate::table::IdentifierTable;
use std::collections::{HashMap, HashSet};

/// Kind of value a field holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSpec {
    /// Any string, including the empty string
    Text,
    /// One of a fixed, ordered set of option names
    Choice { options: Vec<String> },
}

impl FieldSpec {
    pub fn kind(&self) -> &'static str {
        match self {
            FieldSpec::Text => "text",
            FieldSpec::Choice { .. } => "choice",
        }
    }
}

/// Field declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub spec: FieldSpec,
    /// Initial value used by [`Record::with_defaults`](crate::Record::with_defaults)
    pub default: Option<String>,
}

impl FieldDef {
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spec: FieldSpec::Text,
            default: None,
        }
    }

    pub fn choice<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            spec: FieldSpec::Choice {
                options: options.into_iter().map(Into::into).collect(),
            },
            default: None,
        }
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// Ordered, immutable set of field declarations plus their identifier table.
///
/// Field order fixes the field codes; option order fixes the option codes.
/// Reordering a schema therefore changes the wire format.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldDef>,
    index: HashMap<String, usize>,
    table: IdentifierTable,
}

impl Schema {
    /// Build a schema from field declarations.
    ///
    /// # Errors
    ///
    /// * `SchemaError::DuplicateField` - two fields share a name
    /// * `SchemaError::DuplicateOption` - a Choice field repeats an option
    /// * `SchemaError::InvalidDefault` - a Choice default is not a declared option
    pub fn new(fields: Vec<FieldDef>) -> Result<Self, SchemaError> {
        let mut index = HashMap::with_capacity(fields.len());

        for (position, field) in fields.iter().enumerate() {
            if index.insert(field.name.clone(), position).is_some() {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }

            if let FieldSpec::Choice { options } = &field.spec {
                let mut seen = HashSet::with_capacity(options.len());
                for option in options {
                    if !seen.insert(option.as_str()) {
                        return Err(SchemaError::DuplicateOption {
                            field: field.name.clone(),
                            option: option.clone(),
                        });
                    }
                }

                if let Some(default) = &field.default
                    && !seen.contains(default.as_str())
                {
                    return Err(SchemaError::InvalidDefault {
                        field: field.name.clone(),
                        value: default.clone(),
                    });
                }
            }
        }

        let table = IdentifierTable::build(&fields);

        Ok(Self {
            fields,
            index,
            table,
        })
    }

    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.index_of(name).map(|i| &self.fields[i])
    }

    /// Declaration position of a field
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn table(&self) -> &IdentifierTable {
        &self.table
    }
}

/// Declarative construction of a [`Schema`].
///
/// ```
/// use pairpack::Schema;
///
/// let schema = Schema::builder()
///     .text("name")
///     .choice_with_default("status", ["draft", "active", "done"], "draft")
///     .build()
///     .unwrap();
///
/// assert_eq!(schema.len(), 2);
/// assert_eq!(schema.table().field_code("status"), Some("1"));
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldDef>,
}

impl SchemaBuilder {
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    pub fn text(self, name: impl Into<String>) -> Self {
        self.field(FieldDef::text(name))
    }

    pub fn text_with_default(self, name: impl Into<String>, default: impl Into<String>) -> Self {
        self.field(FieldDef::text(name).with_default(default))
    }

    pub fn choice<I, S>(self, name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field(FieldDef::choice(name, options))
    }

    pub fn choice_with_default<I, S>(
        self,
        name: impl Into<String>,
        options: I,
        default: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field(FieldDef::choice(name, options).with_default(default))
    }

    pub fn build(self) -> Result<Schema, SchemaError> {
        Schema::new(self.fields)
    }
}
