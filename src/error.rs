use std::fmt;

/// Errors raised while reading, writing, encoding or decoding a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The field name is not declared in the schema
    UnknownField {
        name: String,
        suggestion: Option<String>,
    },
    /// The value is not one of the Choice field's declared options
    InvalidOption {
        field: String,
        value: String,
        options: Vec<String>,
    },
    /// The encoded string is not a well-formed sequence of pairs.
    ///
    /// Besides a missing trailing pair separator or a pair without a field
    /// separator, this covers a repeated field code and an escape character
    /// that does not precede a reserved character. Neither can come out of
    /// [`encode`](crate::encode).
    MalformedEncoding(String),
    /// A decoded field code has no field in the schema
    UnknownFieldCode(String),
    /// A decoded option code has no option in its Choice field
    UnknownOptionCode { field: String, code: String },
    /// Host-supplied input could not be turned into field values
    InvalidInput(String),
}

impl CodecError {
    /// Create an UnknownField error, suggesting the closest declared name
    pub fn unknown_field<'a>(name: &str, known: impl IntoIterator<Item = &'a str>) -> Self {
        CodecError::UnknownField {
            name: name.to_string(),
            suggestion: find_closest_name(name, known),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        CodecError::MalformedEncoding(reason.into())
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::UnknownField { name, suggestion } => {
                write!(f, "unknown field '{}'", name)?;
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            CodecError::InvalidOption {
                field,
                value,
                options,
            } => write!(
                f,
                "invalid option '{}' for field '{}': expected one of [{}]",
                value,
                field,
                options.join(", ")
            ),
            CodecError::MalformedEncoding(reason) => write!(f, "malformed encoding: {}", reason),
            CodecError::UnknownFieldCode(code) => write!(f, "unknown field code '{}'", code),
            CodecError::UnknownOptionCode { field, code } => {
                write!(f, "unknown option code '{}' for field '{}'", code, field)
            }
            CodecError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
        }
    }
}

impl std::error::Error for CodecError {}

/// Errors raised while building a schema from field declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Two fields share a name
    DuplicateField(String),
    /// A Choice field declares the same option twice
    DuplicateOption { field: String, option: String },
    /// A Choice field's default is not one of its options
    InvalidDefault { field: String, value: String },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::DuplicateField(name) => write!(f, "duplicate field '{}'", name),
            SchemaError::DuplicateOption { field, option } => {
                write!(f, "duplicate option '{}' in field '{}'", option, field)
            }
            SchemaError::InvalidDefault { field, value } => write!(
                f,
                "default '{}' for field '{}' is not a declared option",
                value, field
            ),
        }
    }
}

impl std::error::Error for SchemaError {}

/// Edit distance between `a` and `b`, or `None` once it must exceed `limit`.
///
/// Single-row Levenshtein over chars. Field names are short, so the early
/// exit matters more than the allocation.
fn bounded_edit_distance(a: &str, b: &str, limit: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > limit {
        return None;
    }

    // row[j] = distance between the processed prefix of `a` and b[..j]
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, &ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for (j, &cb) in b.iter().enumerate() {
            let substitute = diagonal + usize::from(ca != cb);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(diagonal + 1);
            row_min = row_min.min(row[j + 1]);
        }

        if row_min > limit {
            return None;
        }
    }

    let distance = row[b.len()];
    (distance <= limit).then_some(distance)
}

/// Closest known name within a small edit distance, for "did you mean" hints.
///
/// Ties keep the earliest candidate, so field suggestions follow
/// declaration order.
pub fn find_closest_name<'a>(
    name: &str,
    known: impl IntoIterator<Item = &'a str>,
) -> Option<String> {
    // 1-2 edits for short names, up to 3 for longer ones
    let limit = if name.chars().count() < 5 { 2 } else { 3 };

    known
        .into_iter()
        .filter_map(|candidate| {
            bounded_edit_distance(name, candidate, limit).map(|d| (d, candidate))
        })
        .min_by_key(|&(distance, _)| distance)
        .map(|(_, candidate)| candidate.to_string())
}
