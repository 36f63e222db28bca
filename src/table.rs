use crate::schema::{FieldDef, FieldSpec};
use std::collections::HashMap;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Render `n` in lowercase base-36.
///
/// ```
/// use pairpack::table::to_base36;
///
/// assert_eq!(to_base36(0), "0");
/// assert_eq!(to_base36(35), "z");
/// assert_eq!(to_base36(36), "10");
/// ```
pub fn to_base36(mut n: usize) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36_DIGITS[n % 36] as char);
        n /= 36;
    }

    digits.iter().rev().collect()
}

/// Option codes for one Choice field.
#[derive(Debug, Clone, Default)]
struct OptionCodes {
    name_to_code: HashMap<String, String>,
    code_to_name: HashMap<String, String>,
}

/// Positional short codes for field names and Choice option names.
///
/// Field codes are dense over the schema's declaration order. Option codes
/// restart at `0` for every Choice field and are only meaningful next to
/// their field code.
#[derive(Debug, Clone, Default)]
pub struct IdentifierTable {
    field_names: Vec<String>,
    field_codes: Vec<String>,
    code_to_index: HashMap<String, usize>,
    name_to_index: HashMap<String, usize>,
    options: Vec<Option<OptionCodes>>,
}

impl IdentifierTable {
    /// Assign codes to the fields in declaration order.
    pub fn build(fields: &[FieldDef]) -> Self {
        let mut table = IdentifierTable::default();

        for (index, field) in fields.iter().enumerate() {
            let code = to_base36(index);
            table.code_to_index.insert(code.clone(), index);
            table.name_to_index.insert(field.name.clone(), index);
            table.field_names.push(field.name.clone());
            table.field_codes.push(code);

            let options = match &field.spec {
                FieldSpec::Text => None,
                FieldSpec::Choice { options } => {
                    let mut codes = OptionCodes::default();
                    for (position, option) in options.iter().enumerate() {
                        let option_code = to_base36(position);
                        codes
                            .name_to_code
                            .insert(option.clone(), option_code.clone());
                        codes.code_to_name.insert(option_code, option.clone());
                    }
                    Some(codes)
                }
            };
            table.options.push(options);
        }

        table
    }

    pub fn len(&self) -> usize {
        self.field_codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.field_codes.is_empty()
    }

    /// Field code for a declared field name.
    pub fn field_code(&self, name: &str) -> Option<&str> {
        self.name_to_index
            .get(name)
            .map(|&index| self.field_codes[index].as_str())
    }

    /// Field name for a field code.
    pub fn field_name(&self, code: &str) -> Option<&str> {
        self.field_index(code).map(|index| self.field_names[index].as_str())
    }

    /// `(name, code)` for every field, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.field_names
            .iter()
            .zip(&self.field_codes)
            .map(|(name, code)| (name.as_str(), code.as_str()))
    }

    /// Declaration index for a field code.
    pub fn field_index(&self, code: &str) -> Option<usize> {
        self.code_to_index.get(code).copied()
    }

    pub(crate) fn field_code_at(&self, index: usize) -> &str {
        &self.field_codes[index]
    }

    /// Option code for `option` within the Choice field `field`.
    pub fn option_code(&self, field: &str, option: &str) -> Option<&str> {
        let index = *self.name_to_index.get(field)?;
        self.option_code_at(index, option)
    }

    pub(crate) fn option_code_at(&self, index: usize, option: &str) -> Option<&str> {
        self.options
            .get(index)?
            .as_ref()?
            .name_to_code
            .get(option)
            .map(String::as_str)
    }

    /// Option name for `option_code` within the Choice field coded `field_code`.
    pub fn option_name(&self, field_code: &str, option_code: &str) -> Option<&str> {
        let index = self.field_index(field_code)?;
        self.option_name_at(index, option_code)
    }

    pub(crate) fn option_name_at(&self, index: usize, option_code: &str) -> Option<&str> {
        self.options
            .get(index)?
            .as_ref()?
            .code_to_name
            .get(option_code)
            .map(String::as_str)
    }
}
