use crate::error::SchemaError;
use crate::schema::{FieldDef, Schema};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// One field as written in a schema file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldConfig {
    Text {
        name: String,
        #[serde(default)]
        default: Option<String>,
    },
    Choice {
        name: String,
        options: Vec<String>,
        #[serde(default)]
        default: Option<String>,
    },
}

impl FieldConfig {
    pub fn name(&self) -> &str {
        match self {
            FieldConfig::Text { name, .. } | FieldConfig::Choice { name, .. } => name,
        }
    }

    fn to_field_def(&self) -> FieldDef {
        match self {
            FieldConfig::Text { name, default } => FieldDef {
                default: default.clone(),
                ..FieldDef::text(name.clone())
            },
            FieldConfig::Choice {
                name,
                options,
                default,
            } => FieldDef {
                default: default.clone(),
                ..FieldDef::choice(name.clone(), options.iter().cloned())
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SchemaConfig {
    #[serde(default)]
    pub description: Option<String>,
    /// Order matters: it fixes the field codes
    pub fields: Vec<FieldConfig>,
}

impl SchemaConfig {
    pub fn to_schema(&self) -> Result<Schema, SchemaError> {
        Schema::new(self.fields.iter().map(FieldConfig::to_field_def).collect())
    }
}

/// Named schemas loaded from TOML.
#[derive(Debug, Deserialize)]
pub struct SchemaRegistry {
    pub schemas: HashMap<String, SchemaConfig>,
}

impl SchemaRegistry {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Built-in schemas shipped with the crate
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../schemas.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Load configuration from custom file path
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Load schemas with user overrides from standard locations
    /// 1. Start with built-in schemas
    /// 2. Override with ~/.config/pairpack/schemas.toml if it exists
    /// 3. Override with ./schemas.toml if it exists in current directory
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut registry = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_path = config_dir.join("pairpack").join("schemas.toml");
            registry.merge_file_if_present(&user_path);
        }

        registry.merge_file_if_present(Path::new("schemas.toml"));

        Ok(registry)
    }

    fn merge_file_if_present(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }

        match Self::load_from_file(path) {
            Ok(other) => {
                debug!(path = %path.display(), count = other.schemas.len(), "loaded schema overrides");
                self.merge(other);
            }
            Err(e) => warn!(path = %path.display(), error = %e, "failed to load schema file"),
        }
    }

    /// Merge another registry into this one, replacing same-named schemas
    pub fn merge(&mut self, other: SchemaRegistry) {
        for (name, schema) in other.schemas {
            self.schemas.insert(name, schema);
        }
    }

    pub fn get_schema(&self, name: &str) -> Option<&SchemaConfig> {
        self.schemas.get(name)
    }

    /// Schema names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Look up and build a schema by name.
    pub fn build_schema(&self, name: &str) -> Result<Schema, Box<dyn std::error::Error>> {
        let config = self.get_schema(name).ok_or_else(|| {
            let suggestion = crate::error::find_closest_name(name, self.names());
            match suggestion {
                Some(s) => format!("schema '{}' not found (did you mean '{}'?)", name, s),
                None => format!("schema '{}' not found", name),
            }
        })?;
        Ok(config.to_schema()?)
    }
}
