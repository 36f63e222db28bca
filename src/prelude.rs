//! Convenient re-exports for common usage.
//!
//! ```
//! use pairpack::prelude::*;
//!
//! let registry = SchemaRegistry::load_default().unwrap();
//! let schema = registry.build_schema("prefs").unwrap();
//! let record = Record::with_defaults(&schema);
//! assert_eq!(decode(&encode(&record), &schema).unwrap(), record);
//! ```

pub use crate::{
    CodecError, FieldDef, FieldSpec, Record, Schema, SchemaError, SchemaRegistry, decode, encode,
};
