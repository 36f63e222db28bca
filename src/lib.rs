//! Pack small typed records into compact, delimiter-safe text.
//!
//! A [`Schema`] declares an ordered set of Text and Choice fields. Field
//! names and option names are replaced by short base-36 positional codes,
//! and every code and value is escaped so the result can ride inside URL
//! fragments, cookies or query parameters.
//!
//! # Example
//!
//! ```
//! use pairpack::{Record, Schema, decode, encode};
//!
//! let schema = Schema::builder()
//!     .text("name")
//!     .choice("status", ["draft", "active", "done"])
//!     .build()
//!     .unwrap();
//!
//! let mut record = Record::new(&schema);
//! record.set("name", "jazz quiz").unwrap();
//! record.set("status", "done").unwrap();
//!
//! let encoded = encode(&record);
//! let decoded = decode(&encoded, &schema).unwrap();
//! assert_eq!(decoded, record);
//! ```

mod codec;
mod config;
mod error;
pub mod escape;
mod record;
mod schema;
pub mod table;

pub mod prelude;

pub use codec::{decode, encode};
pub use config::{FieldConfig, SchemaConfig, SchemaRegistry};
pub use error::{CodecError, SchemaError};
pub use record::Record;
pub use schema::{FieldDef, FieldSpec, Schema, SchemaBuilder};
pub use table::IdentifierTable;
