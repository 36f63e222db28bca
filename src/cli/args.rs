use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pairpack")]
#[command(version)]
#[command(about = "Pack small typed records into compact, delimiter-safe text", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Extra schema file merged over the built-in and user schemas
    #[arg(long, global = true, value_name = "PATH")]
    pub schemas: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode field values into a packed string
    Encode(EncodeArgs),
    /// Decode a packed string into JSON field values
    Decode(DecodeArgs),
    /// List schemas or show one schema's identifier table
    Schemas(SchemasArgs),
}

/// Arguments for encoding a record
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Schema to encode with
    pub schema: String,

    /// JSON object of field values (reads from stdin if neither FILE nor --set is given)
    pub file: Option<PathBuf>,

    /// Set a field, may be repeated
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Start from the schema's declared defaults
    #[arg(short, long)]
    pub defaults: bool,
}

/// Arguments for decoding a packed string
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Schema to decode with
    pub schema: String,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

/// Arguments for listing schemas
#[derive(Args, Debug)]
pub struct SchemasArgs {
    /// Show field and option codes for this schema
    #[arg(long, value_name = "NAME")]
    pub show: Option<String>,
}
