use crate::cli::args::DecodeArgs;
use crate::cli::read_input;
use pairpack::{SchemaRegistry, decode};

pub fn handle(
    args: DecodeArgs,
    registry: &SchemaRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let schema = registry.build_schema(&args.schema)?;
    let input = read_input(args.file.as_deref())?;

    // Only trailing newlines are stripped; spaces may be part of a value
    let record = decode(input.trim_end_matches(['\n', '\r']), &schema)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    println!("{}", json);

    Ok(())
}
