use crate::cli::args::EncodeArgs;
use crate::cli::read_input;
use pairpack::{Record, SchemaRegistry};

pub fn handle(
    args: EncodeArgs,
    registry: &SchemaRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let schema = registry.build_schema(&args.schema)?;

    let mut record = if args.file.is_some() || (args.set.is_empty() && !args.defaults) {
        let input = read_input(args.file.as_deref())?;
        let mut from_input = Record::from_json(&schema, input.trim())?;
        if args.defaults {
            apply_defaults(&mut from_input)?;
        }
        from_input
    } else if args.defaults {
        Record::with_defaults(&schema)
    } else {
        Record::new(&schema)
    };

    for assignment in &args.set {
        let (field, value) = assignment
            .split_once('=')
            .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", assignment))?;
        record.set(field, value)?;
    }

    println!("{}", record.encode());
    Ok(())
}

/// Fill fields the input left unset with their declared defaults
fn apply_defaults(record: &mut Record<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let schema = record.schema();
    for field in schema.fields() {
        if let Some(default) = &field.default
            && record.get(&field.name)?.is_none()
        {
            record.set(&field.name, default.clone())?;
        }
    }
    Ok(())
}
