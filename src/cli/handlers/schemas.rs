use crate::cli::args::SchemasArgs;
use pairpack::{FieldSpec, SchemaRegistry};

pub fn handle(
    args: SchemasArgs,
    registry: &SchemaRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(name) = args.show else {
        println!("Available schemas:\n");
        for name in registry.names() {
            let config = &registry.schemas[name];
            println!(
                "  {:<12} {:>2} fields  {}",
                name,
                config.fields.len(),
                config.description.as_deref().unwrap_or("")
            );
        }
        return Ok(());
    };

    let schema = registry.build_schema(&name)?;
    let table = schema.table();

    println!("Schema '{}':\n", name);
    for (field, (_, code)) in schema.fields().iter().zip(table.iter()) {
        let default = field
            .default
            .as_deref()
            .map(|d| format!(" (default: {})", d))
            .unwrap_or_default();
        println!("  {:<4} {:<16} {}{}", code, field.name, field.spec.kind(), default);

        if let FieldSpec::Choice { options } = &field.spec {
            for option in options {
                let option_code = table.option_code(&field.name, option).unwrap_or("?");
                println!("         {:<4} {}", option_code, option);
            }
        }
    }

    Ok(())
}
