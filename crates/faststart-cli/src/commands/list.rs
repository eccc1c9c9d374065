//! Implementation of the `faststart list` command.

use faststart_adapters::BuiltinRegistry;
use faststart_core::application::{StackInfo, StackService};

use crate::{
    cli::{ListArgs, ListFormat, OutputFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let service = StackService::new(Box::new(BuiltinRegistry::new()?));
    let stacks = service.list();

    // `--output-format json` implies JSON here too.
    let format = if output.format() == OutputFormat::Json {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Supported stacks:")?;
            for line in table_rows(&stacks) {
                output.print(&line)?;
            }
            output.print("")?;
            output.print("Create one with: faststart new <name> --stack <id>")?;
        }
        ListFormat::Json => output.json(&stacks)?,
        ListFormat::List => {
            for stack in &stacks {
                println!("{}", stack.id);
            }
        }
        ListFormat::Csv => {
            for line in csv_rows(&stacks) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn table_rows(stacks: &[StackInfo]) -> Vec<String> {
    stacks
        .iter()
        .map(|s| {
            format!(
                "  {} {:<12} {:<8} {}",
                s.emoji,
                s.id.as_str(),
                s.family.as_str(),
                s.description
            )
        })
        .collect()
}

fn csv_rows(stacks: &[StackInfo]) -> Vec<String> {
    let mut rows = vec!["id,name,family,files,docs".to_string()];
    rows.extend(stacks.iter().map(|s| {
        format!(
            "{},{},{},{},{}",
            s.id,
            csv_field(s.name),
            s.family,
            s.file_count,
            s.docs_url
        )
    }));
    rows
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
