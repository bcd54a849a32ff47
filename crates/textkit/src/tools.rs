use crate::prelude::*;
use crate::prelude::{println, eprintln};
use colored::Colorize;
use textkit_core::registry::{self, FieldKind, FieldSpec, InputMode, ToolDescriptor};

#[derive(Debug, clap::Parser)]
#[command(name = "tools")]
#[command(about = "Inspect the tool catalog")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List every available tool
    #[clap(name = "list")]
    List(ListOptions),

    /// Show a tool's configuration fields
    #[clap(name = "show")]
    Show(ShowOptions),
}

#[derive(Debug, clap::Args)]
pub struct ListOptions {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, clap::Args)]
pub struct ShowOptions {
    /// Tool id (e.g. "titlecase")
    id: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(app: App, _global: crate::Global) -> Result<()> {
    match app.command {
        Commands::List(options) => list(options),
        Commands::Show(options) => show(options),
    }
}

fn list(options: ListOptions) -> Result<()> {
    let tools = registry::list_tools();

    if options.json {
        println!("{}", serde_json::to_string_pretty(tools)?);
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["Id", "Title", "Input", "Description"]);

    for tool in tools {
        table.add_row(prettytable::row![
            tool.id.as_str(),
            tool.title,
            input_label(tool.input),
            tool.description
        ]);
    }

    table.printstd();
    eprintln!("\n{} tool(s). To see a tool's options, run:\n  textkit tools show <id>", tools.len());

    Ok(())
}

fn show(options: ShowOptions) -> Result<()> {
    let tool = registry::lookup(&options.id).ok_or_else(|| Error::UnknownTool(options.id.clone()))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(tool)?);
        return Ok(());
    }

    print_tool(tool);
    Ok(())
}

fn print_tool(tool: &ToolDescriptor) {
    println!("{}", tool.title.bright_cyan().bold());
    println!("{}", tool.description);
    println!("{}: {}", "Input".green(), input_label(tool.input));

    if tool.fields.is_empty() {
        println!("\nNo configuration fields.");
        return;
    }

    println!();
    let mut table = new_table();
    table.add_row(prettytable::row!["Name", "Label", "Kind", "Default", "Allowed"]);
    for field in &tool.fields {
        table.add_row(prettytable::row![
            field.name,
            field.label,
            kind_label(field.kind),
            field.default.to_string(),
            allowed(field)
        ]);
    }
    table.printstd();

    eprintln!(
        "\n{}:\n  {}",
        "Example".bright_white().bold(),
        format!("textkit run {} \"some text\" --set name=value", tool.id.as_str()).cyan()
    );
}

fn input_label(input: InputMode) -> &'static str {
    match input {
        InputMode::Text => "text",
        InputMode::TextPair => "text pair",
        InputMode::Generator => "none",
    }
}

fn kind_label(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "text",
        FieldKind::Number => "number",
        FieldKind::Boolean => "boolean",
        FieldKind::SingleSelect => "select",
        FieldKind::RadioGroup => "radio",
    }
}

/// Human summary of a field's constraints.
fn allowed(field: &FieldSpec) -> String {
    let constraints = &field.constraints;
    if !constraints.options.is_empty() {
        return constraints
            .options
            .iter()
            .map(|choice| choice.value)
            .collect::<Vec<_>>()
            .join(" | ");
    }

    match (constraints.min, constraints.max) {
        (Some(min), Some(max)) => format!("{min}..={max}"),
        (Some(min), None) => format!(">= {min}"),
        (None, Some(max)) => format!("<= {max}"),
        (None, None) => String::new(),
    }
}
