//! sexptype CLI entry point.

use std::io::{Read, Write};

use clap::{Parser, Subcommand, ValueEnum};
use rhizome_sexptype::{Arms, SexpType, TagGroup, TagInfo, TagSchema, classify, dispatch, registry};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sexptype")]
#[command(about = "Inspect representation tags and tag dispatch")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
    Toml,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Json,
    Toml,
}

#[derive(Subcommand)]
enum Commands {
    /// List tags in registry order
    List {
        /// Only list tags in this group
        #[arg(short, long)]
        group: Option<TagGroup>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,
    },

    /// Look up a tag by type name, or by id if the key is numeric
    Lookup {
        /// Type name (e.g. integer) or numeric id
        key: String,

        /// Treat the key as a constant name (e.g. INTSXP)
        #[arg(long)]
        symbol: bool,

        /// Also accept aliases such as numeric
        #[arg(long)]
        alias: bool,
    },

    /// Classify a JSON value
    Classify {
        /// JSON text (or - for stdin)
        value: String,
    },

    /// Dispatch a type name over NAME=VALUE arms
    Dispatch {
        /// Type name to dispatch on
        name: String,

        /// Arm as NAME=VALUE (repeatable, later arms win)
        #[arg(short, long = "arm", value_parser = parse_arm)]
        arms: Vec<(String, String)>,

        /// Result when no arm matches
        #[arg(short, long, default_value = "unknown")]
        default: String,

        /// Reject repeated arm names
        #[arg(long)]
        strict: bool,
    },

    /// Work with the tag schema file
    Schema {
        #[command(subcommand)]
        command: SchemaCommands,
    },
}

#[derive(Subcommand)]
enum SchemaCommands {
    /// Check a schema file against the registry
    Check {
        /// Schema file (defaults to the bundled tags.toml)
        path: Option<String>,
    },

    /// Print the registry as a schema
    Export {
        #[arg(short, long, value_enum, default_value = "toml")]
        format: ExportFormat,
    },
}

fn parse_arm(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", arg)),
    }
}

fn lookup(key: &str, symbol: bool, alias: bool) -> rhizome_sexptype::Result<SexpType> {
    if symbol {
        registry::lookup_by_symbol(key)
    } else if let Ok(id) = key.parse::<u32>() {
        registry::lookup_by_id(id)
    } else if alias {
        registry::resolve(key)
    } else {
        registry::lookup_by_name(key)
    }
}

/// Tags in registry order, optionally limited to one group.
fn select_rows(group: Option<TagGroup>) -> Vec<&'static TagInfo> {
    registry::rows()
        .iter()
        .filter(|row| group.is_none_or(|group| row.group == group))
        .collect()
}

fn write_rows(
    out: &mut impl Write,
    rows: &[&TagInfo],
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        Format::Table => {
            for row in rows {
                writeln!(
                    out,
                    "{:<3} {:<11} {:<12} {:<9} {}",
                    row.id, row.symbol, row.name, row.group, row.description
                )?;
            }
        }
        Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(rows)?)?,
        Format::Toml => {
            let schema = TagSchema {
                tag: TagSchema::from_registry()
                    .tag
                    .into_iter()
                    .filter(|entry| rows.iter().any(|row| row.name == entry.name))
                    .collect(),
            };
            write!(out, "{}", schema.to_toml()?)?;
        }
    }
    Ok(())
}

fn write_export(out: &mut impl Write, format: ExportFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        ExportFormat::Toml => write!(out, "{}", TagSchema::from_registry().to_toml()?)?,
        ExportFormat::Json => write_rows(out, &select_rows(None), Format::Json)?,
    }
    Ok(())
}

fn read_input(value: &str) -> std::io::Result<String> {
    if value == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(value.to_string())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sexptype=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { group, format } => {
            write_rows(&mut std::io::stdout().lock(), &select_rows(group), format)?;
        }

        Commands::Lookup { key, symbol, alias } => {
            let tag = lookup(&key, symbol, alias)?;
            write_rows(&mut std::io::stdout().lock(), &[tag.info()], Format::Table)?;
        }

        Commands::Classify { value } => {
            let input = read_input(&value)?;
            let value: serde_json::Value = serde_json::from_str(&input)?;
            let tag = classify(&value)?;
            println!("{}", tag);
        }

        Commands::Dispatch {
            name,
            arms,
            default,
            strict,
        } => {
            let tag = registry::lookup_by_name(&name)?;
            let arms: Arms<String> = if strict {
                Arms::strict(arms)?
            } else {
                arms.into_iter().collect()
            };
            println!("{}", dispatch(tag, &arms, default));
        }

        Commands::Schema { command } => match command {
            SchemaCommands::Check { path } => {
                let schema = match path {
                    Some(ref path) => TagSchema::from_file(path)?,
                    None => TagSchema::load_default()?,
                };
                schema.check()?;
                info!("schema matches registry ({} tags)", schema.tag.len());
                println!("ok");
            }
            SchemaCommands::Export { format } => {
                write_export(&mut std::io::stdout().lock(), format)?;
            }
        },
    }

    Ok(())
}
