use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{Read, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use csq::compile::{compile, compile_boolean};
use csq::expr::Expression;
use csq::options::SearchOptions;
use csq::request::{ApiVersion, SearchRequest};

#[derive(Parser)]
#[command(name = "csq")]
#[command(about = "Expression-to-query compiler for CloudSearch-style search services")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile an expression to the structured (2013) dialect
    Compile {
        /// Expression as JSON, or `-` to read stdin
        expr: String,
    },
    /// Compile a mapping to the legacy (2011) boolean dialect
    Boolean {
        /// Mapping as JSON, or `-` to read stdin
        expr: String,
    },
    /// Assemble the full raw parameter list for a search request
    Params {
        /// Query expression as JSON, or `-` to read stdin
        expr: String,

        /// Wire dialect to target
        #[arg(long, default_value = "2013")]
        api_version: String,

        /// Filter expression as JSON (structured dialect only)
        #[arg(long)]
        filter: Option<String>,

        /// Options bag as JSON (start/size, page/per, sort, return)
        #[arg(long)]
        options: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compile { expr } => {
            let value = read_json(&expr)?;
            let query = compile(&Expression::from_json(&value)?)?;
            println!("{query}");
        }
        Commands::Boolean { expr } => {
            let value = read_json(&expr)?;
            println!("{}", compile_boolean(&value)?);
        }
        Commands::Params {
            expr,
            api_version,
            filter,
            options,
            no_color,
        } => {
            let version = parse_version(&api_version)?;
            let mut request = SearchRequest::new(version, read_json(&expr)?);
            if let Some(filter) = filter {
                request = request.with_filter(read_json(&filter)?);
            }
            if let Some(options) = options {
                request = request.with_options(SearchOptions::extract(&read_json(&options)?));
            }
            print_params(&request.params()?, !no_color)?;
        }
    }

    Ok(())
}

/// Parse an argument as JSON, reading stdin when it is `-`. Bare words that
/// aren't valid JSON are taken as plain term strings.
fn read_json(arg: &str) -> Result<serde_json::Value> {
    let text = if arg == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading expression from stdin")?;
        buf
    } else {
        arg.to_string()
    };
    let trimmed = text.trim();
    match serde_json::from_str(trimmed) {
        Ok(value) => Ok(value),
        Err(_) => Ok(serde_json::Value::String(trimmed.to_string())),
    }
}

fn parse_version(arg: &str) -> Result<ApiVersion> {
    match arg {
        "2011" => Ok(ApiVersion::V2011),
        "2013" => Ok(ApiVersion::V2013),
        other => anyhow::bail!("unknown API version `{other}` (expected 2011 or 2013)"),
    }
}

/// Print parameter pairs as `key=value` lines, keys highlighted
fn print_params(params: &[(String, String)], color: bool) -> Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    for (key, value) in params {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(stdout, "{key}")?;
        stdout.reset()?;
        writeln!(stdout, "={value}")?;
    }
    Ok(())
}
