//! Binary to run the JSON Schema keyword rules over a schema.
//!
//! Usage: `json-schema-rules [SCHEMA] > class.json`
//!
//! Reads a JSON Schema from `SCHEMA` (or stdin when omitted) and writes the
//! generated class model to stdout as JSON. Set `RUST_LOG` for diagnostics
//! on stderr.

use std::io::{Read, stdin, stdout};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use json_schema_rules::{GenerateSettings, RuleError, generate_to_writer};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "json-schema-rules", version, about)]
struct Cli {
    /// JSON Schema file; reads stdin when omitted.
    schema: Option<PathBuf>,

    /// Name of the generated class (default: the schema title, or `Root`).
    #[arg(long)]
    class_name: Option<String>,

    /// JSON settings file; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Attach a not-null annotation to required fields.
    #[arg(long)]
    nullability_annotations: bool,

    /// Record required-ness in API-description annotations.
    #[arg(long)]
    api_model_annotations: bool,
}

impl Cli {
    fn settings(&self) -> Result<GenerateSettings, RuleError> {
        let mut settings: GenerateSettings = match &self.config {
            Some(path) => GenerateSettings::from_json_file(path)?,
            None => GenerateSettings::default(),
        };
        settings.include_nullability_annotations |= self.nullability_annotations;
        settings.include_api_model_annotations |= self.api_model_annotations;
        Ok(settings)
    }

    fn schema_json(&self) -> Result<String, RuleError> {
        match &self.schema {
            Some(path) => Ok(std::fs::read_to_string(path)?),
            None => {
                let mut schema_json: String = String::new();
                stdin().read_to_string(&mut schema_json)?;
                Ok(schema_json)
            }
        }
    }

    fn run(&self) -> Result<(), RuleError> {
        let settings: GenerateSettings = self.settings()?;
        tracing::debug!(?settings, "loaded settings");
        let schema_json: String = self.schema_json()?;
        generate_to_writer(
            &schema_json,
            self.class_name.as_deref(),
            &mut stdout().lock(),
            &settings,
        )
    }
}

fn init_tracing() {
    let filter: EnvFilter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli: Cli = Cli::parse();
    if let Err(e) = cli.run() {
        tracing::error!(error = %e, "generation failed");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
