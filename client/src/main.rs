//! Dynaform CLI - publish dynamic forms and read their answers.
//!
//! Configuration comes from the environment (and a `.env` file if present),
//! see [`dynaform_client::Config`].

use clap::{Parser, Subcommand};
use dynaform_client::{generate_form_id, AnswerRecord, Config, DynamicForm, FieldSpec};
use serde_json::Value;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "dynaform", version, about = "Dynamic form service client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the cleaned field definitions of a form
    Formulary { id: String },
    /// Print the answers of a form, resolved to field names
    Answers { id: String },
    /// Publish fields read from a JSON file and print the public URL
    Publish {
        id: String,
        /// JSON array of `{type, name, options?, url?, email?, subject?}`
        file: PathBuf,
    },
    /// Submit a single answer
    Submit {
        id: String,
        index: u32,
        /// Parsed as JSON when possible, otherwise sent as a string
        value: String,
    },
    /// Print a fresh form identifier
    NewId,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dynaform=info,dynaform_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::debug!("Using form service at {}", config.api_url);

    match cli.command {
        Command::Formulary { id } => {
            let form = DynamicForm::from_config(id, &config)?;
            let formulary = form.get_formulary().await?;
            println!("{}", serde_json::to_string_pretty(&formulary)?);
        }
        Command::Answers { id } => {
            let form = DynamicForm::from_config(id, &config)?;
            let answers = form.get_answers().await?;
            println!("{}", serde_json::to_string_pretty(&answers)?);
        }
        Command::Publish { id, file } => {
            let specs: Vec<FieldSpec> = serde_json::from_str(&std::fs::read_to_string(&file)?)?;
            let mut form = DynamicForm::from_config(id, &config)?;
            for spec in specs {
                form.add_field(spec);
            }
            let url = form.create_formulary().await?;
            tracing::info!("Published {} fields", form.fields().len());
            println!("{}", url);
        }
        Command::Submit { id, index, value } => {
            let value = serde_json::from_str::<Value>(&value).unwrap_or(Value::String(value));
            let form = DynamicForm::from_config(id.as_str(), &config)?;
            let record = AnswerRecord::single(id, index, value);
            let responses = form.create_answers(&[record]).await?;
            println!("{}", serde_json::to_string_pretty(&responses)?);
        }
        Command::NewId => {
            println!("{}", generate_form_id());
        }
    }

    Ok(())
}
