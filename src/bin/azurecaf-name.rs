// Copyright (c) 2025 - Cowboy AI, Inc.
//! Azure CAF Name Generator
//!
//! Command line front end over the naming engine.
//!
//! ```text
//! azurecaf-name generate --name myrg --prefix dev --type rg
//! azurecaf-name import azurerm_storage_account:mystorage01
//! azurecaf-name list
//! azurecaf-name show st
//! ```
//!
//! Defaults honor the `AZURECAF_*` environment variables. Diagnostics go to
//! stderr, filtered by `RUST_LOG` (default `warn`).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use cim_azure_naming::domain::{Convention, NameSpec, NameSpecBuilder, Precedence};
use cim_azure_naming::import::import_name_with;
use cim_azure_naming::{NameGenerator, NamingConfig, NamingEngine};

#[derive(Parser)]
#[command(
    name = "azurecaf-name",
    version,
    about = "Generate Azure resource names following the Cloud Adoption Framework"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate names and print the result as JSON
    Generate(GenerateArgs),
    /// Adopt an existing name from an import identifier
    Import {
        /// `<type>:<name>[:<separator>:<clean>:<passthrough>:<slug>:<random_length>]`
        id: String,
    },
    /// List every supported resource type
    List {
        /// Also print the short-code aliases
        #[arg(long)]
        aliases: bool,
    },
    /// Show the naming rules of one resource type
    Show {
        /// Resource type id or alias
        type_id: String,
    },
}

#[derive(clap::Args)]
struct GenerateArgs {
    /// Untyped spec as a JSON object; flags below are ignored when set
    #[arg(long, value_name = "JSON")]
    spec_json: Option<String>,

    /// Base name
    #[arg(long, default_value = "")]
    name: String,

    /// Prefix (repeatable, laid out in order)
    #[arg(long = "prefix")]
    prefixes: Vec<String>,

    /// Suffix (repeatable, laid out in order)
    #[arg(long = "suffix")]
    suffixes: Vec<String>,

    /// Separator between fragments
    #[arg(long)]
    separator: Option<String>,

    /// Primary resource type id or alias
    #[arg(long = "type")]
    type_id: Option<String>,

    /// Additional resource type (repeatable)
    #[arg(long = "types")]
    type_ids: Vec<String>,

    /// Length of the random token
    #[arg(long, default_value_t = 0)]
    random_length: usize,

    /// Explicit random seed; omitted or 0 derives one from the inputs
    #[arg(long, allow_negative_numbers = true)]
    random_seed: Option<i64>,

    /// Keep forbidden characters instead of stripping them
    #[arg(long)]
    no_clean: bool,

    /// Leave the resource slug out
    #[arg(long)]
    no_slug: bool,

    /// Skip composition; only clean, case fold and validate the name
    #[arg(long)]
    passthrough: bool,

    /// cafclassic, cafrandom, random or passthrough
    #[arg(long)]
    convention: Option<Convention>,

    /// Comma list of name, slug, random, suffixes, prefixes
    #[arg(long)]
    precedence: Option<String>,
}

impl GenerateArgs {
    fn into_spec(self, config: &NamingConfig) -> Result<NameSpec> {
        if let Some(json) = self.spec_json {
            let value: serde_json::Value =
                serde_json::from_str(&json).context("--spec-json is not valid JSON")?;
            return Ok(NameSpec::from_value_with(value, config)?);
        }

        let mut builder = NameSpecBuilder::with_config(config)
            .base_name(self.name)
            .prefixes(self.prefixes)
            .suffixes(self.suffixes)
            .type_ids(self.type_ids)
            .random_length(self.random_length)
            .passthrough(self.passthrough);
        if let Some(separator) = self.separator {
            builder = builder.separator(separator);
        }
        if let Some(type_id) = self.type_id {
            builder = builder.type_id(type_id);
        }
        if let Some(seed) = self.random_seed {
            builder = builder.random_seed(seed);
        }
        if self.no_clean {
            builder = builder.clean_input(false);
        }
        if self.no_slug {
            builder = builder.use_slug(false);
        }
        if let Some(convention) = self.convention {
            builder = builder.convention(convention);
        }
        if let Some(precedence) = self.precedence {
            builder = builder.precedence(Precedence::parse_list(&precedence)?);
        }
        Ok(builder.build())
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = NamingConfig::from_env().context("Invalid AZURECAF_* environment")?;
    let engine = NamingEngine::global()?;

    match cli.command {
        Commands::Generate(args) => {
            let spec = args.into_spec(&config)?;
            debug!(?spec, "Generating");
            let result = engine.generate_name(&spec)?;
            print_json(&result)?;
        }
        Commands::Import { id } => {
            let imported = import_name_with(&engine, &id, &config)
                .with_context(|| format!("Cannot import '{id}'"))?;
            print_json(&imported)?;
        }
        Commands::List { aliases } => {
            let catalog = engine.catalog();
            for entry in catalog.entries() {
                println!("{:<64} {}", entry.type_id(), entry.slug());
            }
            if aliases {
                println!();
                for (alias, type_id) in catalog.aliases() {
                    println!("{alias:<12} {type_id}");
                }
            }
        }
        Commands::Show { type_id } => {
            let entry = engine.catalog().get_entry(&type_id)?;
            print_json(entry.definition())?;
        }
    }

    Ok(())
}
