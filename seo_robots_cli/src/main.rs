//! # robots
//!
//! Command-line host for the robots directive engine.

mod cli;

use clap::Parser;
use cli::{Cli, Command, DirectiveInput, Target};
use seo_robots::catalog::presentation_catalog;
use seo_robots::config::RuntimeConfig;
use seo_robots::legacy::{code_to_directives, meta_robots_by_code, migrate_configuration};
use seo_robots::logging::{self, LogFacadeLogger, LogLevel, LoggingService};
use seo_robots::pipeline::process_with_config;
use seo_robots::validation::Validator;
use seo_robots::{log_info, DirectiveCollection};
use std::error::Error;
use std::path::Path;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RuntimeConfig::load_from_file(path)?,
        None => RuntimeConfig::default(),
    };

    init_logging(cli.is_verbose, &config)?;
    log_info!("robots starting", "command" => format!("{:?}", cli.command));

    match cli.command {
        Command::Build {
            input,
            target,
            is_json,
        } => build(&input, target, is_json, &config),
        Command::Validate { input } => validate(&input, &config),
        Command::Legacy { code } => {
            println!("directives:  {}", code_to_directives(code).join(", "));
            println!("meta robots: {}", meta_robots_by_code(code));
            Ok(())
        }
        Command::Migrate { file, output } => migrate(&file, output.as_deref()),
        Command::Catalog => {
            println!("{}", serde_json::to_string_pretty(&presentation_catalog())?);
            Ok(())
        }
    }
}

/// Route engine events into env_logger through the `log` facade
fn init_logging(is_verbose: bool, config: &RuntimeConfig) -> Result<(), Box<dyn Error>> {
    let default_filter = if is_verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    logging::config::init_runtime_preferences(config.logging.clone())?;

    let min_level = if is_verbose {
        LogLevel::Debug
    } else {
        logging::config::get_min_log_level()
    };
    let service = LoggingService::new(Arc::new(LogFacadeLogger), min_level);
    logging::init_global_logging_with_service(Arc::new(service))?;

    log::debug!("{}", logging::get_system_diagnostics());
    Ok(())
}

fn read_collection(input: &DirectiveInput) -> Result<DirectiveCollection, Box<dyn Error>> {
    match &input.file {
        Some(path) => {
            let content = read_file(path)?;
            Ok(DirectiveCollection::from_json_str(&content)?)
        }
        None => Ok(DirectiveCollection::Flat(input.tokens.clone())),
    }
}

fn read_file(path: &Path) -> Result<String, Box<dyn Error>> {
    std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e).into())
}

fn build(
    input: &DirectiveInput,
    target: Target,
    is_json: bool,
    config: &RuntimeConfig,
) -> Result<(), Box<dyn Error>> {
    let collection = read_collection(input)?;
    let output = process_with_config(&collection, config);

    if is_json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if let Some(validation) = &output.validation {
        for message in validation.messages() {
            eprintln!("warning: {}", message);
        }
    }

    match target {
        Target::Meta => println!("{}", output.meta_robots),
        Target::XRobots => println!("{}", output.x_robots_tag),
        Target::Both => {
            println!("meta robots:  {}", output.meta_robots);
            println!("X-Robots-Tag: {}", output.x_robots_tag);
        }
    }

    Ok(())
}

fn validate(input: &DirectiveInput, config: &RuntimeConfig) -> Result<(), Box<dyn Error>> {
    let collection = read_collection(input)?;
    let result = collection.validate_with(&Validator::new(config.validation.clone()));

    if result.valid {
        println!("valid ({} directives)", collection.len());
        return Ok(());
    }

    for message in result.messages() {
        eprintln!("error: {}", message);
    }
    std::process::exit(1);
}

fn migrate(file: &Path, output: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let content = read_file(file)?;
    let document: serde_json::Value = serde_json::from_str(&content)?;
    let report = migrate_configuration(&document)?;

    for failure in &report.failures {
        eprintln!("warning: {}", failure);
    }
    if report.is_noop() {
        eprintln!("nothing to migrate");
    } else {
        eprintln!("migrated: {}", report.migrated_paths.join(", "));
    }

    let rendered = serde_json::to_string_pretty(&report.document)?;
    match output {
        Some(path) => std::fs::write(path, rendered + "\n")
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?,
        None => println!("{}", rendered),
    }

    Ok(())
}
