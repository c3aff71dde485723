//! # CLI Layer
//!
//! This module is one possible host for docfilter. It is the only place that:
//! - Parses arguments
//! - Reads request files or stdin
//! - Writes to stdout/stderr and decides exit codes
//! - Installs the logging subscriber
//!
//! Compiled output is JSON on stdout so it can be piped; messages that
//! accompany JSON output go to stderr.

use super::print::{eprint_messages, print_config, print_json, print_messages, print_operators};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use docfilter::api::{ConfigAction, FilterApi};
use docfilter::config::FilterConfig;
use docfilter::error::Result;
use docfilter::form::{FilterForm, FilterRequest};
use docfilter::model::{Combination, OutputMode};
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const CONFIG_DIR_ENV: &str = "DOCFILTER_CONFIG_DIR";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut api = init_api(&cli)?;

    match cli.command {
        Commands::Compile {
            file,
            output,
            logic,
            compact,
        } => handle_compile(&api, file.as_deref(), output, logic, compact),
        Commands::Batch {
            file,
            continue_on_fail,
            compact,
        } => handle_batch(&api, file.as_deref(), continue_on_fail, compact),
        Commands::Describe { file, logic } => handle_describe(&api, file.as_deref(), logic),
        Commands::Operators => handle_operators(&api),
        Commands::Config { key, value } => handle_config(&mut api, key, value),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn config_dir(cli: &Cli) -> Option<PathBuf> {
    cli.config_dir
        .clone()
        .or_else(|| std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from))
        .or_else(|| {
            ProjectDirs::from("com", "docfilter", "docfilter")
                .map(|dirs| dirs.config_dir().to_path_buf())
        })
}

fn init_api(cli: &Cli) -> Result<FilterApi> {
    let mut api = match config_dir(cli) {
        Some(dir) => {
            debug!(dir = %dir.display(), "loading config");
            FilterApi::from_config_dir(dir)?
        }
        None => FilterApi::new(FilterConfig::default()),
    };
    if let Some(locale) = cli.locale {
        api.config_mut().locale = locale;
    }
    Ok(api)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// A compile input is either a full request or just its list of filters.
fn read_request(file: Option<&Path>) -> Result<FilterRequest> {
    let input: Value = serde_json::from_str(&read_input(file)?)?;
    if input.is_array() {
        let filters: Vec<FilterForm> = serde_json::from_value(input)?;
        return Ok(FilterRequest {
            filters,
            ..Default::default()
        });
    }
    Ok(serde_json::from_value(input)?)
}

fn handle_compile(
    api: &FilterApi,
    file: Option<&Path>,
    output: Option<OutputMode>,
    logic: Option<Combination>,
    compact: bool,
) -> Result<()> {
    let mut request = read_request(file)?;
    if output.is_some() {
        request.output = output;
    }
    if logic.is_some() {
        request.logical_operator = logic;
    }

    let result = api.compile_request(&request)?;
    if let Some(compiled) = &result.compiled {
        print_json(compiled, compact)?;
    }
    eprint_messages(&result.messages);
    Ok(())
}

fn handle_batch(
    api: &FilterApi,
    file: Option<&Path>,
    continue_on_fail: bool,
    compact: bool,
) -> Result<()> {
    let requests: Vec<FilterRequest> = serde_json::from_str(&read_input(file)?)?;
    let override_policy = continue_on_fail.then_some(true);

    let result = api.batch(&requests, override_policy)?;
    print_json(&result.items, compact)?;
    eprint_messages(&result.messages);
    Ok(())
}

fn handle_describe(api: &FilterApi, file: Option<&Path>, logic: Option<Combination>) -> Result<()> {
    let mut request = read_request(file)?;
    if logic.is_some() {
        request.logical_operator = logic;
    }

    let result = api.compile_request(&request)?;
    if let Some(compiled) = &result.compiled {
        println!("{}", compiled.description);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_operators(api: &FilterApi) -> Result<()> {
    let result = api.operators();
    print_operators(&result.operators);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(api: &mut FilterApi, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = api.configure(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
