//! Info command: package details and the configuration a run would use.

use std::fmt::Display;

use clap::Args;
use dale_chall_core::config::{Config, ConfigSources};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    corpus_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dictionary_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(ToString::to_string),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(ToString::to_string),
            corpus_path: config.corpus_path.as_ref().map(ToString::to_string),
            dictionary_path: config.dictionary_path.as_ref().map(ToString::to_string),
            max_score: config.max_score,
            max_input_bytes: config.input_limit(),
        }
    }
}

#[derive(Serialize)]
struct Info {
    name: &'static str,
    version: &'static str,
    config: ConfigInfo,
}

/// Print package name, version and resolved configuration.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let info = Info {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    let cfg = &info.config;
    println!("{} {}", info.name.bold(), info.version.green());
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!();
    line("Config file", cfg.config_file.as_deref().unwrap_or("none loaded"));
    line("Log level", &cfg.log_level);
    line_opt("Log directory", cfg.log_dir.as_ref());
    line_opt("Corpus", cfg.corpus_path.as_ref());
    line_opt("Dictionary", cfg.dictionary_path.as_ref());
    line_opt("Max score", cfg.max_score.map(|m| format!("{m:.2}")).as_ref());
    line_opt("Input limit (bytes)", cfg.max_input_bytes.as_ref());

    Ok(())
}

fn line(label: &str, value: impl Display) {
    println!("{:>20}  {}", label.dimmed(), value);
}

fn line_opt<T: Display>(label: &str, value: Option<&T>) {
    match value {
        Some(v) => line(label, v),
        None => line(label, "(not set)".dimmed()),
    }
}
