use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub mod formation_model;

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. Path to config.json, that contains logging and report layout parameters.
///    The file is optional, defaults are used when it is missing.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
}

/// A model for describing configuration of the tool.
/// Consists of:
/// 1. Maximum level of log records written next to the report
/// 2. Width of the `=` line separating formation descriptions
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: LevelFilter,
    pub separator_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LevelFilter::Warn,
            separator_width: 50,
        }
    }
}
