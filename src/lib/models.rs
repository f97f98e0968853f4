use std::path::PathBuf;

use clap::{command, Parser};
use figment::{
    providers::{Env, Format, Json, Serialized},
    Figment,
};
use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::AcademyError;

/// A model for describing ARGS of the tools.
/// Consists of:
/// 1. Path to a config json. It may be absent, defaults are used then.
/// 2. Path to the store file, overriding whatever the config says.
/// 3. Whether to reuse an existing store file instead of starting from scratch.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "FILE", default_value = "academy.json")]
    pub config_json_path: PathBuf,
    #[arg(long, value_name = "FILE")]
    pub database_path: Option<PathBuf>,
    #[arg(long)]
    pub keep_store: bool,
}

/// A model for describing configuration of the tools.
/// Consists of:
/// 1. Path to the SQLite file the tool creates and reports on
/// 2. Whether an existing file is kept (seeding it twice fails on UNIQUE names)
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct Config {
    pub database_path: PathBuf,
    pub keep_store: bool,
}

impl Config {
    pub fn with_database(database_path: impl Into<PathBuf>) -> Self {
        Config {
            database_path: database_path.into(),
            keep_store: false,
        }
    }

    /// Layers defaults, the json file, `ACADEMY_*` variables and finally the
    /// command line flags.
    pub fn load(args: &Args, default_database: &str) -> Result<Config, AcademyError> {
        let mut config: Config = Figment::new()
            .merge(Serialized::defaults(Config::with_database(default_database)))
            .merge(Json::file(&args.config_json_path))
            .merge(Env::prefixed("ACADEMY_"))
            .extract()?;
        info!(
            "Read config from {}",
            std::path::absolute(&args.config_json_path)?.display()
        );

        if let Some(path) = &args.database_path {
            config.database_path = path.clone();
        }
        config.keep_store |= args.keep_store;
        Ok(config)
    }
}
