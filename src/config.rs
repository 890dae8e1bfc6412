use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Defaults layered from `config/*` files and `IMAGE_SCAN_*` variables.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub directory: String,
    pub archive: String,
    pub hash_list: String,
    pub log_level: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            .set_default("directory", "images")?
            .set_default("archive", "images.tgz")?
            .set_default("hash_list", "hash_list.txt")?
            .set_default("log_level", "info")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix("IMAGE_SCAN"))
            .build()?;

        s.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            directory: "images".to_string(),
            archive: "images.tgz".to_string(),
            hash_list: "hash_list.txt".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Read exif data on images and match them against a hash list
#[derive(Parser, Debug)]
#[command(name = "image_scan", version)]
pub struct Cli {
    /// Path to the tar archive containing images
    #[arg(short, long, value_name = "PATH")]
    pub archive: Option<PathBuf>,

    /// Path to the directory containing images
    #[arg(short, long, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Path to the hash list text file
    #[arg(short, long, value_name = "PATH")]
    pub list: Option<PathBuf>,

    /// Display extra logging information
    #[arg(short, long)]
    pub verbose: bool,
}

/// Locations used when a path is not given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanDefaults {
    pub directory: PathBuf,
    pub archive: PathBuf,
    pub blocklist: PathBuf,
}

impl From<&AppConfig> for ScanDefaults {
    fn from(config: &AppConfig) -> Self {
        Self {
            directory: PathBuf::from(&config.directory),
            archive: PathBuf::from(&config.archive),
            blocklist: PathBuf::from(&config.hash_list),
        }
    }
}

impl Default for ScanDefaults {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

/// Everything the scan needs to know, fixed before it starts.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    pub directory: Option<PathBuf>,
    pub archive: Option<PathBuf>,
    pub blocklist: Option<PathBuf>,
    pub verbose: bool,
    pub defaults: ScanDefaults,
}

impl ScanConfig {
    pub fn from_cli(cli: Cli, config: &AppConfig) -> Self {
        Self {
            directory: cli.directory,
            archive: cli.archive,
            blocklist: cli.list,
            verbose: cli.verbose,
            defaults: ScanDefaults::from(config),
        }
    }

    pub fn log_level(&self, config: &AppConfig) -> log::LevelFilter {
        if self.verbose {
            return log::LevelFilter::Debug;
        }
        config.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
