use clap::Parser;
use log::LevelFilter;
use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::DEFAULT_ALLOWED_PREFIXES;

/// Filter the pyronear dataset to only keep images with fire smoke.
///
/// The folder structure remains the same, only the non-smoke images are discarded.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct FilterArgs {
    /// Directory to save the filtered dataset
    #[arg(
        long = "save-dir",
        default_value = "./data/interim/filtered/smoke/pyronear_ds_03_2024/"
    )]
    pub save_dir: PathBuf,

    /// Directory containing the pyronear dataset
    #[arg(long = "dir-dataset", default_value = "./data/raw/pyronear_ds_03_2024/")]
    pub dir_dataset: PathBuf,

    /// Set of allowed dataset prefixes to keep
    #[arg(
        long = "allowed-dataset-prefixes",
        num_args = 1..,
        default_values_t = default_allowed_prefixes()
    )]
    pub allowed_dataset_prefixes: Vec<String>,

    /// Logging level: error, warn, info, debug, trace or off
    #[arg(long = "loglevel", default_value = "info", value_parser = parse_log_level)]
    pub loglevel: LevelFilter,
}

/// Split the false positives dataset into train, val and test at the folder level.
///
/// The output follows the ultralytics YOLO scaffolding.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct SplitArgs {
    /// Directory to save the split dataset
    #[arg(
        long = "save-dir",
        default_value = "./data/interim/data-split/false_positives/FP_2024/wise_wolf/"
    )]
    pub save_dir: PathBuf,

    /// Directory containing the false positives dataset
    #[arg(
        long = "dir-dataset",
        default_value = "./data/interim/filtered/false_positives/FP_2024/wise_wolf/"
    )]
    pub dir_dataset: PathBuf,

    /// Random seed used to shuffle the folders, negative values are allowed
    #[arg(long = "random-seed", allow_negative_numbers = true)]
    pub random_seed: i64,

    /// Ratio for splitting train and val splits
    #[arg(long = "ratio-train-val", default_value_t = 0.9, value_parser = validate_ratio)]
    pub ratio_train_val: f64,

    /// Ratio for splitting val and test splits
    #[arg(long = "ratio-val-test", default_value_t = 0.5, value_parser = validate_ratio)]
    pub ratio_val_test: f64,

    /// Logging level: error, warn, info, debug, trace or off
    #[arg(long = "loglevel", default_value = "info", value_parser = parse_log_level)]
    pub loglevel: LevelFilter,
}

impl SplitArgs {
    /// Seed for the folder shuffle, negative seeds wrap onto the upper half of `u64`
    pub fn seed(&self) -> u64 {
        self.random_seed as u64
    }
}

fn default_allowed_prefixes() -> Vec<String> {
    DEFAULT_ALLOWED_PREFIXES
        .iter()
        .map(|prefix| prefix.to_string())
        .collect()
}

// Validate that the ratio is between 0.0 and 1.0
pub fn validate_ratio(s: &str) -> Result<f64, String> {
    match f64::from_str(s) {
        Ok(val) if (0.0..=1.0).contains(&val) => Ok(val),
        _ => Err("RATIO must be between 0.0 and 1.0".to_string()),
    }
}

pub fn parse_log_level(s: &str) -> Result<LevelFilter, String> {
    match s.to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" | "critical" => Ok(LevelFilter::Error),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        _ => Err(format!("unknown log level: {}", s)),
    }
}

/// Rewrite the single-dash `-log` spelling into `--loglevel` so clap accepts it.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            match arg.to_str() {
                Some("-log") => OsString::from("--loglevel"),
                Some(s) if s.starts_with("-log=") => {
                    OsString::from(format!("--loglevel={}", &s["-log=".len()..]))
                }
                _ => arg,
            }
        })
        .collect()
}

/// Initialize the logger, `RUST_LOG` takes precedence over `level`
pub fn init_logger(level: LevelFilter) {
    let default_filter = level.to_string().to_lowercase();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
