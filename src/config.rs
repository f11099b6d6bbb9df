//! Command line arguments, environment defaults and logging setup.

use crate::output::OutputFormat;
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Consolidate IP ranges while excluding out-of-scope addresses.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File containing in-scope IP ranges
    pub in_scope_file: PathBuf,

    /// File containing out-of-scope IP ranges
    pub out_scope_file: PathBuf,

    /// Output file for the consolidated IP ranges, stdout when omitted or "-"
    pub output_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, env = "IP_SCOPE_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print a per-family summary to stderr
    #[arg(short, long)]
    pub summary: bool,

    /// log4rs YAML configuration file
    #[arg(long, env = "IP_SCOPE_LOG_CONFIG", default_value = DEFAULT_LOG_CONFIG)]
    pub log_config: PathBuf,
}

/// Resolved run settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub in_scope_file: PathBuf,
    pub out_scope_file: PathBuf,
    /// `None` means stdout.
    pub output_file: Option<PathBuf>,
    pub format: OutputFormat,
    pub summary: bool,
    pub log_config: PathBuf,
}

impl From<Args> for Config {
    fn from(args: Args) -> Config {
        Config {
            in_scope_file: args.in_scope_file,
            out_scope_file: args.out_scope_file,
            output_file: args.output_file.filter(|p| p.as_path() != Path::new("-")),
            format: args.format,
            summary: args.summary,
            log_config: args.log_config,
        }
    }
}

/// Initialise log4rs from `log_config`, or log `info` and up to stderr when
/// the file does not exist.
pub fn init_logging(log_config: &Path) -> Result<(), Box<dyn Error>> {
    if log_config.exists() {
        log4rs::init_file(log_config, Default::default()).map_err(|e| {
            format!(
                "Error initializing log4rs from {}: {e}",
                log_config.display()
            )
        })?;
        log::debug!("Logging configured from {}", log_config.display());
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S)} {h({l:5})} {t} - {m}{n}",
        )))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    log::debug!(
        "No log config at {}, using stderr defaults",
        log_config.display()
    );
    Ok(())
}
