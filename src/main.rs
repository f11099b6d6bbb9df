use clap::Parser;
use ip_scope_summary::config::{init_logging, Args};
use ip_scope_summary::{run, Config};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from(Args::parse());
    init_logging(&config.log_config)?;

    run(&config)?;

    if let Some(path) = &config.output_file {
        println!("Output written to {}", path.display());
    }
    Ok(())
}
