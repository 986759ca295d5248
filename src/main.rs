use clap::Parser;
use den::commands::*;
use den::core::{dirs, error::Result, print_error};
use std::env;
use std::fs::{self, OpenOptions};
use std::io;

#[derive(Parser)]
#[command(name = "den")]
#[command(about = "Browse, favorite and open your local projects from the terminal")]
#[command(version)]
struct Cli {
    /// Enable debug logging to debug.log in the cache directory
    #[arg(long)]
    debug: bool,

    /// Reset all configuration and start fresh
    #[arg(long)]
    reset: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "warn");
    }
    init_logging();

    let result = if cli.reset {
        execute_reset()
    } else {
        execute_browse()
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

// The session owns the terminal, so log records go to a file instead of stderr.
fn init_logging() {
    let target: Box<dyn io::Write + Send> = match open_log_file() {
        Ok(file) => Box::new(file),
        Err(_) => Box::new(io::sink()),
    };
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();
}

fn open_log_file() -> Result<fs::File> {
    let path = dirs::log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}
