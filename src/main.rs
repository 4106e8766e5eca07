use clap::Parser;
use std::process::ExitCode;
use tracing::warn;
use word_diff::cli::{self, DiffArgs};
use word_diff::config::{Config, Startup};

fn main() -> ExitCode {
    let args = DiffArgs::parse();

    let startup = Startup::resolve(Config::load());
    init_tracing(startup.level);
    for problem in &startup.problems {
        warn!("Falling back to default settings: {}", problem);
    }

    match cli::run(&args, &startup.settings) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("word-diff: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: tracing::Level) {
    // Logs go to stderr so stdout stays pipeable
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
