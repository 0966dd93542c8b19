//! svclog CLI
//!
//! Command-line front-end for the svclog line engine

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "svclog")]
#[command(about = "svclog - Leveled service logging to stdout", long_about = None)]
struct Cli {
    #[command(flatten)]
    settings: commands::settings::SettingsArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Emit a single log line
    Emit(commands::emit::EmitArgs),
    /// Log each stdin line between starting and stopping lines
    Pipe(commands::pipe::PipeArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = commands::settings::apply(&cli.settings).and_then(|logger| match cli.command {
        Commands::Emit(args) => commands::emit::execute(args, &logger),
        Commands::Pipe(args) => commands::pipe::execute(args, &logger),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
