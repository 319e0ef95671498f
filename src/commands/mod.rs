pub mod init;
pub mod presets;
pub mod run;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure default durations and cycle length")]
    Init(init::InitArgs),
    #[command(about = "List the built-in presets")]
    Presets,
    #[command(about = "Start an interactive Pomodoro session")]
    Run(run::RunArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Presets => presets::cmd(),
            Commands::Run(args) => run::cmd(args).await,
        }
    }
}
