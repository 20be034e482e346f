pub mod export;
pub mod init;
pub mod serve;
pub mod tasks;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Run the web interface")]
    Serve(serve::ServeArgs),
    #[command(about = "List tasks in the terminal")]
    Tasks(tasks::TasksArgs),
    #[command(about = "Export tasks to a calendar, JSON or CSV file")]
    Export(export::ExportArgs),
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
            Commands::Serve(args) => serve::cmd(args).await,
            Commands::Tasks(args) => tasks::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
