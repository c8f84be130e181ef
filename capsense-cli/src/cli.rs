use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::{commands, config::ClientConfig, error::CliError};
use capsense_types::FeedbackVerdict;
use commands::*;

#[derive(Debug, Parser)]
#[command(name = "capsense")]
#[command(about = "Review CapSense feedback analyses from the terminal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// CapSense API base URL (overrides the configuration file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the feedback dashboard
    Dashboard {
        /// Print the rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Analyze one or more customer texts
    Analyze {
        /// Customer texts, analyzed in order
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Approve or reject a generated response
    Feedback {
        /// Verdict to record
        #[arg(short, long, value_enum)]
        verdict: VerdictArg,

        /// Original customer text
        #[arg(short, long)]
        text: String,

        /// AI-generated response being judged
        #[arg(short, long)]
        response: String,
    },

    /// Interactive review session
    Session,

    /// Print TypeScript definitions of the API types
    Types {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the active configuration
    Config,

    /// Show version information
    Version,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum VerdictArg {
    Approved,
    Rejected,
}

impl From<VerdictArg> for FeedbackVerdict {
    fn from(arg: VerdictArg) -> Self {
        match arg {
            VerdictArg::Approved => FeedbackVerdict::Approved,
            VerdictArg::Rejected => FeedbackVerdict::Rejected,
        }
    }
}

impl Cli {
    pub async fn run(&self) -> Result<(), CliError> {
        match &self.command {
            Some(Commands::Dashboard { json }) => {
                let config = self.load_config()?;
                show_dashboard(&config.build_client()?, *json).await
            }
            Some(Commands::Analyze { texts }) => {
                let config = self.load_config()?;
                analyze_texts(&config.build_client()?, texts).await
            }
            Some(Commands::Feedback {
                verdict,
                text,
                response,
            }) => {
                let config = self.load_config()?;
                send_feedback(&config.build_client()?, (*verdict).into(), text, response).await
            }
            Some(Commands::Session) => {
                let config = self.load_config()?;
                run_session(&config.build_client()?).await
            }
            Some(Commands::Types { output }) => write_types(output.as_deref()).await,
            Some(Commands::Config) => self.handle_config().await,
            Some(Commands::Version) => self.handle_version().await,
            None => {
                println!("capsense - review AI-generated responses to customer feedback");
                println!("Run 'capsense --help' for usage information.");
                Ok(())
            }
        }
    }

    fn load_config(&self) -> Result<ClientConfig, CliError> {
        let (config, path) = ClientConfig::load(self.config.as_deref())?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config.with_base_url(self.base_url.as_deref()))
    }

    async fn handle_config(&self) -> Result<(), CliError> {
        let (config, path) = ClientConfig::load(self.config.as_deref())?;
        let config = config.with_base_url(self.base_url.as_deref());
        let rendered = config
            .to_toml()
            .map_err(|e| CliError::Config(format!("Failed to render configuration: {e}")))?;

        println!("# {}", path.display());
        print!("{rendered}");
        Ok(())
    }

    async fn handle_version(&self) -> Result<(), CliError> {
        println!("capsense CLI version: {}", env!("CARGO_PKG_VERSION"));
        println!("Author: {}", env!("CARGO_PKG_AUTHORS"));
        println!("Description: {}", env!("CARGO_PKG_DESCRIPTION"));
        Ok(())
    }
}
