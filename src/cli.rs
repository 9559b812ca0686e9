//! Command line definition and dispatch

use crate::commands::*;
use crate::config::Config;
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gg")]
#[command(
    about = "gg is a command-line tool for interacting with GitHub's Pull Requests and Repositories"
)]
#[command(version, subcommand_required = true, arg_required_else_help = true)]
pub struct Cli {
    /// Configuration file path (defaults to gg.yaml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log requests and paging decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect a user's repositories and a repository's workflows
    #[command(subcommand)]
    Repo(RepoCommands),

    /// Inspect open pull requests
    #[command(subcommand)]
    Pr(PrCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum RepoCommands {
    /// List repositories owned and followed by a user
    List {
        username: String,

        /// Only list repositories the user owns
        #[arg(long, conflicts_with = "followed")]
        owned: bool,

        /// Only list repositories the user follows
        #[arg(long)]
        followed: bool,

        /// Number of results to return
        #[arg(short = 'S', long)]
        size: Option<u32>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// List the workflows of a repository
    Workflow {
        /// Repository as owner/repo
        #[arg(value_name = "OWNER/REPO")]
        repo_path: String,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum PrCommands {
    /// List pull requests opened by a user
    Author {
        username: String,

        /// Number of results to return
        #[arg(short = 'S', long)]
        size: Option<u32>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// List the open pull requests of a repository
    Repo {
        /// Repository as owner/repo
        #[arg(value_name = "OWNER/REPO")]
        repo_path: String,

        /// Show the state of the PRs in the Workflow
        #[arg(short, long)]
        status: bool,

        /// Number of results to return
        #[arg(short = 'S', long)]
        size: Option<u32>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Write completions for `shell` to stdout
    pub fn print_completions(shell: Shell) {
        let mut command = Cli::command();
        let name = command.get_name().to_string();
        clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    }
}

/// Load configuration and run the selected command
pub async fn run(cli: Cli) -> Result<()> {
    if let Commands::Completions { shell } = cli.command {
        Cli::print_completions(shell);
        return Ok(());
    }

    let config = Config::load_config(cli.config.as_deref())?;
    let context = CommandContext::new(config);

    execute_command(cli.command, &context).await
}

async fn execute_command(command: Commands, context: &CommandContext) -> Result<()> {
    match command {
        Commands::Repo(RepoCommands::List {
            username,
            owned,
            followed,
            size,
            json,
        }) => {
            RepoListCommand {
                username,
                scope: RepoScope::from_flags(owned, followed),
                size,
                json,
            }
            .execute(context)
            .await
        }
        Commands::Repo(RepoCommands::Workflow { repo_path, json }) => {
            RepoWorkflowCommand { repo_path, json }
                .execute(context)
                .await
        }
        Commands::Pr(PrCommands::Author {
            username,
            size,
            json,
        }) => {
            PrAuthorCommand {
                username,
                size,
                json,
            }
            .execute(context)
            .await
        }
        Commands::Pr(PrCommands::Repo {
            repo_path,
            status,
            size,
            json,
        }) => {
            PrRepoCommand {
                repo_path,
                status,
                size,
                json,
            }
            .execute(context)
            .await
        }
        Commands::Completions { .. } => {
            unreachable!("Completions are handled in run() before config is loaded")
        }
    }
}
