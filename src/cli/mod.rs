//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the ghapi binary.

use clap::{Parser, Subcommand};

/// GitHub API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "ghapi", about = "GitHub API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Base URL of the API (for GitHub Enterprise or a mock server).
    #[arg(long, global = true, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the authenticated user, or the named one.
    User {
        /// Login of the user to show.
        login: Option<String>,
    },

    /// Show a single repository.
    Repo {
        /// Repository as `owner/name`.
        repo: String,
    },

    /// List the authenticated user's repositories.
    Repos,

    /// List the latest commits of a repository.
    Commits {
        /// Repository as `owner/name`.
        repo: String,
    },

    /// Show the languages of a repository.
    Languages {
        /// Repository as `owner/name`.
        repo: String,
    },

    /// List the contributors of a repository.
    Contributors {
        /// Repository as `owner/name`.
        repo: String,
    },

    /// Print the net line delta (additions minus deletions) of a repository.
    #[command(name = "code-count")]
    CodeCount {
        /// Repository as `owner/name`.
        repo: String,
    },

    /// Print the README of a repository.
    Readme {
        /// Repository as `owner/name`.
        repo: String,

        /// Render the README to HTML.
        #[arg(long)]
        html: bool,
    },

    /// Show the current rate limit.
    #[command(name = "rate-limit")]
    RateLimit,
}
