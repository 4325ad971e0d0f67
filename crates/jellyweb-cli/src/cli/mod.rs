//! CLI for the JellyBot web UI actions.

mod commands;
mod console;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use jellyweb_core::config;

use commands::{
    run_completions, run_detach, run_man, run_param, run_params, run_redirect, run_sign_in,
    run_star,
};

/// Top-level CLI for the JellyBot web UI.
#[derive(Debug, Parser)]
#[command(name = "jellyweb")]
#[command(about = "JellyBot web UI: query parameters, sign-in and channel actions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print every query parameter of a URL.
    Params {
        url: String,
        /// Print as a JSON object.
        #[arg(long)]
        json: bool,
    },

    /// Print one query parameter of a URL, or the default.
    Param {
        url: String,
        name: String,
        /// Value to print when the parameter is absent.
        #[arg(long, default_value = "")]
        default: String,
        /// Check parsed keys instead of substring presence.
        #[arg(long)]
        structural: bool,
    },

    /// Print the post-login redirect target for a URL.
    Redirect {
        url: String,
        /// Target when `next` is missing or empty (config default_redirect if omitted).
        #[arg(long)]
        default: Option<String>,
        /// Check parsed keys instead of substring presence.
        #[arg(long)]
        structural: bool,
    },

    /// Post an ID token to a login page and follow the redirect rule.
    SignIn {
        /// Full URL of the login page (query string included).
        #[arg(long)]
        page_url: String,
        /// ID token from the identity provider.
        #[arg(long)]
        token: String,
        /// Anti-forgery token from the login form.
        #[arg(long)]
        csrf: String,
        /// Target when `next` is missing or empty (config default_redirect if omitted).
        #[arg(long)]
        default: Option<String>,
    },

    /// Star (or unstar) a channel.
    Star {
        /// Channel identifier.
        channel_id: String,
        /// Remove the star instead of adding it.
        #[arg(long)]
        off: bool,
        /// Anti-forgery token to send.
        #[arg(long)]
        csrf: Option<String>,
    },

    /// Detach a profile from a channel (asks for confirmation).
    Detach {
        profile_owner_id: String,
        channel_owner_id: String,
        /// Profile name shown in the confirmation prompt.
        profile_name: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
        /// Anti-forgery token to send.
        #[arg(long)]
        csrf: Option<String>,
    },

    /// Print shell completions.
    Completions {
        shell: Shell,
    },

    /// Print the man page.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Params { url, json } => run_params(&url, json)?,
            CliCommand::Param {
                url,
                name,
                default,
                structural,
            } => run_param(&cfg, &url, &name, &default, structural),
            CliCommand::Redirect {
                url,
                default,
                structural,
            } => run_redirect(&cfg, &url, default.as_deref(), structural),
            CliCommand::SignIn {
                page_url,
                token,
                csrf,
                default,
            } => run_sign_in(&cfg, &page_url, &token, &csrf, default.as_deref())?,
            CliCommand::Star {
                channel_id,
                off,
                csrf,
            } => run_star(&cfg, &channel_id, !off, csrf.as_deref())?,
            CliCommand::Detach {
                profile_owner_id,
                channel_owner_id,
                profile_name,
                yes,
                csrf,
            } => run_detach(
                &cfg,
                &profile_owner_id,
                &channel_owner_id,
                &profile_name,
                yes,
                csrf.as_deref(),
            )?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
