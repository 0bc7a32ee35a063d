pub mod settings;
pub mod toml_config;

pub use settings::{Settings, DEFAULT_BACKEND_URL};

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "portfolio")]
#[command(about = "Render the portfolio page and send contact messages")]
pub struct CliConfig {
    /// Backend origin serving /projects, /packages, /articles and /contact
    #[arg(long, env = "PORTFOLIO_BACKEND_URL", global = true)]
    pub backend_url: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// Load the showcase and print the page
    Show {
        /// Skip the backend and print the built-in content
        #[arg(long)]
        offline: bool,
    },
    /// Send one message through the contact form
    Contact {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        remarks: String,
    },
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_contact_command() {
        let config = CliConfig::try_parse_from([
            "portfolio",
            "--backend-url",
            "https://api.example.com",
            "contact",
            "--name",
            "Ana",
            "--email",
            "ana@test.com",
            "--remarks",
            "Hi",
        ])
        .unwrap();

        assert_eq!(config.backend_url.as_deref(), Some("https://api.example.com"));
        match config.command {
            Command::Contact {
                name,
                phone,
                email,
                remarks,
            } => {
                assert_eq!(name, "Ana");
                assert_eq!(phone, "");
                assert_eq!(email, "ana@test.com");
                assert_eq!(remarks, "Hi");
            }
            other => panic!("expected contact command, got {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let config =
            CliConfig::try_parse_from(["portfolio", "show", "--offline", "--timeout-seconds", "3", "-v"])
                .unwrap();

        assert_eq!(config.timeout_seconds, Some(3));
        assert!(config.verbose);
        assert!(matches!(config.command, Command::Show { offline: true }));
    }
}
