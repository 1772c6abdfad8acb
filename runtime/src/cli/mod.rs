//! Command-line surface for the `seo-audit-api` binary.

pub mod audit_cmd;
pub mod output;
pub mod serve_cmd;

use crate::config::{ServiceConfig, DEFAULT_GEO_API_URL, DEFAULT_USER_AGENT};
use clap::{Args, Parser, Subcommand};
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "seo-audit-api", version, about = "On-page SEO audit service")]
pub struct Cli {
    #[command(flatten)]
    pub service: ServiceArgs,

    /// Emit logs as JSON lines.
    #[arg(long, global = true, env = "SEO_AUDIT_LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API (default).
    Serve,
    /// Audit a single URL and print the report.
    Audit {
        /// Page to audit; `https://` is assumed when no scheme is given.
        url: String,
        /// Print the raw JSON report.
        #[arg(long)]
        json: bool,
    },
}

/// Settings shared by every subcommand.
#[derive(Debug, Args)]
pub struct ServiceArgs {
    #[arg(long, env = "SEO_AUDIT_HOST", default_value = "0.0.0.0", global = true)]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = crate::config::DEFAULT_PORT, global = true)]
    pub port: u16,

    #[arg(
        long,
        env = "SEO_AUDIT_FETCH_TIMEOUT_SECS",
        default_value_t = crate::config::DEFAULT_FETCH_TIMEOUT_SECS,
        global = true
    )]
    pub fetch_timeout_secs: u64,

    #[arg(long, env = "SEO_AUDIT_USER_AGENT", default_value = DEFAULT_USER_AGENT, global = true)]
    pub user_agent: String,

    /// Skip TLS certificate validation when fetching audited pages.
    ///
    /// Needed to audit sites with broken certificates. Weakens transport
    /// security for every page fetch.
    #[arg(long, env = "SEO_AUDIT_ACCEPT_INVALID_CERTS", global = true)]
    pub accept_invalid_certs: bool,

    #[arg(long, env = "SEO_AUDIT_GEO_API_URL", default_value = DEFAULT_GEO_API_URL, global = true)]
    pub geo_api_url: String,
}

impl ServiceArgs {
    pub fn to_config(&self) -> ServiceConfig {
        ServiceConfig {
            host: self.host.clone(),
            port: self.port,
            fetch_timeout: Duration::from_secs(self.fetch_timeout_secs),
            user_agent: self.user_agent.clone(),
            accept_invalid_certs: self.accept_invalid_certs,
            geo_api_url: self.geo_api_url.clone(),
        }
    }
}
