use anyhow::Result;
use clap::Parser;
use seo_audit::cli::{audit_cmd, serve_cmd, Cli, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = cli.service.to_config();

    match cli.command {
        None | Some(Command::Serve) => serve_cmd::run(&config).await,
        Some(Command::Audit { url, json }) => audit_cmd::run(&config, &url, json).await,
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("seo_audit=info,seo_audit_api=info,tower_http=info")
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
