//! Coachlink CLI and REST API entry point.
//!
//! Binary name: `coachlink`
//!
//! Loads `.env`, parses CLI arguments, initializes tracing and configuration,
//! then dispatches to the requested command or starts the REST API server.

mod cli;
mod http;
mod state;

use anyhow::Context;
use clap::Parser;
use clap_complete::generate;

use coachlink_infra::config::{load_config, resolve_config_path};
use coachlink_infra::credentials::Credentials;
use coachlink_observe::{init_tracing, shutdown_tracing, LogFormat};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; real environment variables still apply.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    // Shell completions don't need tracing, config or credentials
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "coachlink", &mut std::io::stdout());
        return Ok(());
    }

    init_logging(&cli)?;

    match &dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => tracing::debug!("no .env file found"),
        Err(e) => tracing::warn!(error = %e, "failed to parse .env"),
    }

    let config_path = resolve_config_path(cli.config.as_deref());
    let mut config = load_config(&config_path).await;

    let result = match cli.command {
        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            serve(config).await
        }
        Commands::Token { user_id } => cli::token::issue_token(&config, &user_id, cli.json),
        Commands::Completions { .. } => unreachable!("handled above"),
    };

    shutdown_tracing();
    result
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    init_tracing(cli.log_filter(), format, cli.otel).map_err(|e| anyhow::anyhow!(e))
}

/// Start the REST API server and run until Ctrl+C / SIGTERM.
async fn serve(config: coachlink_types::config::CoachlinkConfig) -> anyhow::Result<()> {
    let credentials = Credentials::from_env().context(
        "missing credentials: set STREAM_API_KEY, STREAM_API_SECRET and OPENAI_API_KEY",
    )?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::init(config, credentials)?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        addr = %addr,
        llm_provider = state.coach_service.provider_name(),
        model = %state.config.coach.model,
        "Coachlink API listening"
    );

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_init_errors_surface_through_anyhow() {
        let cli = Cli::parse_from(["coachlink", "--quiet", "token", "ada"]);
        let _ = init_logging(&cli);
        let err = init_logging(&cli).unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
