//! codementor REST API entry point.
//!
//! Binary name: `codementor`
//!
//! Startup is an explicit fail-fast phase: configuration is loaded and
//! the model is resolved before the listener binds. Serving without a
//! usable model is strictly worse than refusing to start.

mod http;
mod state;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use codementor_core::llm::provider::GenerativeProvider;
use codementor_core::llm::resolve::resolve_model;
use codementor_infra::config::Config;
use codementor_infra::llm::gemini::GeminiProvider;
use state::AppState;

/// Chat relay between a browser UI and the Gemini API.
#[derive(Debug, Parser)]
#[command(name = "codementor", version)]
struct Cli {
    /// Address to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,codementor=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Fatal before any socket opens: no API key, no service.
    let config = Config::from_env()?;

    let provider = GeminiProvider::new(config.api_key);

    let model = match resolve_model(config.model_override.as_deref(), &provider).await {
        Some(model) => model,
        None => {
            // Dump whatever the listing returns so a misconfigured key
            // or account is diagnosable from the logs.
            let available = provider
                .list_models()
                .await
                .map(|models| models.into_iter().map(|m| m.name).collect::<Vec<_>>())
                .unwrap_or_default();
            tracing::error!(
                ?available,
                "no usable model found; check the API key and model access"
            );
            anyhow::bail!("model resolution failed");
        }
    };
    tracing::info!(%model, "model ready");

    let state = AppState::new(provider, model);
    let router = http::router::build_router(state);

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "codementor listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
