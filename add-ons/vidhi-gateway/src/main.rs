//! Axum-based gateway for the Vidhi legal assistant. Config-driven via CoreConfig.
//!
//! Routes: `GET /` landing page, `POST /ask`, `GET /health`, `GET /v1/status`.
//! Run with `--verify` for a pre-flight check that loads the knowledge base and checks that the port is bindable.

mod error;
mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vidhi_core::{CoreConfig, KnowledgeBase, Language};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Pre-flight check: config parses, knowledge base loads and validates, port is free.
fn run_verify() -> Result<(), String> {
    let config = CoreConfig::load().map_err(|e| format!("Config load failed: {}", e))?;

    print!("Checking knowledge base {}... ", config.knowledge_path);
    let kb = KnowledgeBase::load(&config.knowledge_path)
        .map_err(|e| format!("knowledge base unusable: {}", e))?;
    println!("OK ({} cases)", kb.len());
    for language in Language::all() {
        println!(
            "  {} ({}): {} of {} cases answered",
            language.label(),
            language.code(),
            kb.coverage(language),
            kb.len()
        );
    }

    let index_file = frontend_root_dir(&config.frontend_dir).join("index.html");
    print!("Checking landing page {}... ", index_file.display());
    if index_file.exists() {
        println!("OK");
    } else {
        println!("MISSING (GET / will return 404)");
    }

    let addr = config.socket_addr();
    print!("Checking port {}... ", config.port);
    match std::net::TcpListener::bind(addr) {
        Ok(listener) => {
            drop(listener);
            println!("OK (available)");
        }
        Err(e) => {
            return Err(format!("Port {} BLOCKED: {}", config.port, e));
        }
    }

    println!("\nSUCCESS: ready to start gateway.");
    Ok(())
}

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[vidhi-gateway] .env not loaded: {} (using system environment)", e);
    }

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--verify") {
        match run_verify() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("PRE-FLIGHT FAILED: {}", e);
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = serve().await {
        tracing::error!(error = %e, "Gateway failed");
        std::process::exit(1);
    }
}

async fn serve() -> Result<(), BoxError> {
    let config = Arc::new(CoreConfig::load()?);
    let knowledge = Arc::new(KnowledgeBase::load(&config.knowledge_path)?);
    if knowledge.is_empty() {
        tracing::warn!("Knowledge base has no cases; every question gets the default message");
    }

    let app = build_app(AppState {
        config: Arc::clone(&config),
        knowledge,
    });

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("{} listening on {}", config.app_name, addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Gateway stopped");
    Ok(())
}

/// Resolves after Ctrl+C or (on unix) SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Ctrl+C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutdown signal received, finishing in-flight requests");
}

fn frontend_root_dir(configured: &str) -> PathBuf {
    // Prefer the configured path (absolute or relative to the working directory).
    // Fall back to the workspace root, from add-ons/vidhi-gateway: manifest -> .. -> ..
    let configured_path = PathBuf::from(configured);
    if configured_path.is_absolute() || configured_path.exists() {
        return configured_path;
    }

    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join(configured)
}

fn build_app(state: AppState) -> Router {
    let index_file = frontend_root_dir(&state.config.frontend_dir).join("index.html");

    let app = Router::new()
        .route("/ask", post(handlers::ask))
        .route("/health", get(handlers::health))
        .route("/v1/status", get(handlers::status))
        .route_service("/", ServeFile::new(index_file))
        .with_state(state);

    with_request_boundary(app)
}

/// Request tracing plus panic isolation: a panicking handler yields a 500 for that request only.
fn with_request_boundary(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<CoreConfig>,
    pub(crate) knowledge: Arc<KnowledgeBase>,
}
