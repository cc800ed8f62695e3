use std::{fs::OpenOptions, net::SocketAddr, process::ExitCode, sync::Arc};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    http::{HeaderValue, header::CONTENT_TYPE},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use rusqlite::Connection;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use homefinance::{AppState, build_router, graceful_shutdown, logging_middleware};

/// The REST API server for homefinance.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long, env = "HOMEFINANCE_DB_PATH")]
    db_path: String,

    /// The port to serve the API from.
    #[arg(short, long, env = "HOMEFINANCE_PORT", default_value_t = 3000)]
    port: u16,

    /// An origin allowed to make cross-origin requests, e.g. the web client.
    ///
    /// Repeat the flag for multiple origins, or use '*' to allow any origin.
    #[arg(
        long = "allowed-origin",
        env = "HOMEFINANCE_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values_t = [
            "http://localhost:3000".to_owned(),
            "http://localhost:5173".to_owned(),
        ]
    )]
    allowed_origins: Vec<String>,

    /// File path for the debug log.
    #[arg(long, default_value = "debug.log")]
    log_file: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = setup_logging(&args.log_file) {
        eprintln!("Could not open log file {}: {error}", args.log_file);
        return ExitCode::FAILURE;
    }

    let connection = match Connection::open(&args.db_path) {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("Could not open database {}: {error}", args.db_path);
            return ExitCode::FAILURE;
        }
    };

    let state = match AppState::new(connection) {
        Ok(state) => state,
        Err(error) => {
            tracing::error!("Could not initialize database {}: {error}", args.db_path);
            return ExitCode::FAILURE;
        }
    };

    let cors_layer = match build_cors_layer(&args.allowed_origins) {
        Ok(layer) => layer,
        Err(origin) => {
            tracing::error!("Invalid allowed origin {origin:?}");
            return ExitCode::FAILURE;
        }
    };

    let router = build_router(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(cors_layer);
    let router = add_tracing_layer(router);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    tracing::info!("HTTP server listening on {}", addr);

    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server error: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn setup_logging(log_file_path: &str) -> std::io::Result<()> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::INFO)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
        .init();

    Ok(())
}

/// Allow the configured origins to call the API with any method and a JSON
/// body. Returns the first origin that is not a valid header value.
fn build_cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, String> {
    let layer = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers([CONTENT_TYPE]);

    if allowed_origins.iter().any(|origin| origin == "*") {
        return Ok(layer.allow_origin(Any));
    }

    let origins = allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>().map_err(|_| origin.clone()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // Errors are logged where they are converted into responses.
        .on_failure(());

    router.layer(tracing_layer)
}
