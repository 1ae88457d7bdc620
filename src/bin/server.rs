use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    http::{HeaderValue, Method},
};
use axum_server::Handle;
use clap::Parser;
use rusqlite::Connection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pocketbook::{
    AppState, build_router, graceful_shutdown,
    auth::{HttpTokenVerifier, TokenVerifier},
};

/// The HTTP API server for pocketbook.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long)]
    db_path: String,

    /// The identity provider URL used to verify bearer tokens.
    #[arg(long)]
    verify_url: String,

    /// The port to serve the API from.
    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    /// Allow requests without a credential to run as the placeholder
    /// identity instead of being rejected.
    ///
    /// A development affordance only. Never enable this in production.
    #[arg(long, default_value_t = false)]
    allow_anonymous: bool,

    /// The origin allowed to make cross-origin requests, e.g.
    /// "http://localhost:5173". Omit to disallow cross-origin access.
    #[arg(long)]
    cors_origin: Option<String>,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    if args.allow_anonymous {
        tracing::warn!(
            "Anonymous access is enabled: requests without a credential will run as the \
            placeholder identity. Do not use this outside development."
        );
    }

    let connection = Connection::open(&args.db_path).expect("Could not open the database");
    let token_verifier: Arc<dyn TokenVerifier> =
        Arc::new(HttpTokenVerifier::new(&args.verify_url));
    let state = AppState::new(connection, token_verifier, args.allow_anonymous)
        .expect("Could not initialize the database");

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));
    let router = add_cors_layer(router, args.cors_origin.as_deref());

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    tracing::info!("HTTP server listening on {}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .unwrap();
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().pretty())
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
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
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}

fn add_cors_layer(router: Router, origin: Option<&str>) -> Router {
    let Some(origin) = origin else {
        return router;
    };

    let origin: HeaderValue = origin.parse().expect("Invalid CORS origin");
    let cors_layer = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(tower_http::cors::Any);

    router.layer(cors_layer)
}
