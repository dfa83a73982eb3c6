//! Greeting web server module for olaweb.
//!
//! Builds the router for the single greeting route, wraps it in a
//! panic-to-500 boundary, binds the listener on all interfaces and serves
//! until a shutdown signal arrives. The route table is constructed
//! explicitly in `app` so it can be exercised in tests without touching
//! process-global state.
//!
use std::any::Any;

use axum::{
    Router,
    http::{Response, StatusCode, header},
    routing::{any, get},
};
use bytes::Bytes;
use http_body_util::Full;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;

use crate::config::{CONFIG, Config};

/// Greeting text served on the root route
const GREETING: &str = "Olá Mundo";

/// Start the greeting server and run until shutdown
///
/// Binding the listener is the only fallible step; a bind failure (port in
/// use, permission denied) propagates to the caller and is never retried.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("0.0.0.0:{}", CONFIG.port);
    let listener = TcpListener::bind(&addr).await?;

    println!("🚀 Greeting service listening on {}", addr);
    if CONFIG.debug {
        println!("🐛 Debug mode enabled, panic details will be sent to callers");
    }

    axum::serve(listener, app(&CONFIG))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("🛑 Server stopped");
    Ok(())
}

/// Build the application router
///
/// Only the root route is registered; requests to any other path fall
/// through to the framework's 404 fallback. By default the route answers
/// every HTTP method; `get_only` narrows it to GET, in which case other
/// methods on `/` receive the standard 405 response.
pub(crate) fn app(config: &Config) -> Router {
    let route = if config.get_only {
        get(greeting)
    } else {
        any(greeting)
    };

    let debug = config.debug;
    Router::new().route("/", route).layer(CatchPanicLayer::custom(
        move |err: Box<dyn Any + Send + 'static>| panic_response(debug, &panic_detail(err)),
    ))
}

/// Serve the greeting
async fn greeting() -> &'static str {
    GREETING
}

/// Extract a printable message from a panic payload
fn panic_detail(err: Box<dyn Any + Send + 'static>) -> String {
    if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    }
}

/// Build the 500 response for a panicking handler
///
/// The panic message always goes to stderr; it reaches the response body
/// only in debug mode so callers never see internals otherwise.
fn panic_response(debug: bool, detail: &str) -> Response<Full<Bytes>> {
    eprintln!("💥 Handler panicked: {}", detail);

    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Full::from(panic_body(debug, detail)))
        .unwrap()
}

/// Choose the 500 response body text
fn panic_body(debug: bool, detail: &str) -> String {
    if debug {
        format!("Internal Server Error: {}", detail)
    } else {
        "Internal Server Error".to_string()
    }
}

/// Resolve when a shutdown signal arrives (Ctrl+C, or SIGTERM on unix)
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
        _ = ctrl_c => println!("🛑 Received Ctrl+C, shutting down..."),
        _ = terminate => println!("🛑 Received SIGTERM, shutting down..."),
    }
}
