//! olaweb crate entrypoint.
//!
//! Starts the Tokio runtime and launches the greeting server defined in the
//! `server` module. Keep this file minimal; the application logic lives in
//! `server` and `config`.
//!
/// HTTP server implementation and request handling
mod server;
/// Configuration management and settings
mod config;

/// Entry point for the async Tokio runtime
///
/// A startup failure (the listener could not bind) is fatal: the error is
/// logged to stderr and the process exits non-zero. Signal-initiated
/// shutdown returns cleanly and exits zero.
#[tokio::main]
async fn main() {
    if let Err(e) = server::run().await {
        eprintln!("❌ Server failed to start: {}", e);
        std::process::exit(1);
    }
}
