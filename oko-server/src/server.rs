use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Every path and method answers with the same cached document, so the
/// whole router is a single fallback handler.
pub fn router(payload: Bytes) -> Router {
    Router::new().fallback(serve_feed).with_state(payload)
}

async fn serve_feed(State(payload): State<Bytes>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/xml")], payload)
}

/// Serve the feed until `lifetime` elapses.
///
/// The countdown task cancels a shared token instead of killing the
/// process: the server stops accepting connections, drains whatever is
/// in flight, and `run` returns so the caller can exit cleanly.
pub async fn run(
    listener: TcpListener,
    payload: Bytes,
    lifetime: Duration,
) -> std::io::Result<()> {
    let shutdown = CancellationToken::new();

    let countdown = shutdown.clone();
    tokio::spawn(async move {
        info!(seconds = lifetime.as_secs(), "counting down to exit");
        tokio::time::sleep(lifetime).await;
        info!("countdown elapsed, shutting down");
        countdown.cancel();
    });

    let addr = listener.local_addr()?;
    info!(%addr, "serving feed");
    axum::serve(listener, router(payload))
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
}
