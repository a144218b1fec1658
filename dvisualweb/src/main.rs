use std::{thread, time::Duration};

use api::upload::post_files;
use args::parse_args;
use asset::static_handler;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use dvisual_core::controller::UPLOAD_PATH;
use index::index;
use tracing::{debug, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

mod api;
mod args;
mod asset;
mod components;
mod error;
mod index;
mod views;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    configure_tracing();

    let args = parse_args();
    debug!("{:?}", &args);

    let app = app(args.max_upload_bytes());

    // Bind to the requested port, or a random one if none was given.
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port.unwrap_or(0))).await?;
    let addr = listener.local_addr()?;
    let url = format!("http://localhost:{}", addr.port());
    info!("Listening on {url}");

    if args.auto_open {
        // Give axum a moment to start before the browser connects.
        thread::spawn(|| {
            thread::sleep(Duration::from_secs_f32(0.5));
            // Ignore any errors, this is a "nice-to-have" anyway.
            let _ = opener::open_browser(url);
        });
    }

    // We block here. Closing the browser window does
    // not shut down the app, Ctrl-C does.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shut down");
    Ok(())
}

/// The page, the upload endpoint and the embedded assets.
fn app(max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(index))
        .route(UPLOAD_PATH, post(post_files))
        .route("/assets/*file", get(static_handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler we just run until killed.
        std::future::pending::<()>().await;
    }
}

fn configure_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE) // Makes #[instrument] output something
        .with_env_filter(filter)
        .init();
}
