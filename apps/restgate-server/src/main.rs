//! Restgate demo server.
//!
//! Hosts the pet-store resource at `/pets` over plain HTTP, translating
//! each request into a proxy event and dispatching it through the engine.
//!
//! # Usage
//!
//! ```text
//! LISTEN_ADDR=0.0.0.0:8080 restgate-server
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LISTEN_ADDR` | `127.0.0.1:8080` | Bind address |
//! | `RUST_LOG` | `info` | Tracing filter |

mod pets;
mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as HttpConnBuilder;
use tokio::net::TcpListener;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber from `RUST_LOG`, defaulting to `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let addr: SocketAddr = std::env::var("LISTEN_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_owned())
        .parse()
        .context("invalid LISTEN_ADDR")?;

    let resource = Arc::new(pets::pets_resource());

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, resource = service::PETS_RESOURCE, "restgate demo server listening");

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(accepted) => accepted,
                    Err(error) => {
                        error!(error = %error, "failed to accept connection");
                        continue;
                    }
                };
                let resource = Arc::clone(&resource);
                tokio::spawn(async move {
                    let io = TokioIo::new(stream);
                    let handler = hyper::service::service_fn(move |request| {
                        let resource = Arc::clone(&resource);
                        async move { service::serve(request, &resource).await }
                    });
                    if let Err(error) = HttpConnBuilder::new(TokioExecutor::new())
                        .serve_connection(io, handler)
                        .await
                    {
                        debug!(%peer, error = %error, "connection closed with error");
                    }
                });
            }
            _ = &mut shutdown => {
                info!("shutdown signal received");
                break;
            }
        }
    }

    Ok(())
}
