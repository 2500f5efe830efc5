use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::get;
use axum::routing::post;
use clap::Parser as _;
use pod_creator_ext as k8s;
use pod_creator_kubeapi::Connect;
use pod_creator_kubeapi::KubeconfigConnector;
use serde::Deserialize;
use serde::Serialize;
use tower_http::trace::TraceLayer;

use k8s::corev1;

use config::Args;
use error::CreatePodError;

mod config;
mod error;
mod pod;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let kubeconfig = args.kubeconfig_path()?;
    tracing::info!(kubeconfig = %kubeconfig.display(), "Starting pod-creator-server");

    let connector = KubeconfigConnector::new(kubeconfig);
    // Warm the cached client; a failure here is reported again per request.
    if connector.connect().await.is_ok() {
        tracing::info!("Cluster client ready");
    }

    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .inspect_err(|err| tracing::error!(listen = %args.listen, ?err, "Failed to bind"))?;
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Listening on http://{addr}");
    }
    axum::serve(listener, app(Arc::new(connector))).await?;

    Ok(())
}

fn app(connector: Arc<dyn Connect>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/create-pod", post(pod::create_pod))
        .with_state(connector)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}
