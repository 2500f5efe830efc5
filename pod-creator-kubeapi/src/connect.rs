use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;

use super::*;

/// Source of a ready-to-use [`Cluster`].
#[async_trait]
pub trait Connect: Send + Sync {
    async fn connect(&self) -> Result<Arc<dyn Cluster>, ConnectError>;
}

/// Connects through a kubeconfig file, once.
///
/// The first successful [`connect`](Connect::connect) builds a [`KubeApi`]
/// and every later call reuses it. Failures are not remembered, so a
/// kubeconfig fixed on disk is picked up by the next request.
pub struct KubeconfigConnector {
    path: PathBuf,
    cluster: OnceCell<Arc<KubeApi>>,
}

impl KubeconfigConnector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cluster: OnceCell::new(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.cluster.initialized()
    }
}

#[async_trait]
impl Connect for KubeconfigConnector {
    async fn connect(&self) -> Result<Arc<dyn Cluster>, ConnectError> {
        let kubeapi = self
            .cluster
            .get_or_try_init(|| async {
                let kubeapi = KubeApi::from_kubeconfig(&self.path).await?;
                tracing::info!(path = %self.path.display(), "Connected to cluster");
                Ok::<_, ConnectError>(Arc::new(kubeapi))
            })
            .await
            .inspect_err(|err| tracing::error!(?err, "Failed to connect to cluster"))?;
        let cluster: Arc<dyn Cluster> = kubeapi.clone();
        Ok(cluster)
    }
}

impl Debug for KubeconfigConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KubeconfigConnector")
            .field("path", &self.path)
            .field("connected", &self.is_connected())
            .finish()
    }
}
