use std::fmt::Debug;
use std::path::Path;

use async_trait::async_trait;
use kube::api;
use kube::config::KubeConfigOptions;
use kube::config::Kubeconfig;
use pod_creator_ext as k8s;

use k8s::corev1;

pub use connect::Connect;
pub use connect::KubeconfigConnector;
pub use error::ClusterError;
pub use error::ConnectError;

mod connect;
mod error;

/// Cluster operations needed to place a pod.
#[async_trait]
pub trait Cluster: Send + Sync {
    /// Names of every Node registered with the cluster.
    async fn list_nodes(&self) -> Result<Vec<String>, ClusterError>;

    /// Submit `pod` for creation in `namespace`, returning the object the
    /// API server stored.
    async fn create_pod(
        &self,
        namespace: &str,
        pod: &corev1::Pod,
    ) -> Result<corev1::Pod, ClusterError>;
}

pub struct KubeApi {
    list_params: api::ListParams,
    post_params: api::PostParams,
    client: kube::Client,
}

impl KubeApi {
    /// Create a KubeApi from the kubeconfig file at `path`.
    ///
    /// The file's current context selects the cluster and user. Reading or
    /// resolving the file fails with [`ConnectError::Kubeconfig`]; building
    /// the HTTP client fails with [`ConnectError::Client`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn run() -> Result<(), pod_creator_kubeapi::ConnectError> {
    /// let _api = pod_creator_kubeapi::KubeApi::from_kubeconfig("/home/me/.kube/config").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn from_kubeconfig(path: impl AsRef<Path>) -> Result<Self, ConnectError> {
        let path = path.as_ref();
        let kubeconfig_error = |source| ConnectError::Kubeconfig {
            path: path.to_path_buf(),
            source,
        };
        let kubeconfig = Kubeconfig::read_from(path).map_err(kubeconfig_error)?;
        let options = KubeConfigOptions::default();
        let config = kube::Config::from_custom_kubeconfig(kubeconfig, &options)
            .await
            .map_err(kubeconfig_error)?;
        kube::Client::try_from(config)
            .map(Self::with_client)
            .map_err(ConnectError::Client)
    }

    /// Create a KubeApi backed by the provided Kubernetes client.
    pub fn with_client(client: kube::Client) -> Self {
        Self {
            list_params: api::ListParams::default(),
            post_params: api::PostParams::default(),
            client,
        }
    }

    fn nodes(&self) -> api::Api<corev1::Node> {
        api::Api::all(self.client.clone())
    }

    fn pods(&self, namespace: &str) -> api::Api<corev1::Pod> {
        api::Api::namespaced(self.client.clone(), namespace)
    }
}

#[async_trait]
impl Cluster for KubeApi {
    async fn list_nodes(&self) -> Result<Vec<String>, ClusterError> {
        let list = self.nodes().list_metadata(&self.list_params).await?;
        let names = list
            .items
            .into_iter()
            .filter_map(|node| node.metadata.name)
            .collect();
        Ok(names)
    }

    async fn create_pod(
        &self,
        namespace: &str,
        pod: &corev1::Pod,
    ) -> Result<corev1::Pod, ClusterError> {
        let pod = self.pods(namespace).create(&self.post_params, pod).await?;
        Ok(pod)
    }
}

impl Debug for KubeApi {
    /// Formats the `KubeApi` for debugging, redacting the `client`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeApi")
            .field("list_params", &self.list_params)
            .field("post_params", &self.post_params)
            .field("client", &"<kube::Client>")
            .finish()
    }
}
