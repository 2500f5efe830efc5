use std::path::PathBuf;

use kube::config::KubeconfigError;

/// Failure reported by the cluster while serving a request.
#[derive(Debug, thiserror::Error)]
pub enum ClusterError {
    /// The API server answered with a failure status; holds its message.
    #[error("{0}")]
    Api(String),

    #[error(transparent)]
    Kube(kube::Error),
}

impl From<kube::Error> for ClusterError {
    fn from(err: kube::Error) -> Self {
        match err {
            kube::Error::Api(status) => Self::Api(status.message.clone()),
            other => Self::Kube(other),
        }
    }
}

/// Failure to obtain a cluster client from local credentials.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("failed to load kubeconfig from {}", path.display())]
    Kubeconfig {
        path: PathBuf,
        #[source]
        source: KubeconfigError,
    },

    #[error("failed to create kubernetes client")]
    Client(#[source] kube::Error),
}
