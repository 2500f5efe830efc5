use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

const KUBECONFIG_RELATIVE_PATH: &str = ".kube/config";

#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("no kubeconfig given and HOME is not set")]
    NoHomeDir,
}

/// Command line for pod-creator-server.
#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct Args {
    /// Address to listen on
    #[arg(long, env = "POD_CREATOR_LISTEN", default_value = "0.0.0.0:8080")]
    pub(crate) listen: SocketAddr,

    /// Kubeconfig file used to reach the cluster [default: $HOME/.kube/config]
    #[arg(long, env = "POD_CREATOR_KUBECONFIG")]
    pub(crate) kubeconfig: Option<PathBuf>,
}

impl Args {
    pub(crate) fn kubeconfig_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.kubeconfig {
            Some(path) => Ok(path.clone()),
            None => default_kubeconfig_path(std::env::var_os("HOME").map(PathBuf::from)),
        }
    }
}

fn default_kubeconfig_path(home: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    home.filter(|home| !home.as_os_str().is_empty())
        .map(|home| home.join(KUBECONFIG_RELATIVE_PATH))
        .ok_or(ConfigError::NoHomeDir)
}
