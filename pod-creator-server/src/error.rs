use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use pod_creator_kubeapi::ConnectError;
use serde::Serialize;

/// Every way `POST /create-pod` can fail.
///
/// The display text is what the caller sees in the `error` field.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CreatePodError {
    #[error("Failed to load kubeconfig")]
    LoadKubeconfig,

    #[error("Failed to create kubernetes client")]
    CreateClient,

    #[error("Invalid request payload")]
    InvalidPayload { reason: String },

    #[error("Failed to list nodes")]
    ListNodes,

    #[error("no nodes available in the cluster")]
    NoNodes,

    /// Message reported by the cluster, passed through untouched.
    #[error("{0}")]
    Submit(String),
}

impl CreatePodError {
    pub(crate) fn invalid_payload(reason: impl ToString) -> Self {
        Self::InvalidPayload {
            reason: reason.to_string(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPayload { .. } => StatusCode::BAD_REQUEST,
            Self::LoadKubeconfig
            | Self::CreateClient
            | Self::ListNodes
            | Self::NoNodes
            | Self::Submit(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ConnectError> for CreatePodError {
    fn from(err: ConnectError) -> Self {
        match err {
            ConnectError::Kubeconfig { .. } => Self::LoadKubeconfig,
            ConnectError::Client(_) => Self::CreateClient,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for CreatePodError {
    fn into_response(self) -> Response {
        let code = self.status();
        if let Self::InvalidPayload { reason } = &self {
            tracing::debug!(%reason, "Rejected request payload");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (code, Json(body)).into_response()
    }
}
