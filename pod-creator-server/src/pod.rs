use k8s::PodExt as _;

use super::*;

/// Namespace every pod is created in.
pub(crate) const NAMESPACE: &str = "default";

const CREATED: &str = "Pod created successfully";

#[derive(Debug, Deserialize)]
pub(crate) struct PodRequest {
    name: String,
    image: String,
}

impl PodRequest {
    fn validate(self) -> Result<Self, CreatePodError> {
        if self.name.is_empty() {
            Err(CreatePodError::invalid_payload("name must not be empty"))
        } else if self.image.is_empty() {
            Err(CreatePodError::invalid_payload("image must not be empty"))
        } else {
            Ok(self)
        }
    }

    fn pod(&self) -> corev1::Pod {
        corev1::Pod::single_container(&self.name, &self.image, NAMESPACE)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct Created {
    message: &'static str,
}

pub(crate) async fn create_pod(
    State(connector): State<Arc<dyn Connect>>,
    payload: Result<Json<PodRequest>, JsonRejection>,
) -> Result<Json<Created>, CreatePodError> {
    let cluster = connector.connect().await?;

    let Json(request) =
        payload.map_err(|rejection| CreatePodError::invalid_payload(rejection.body_text()))?;
    let request = request.validate()?;

    let nodes = cluster
        .list_nodes()
        .await
        .inspect_err(|err| tracing::error!(?err, "Failed to list nodes"))
        .map_err(|_| CreatePodError::ListNodes)?;
    if nodes.is_empty() {
        tracing::warn!(name = %request.name, "No nodes available, pod not submitted");
        return Err(CreatePodError::NoNodes);
    }

    let pod = request.pod();
    cluster
        .create_pod(NAMESPACE, &pod)
        .await
        .inspect_err(|err| tracing::error!(name = %request.name, ?err, "Failed to create pod"))
        .map_err(|err| CreatePodError::Submit(err.to_string()))?;

    tracing::debug!(
        name = %request.name,
        image = %request.image,
        namespace = NAMESPACE,
        "Pod created"
    );
    Ok(Json(Created { message: CREATED }))
}
