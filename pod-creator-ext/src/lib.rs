pub use k8s_openapi::api::core::v1 as corev1;
pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;

pub trait ObjectMetaExt {
    fn new(name: impl ToString) -> Self;
    fn with_namespace(name: impl ToString, namespace: impl ToString) -> Self;
}

impl ObjectMetaExt for metav1::ObjectMeta {
    fn new(name: impl ToString) -> Self {
        let name = Some(name.to_string());
        Self { name, ..default() }
    }

    fn with_namespace(name: impl ToString, namespace: impl ToString) -> Self {
        Self {
            namespace: Some(namespace.to_string()),
            ..Self::new(name)
        }
    }
}

pub trait ContainerExt {
    fn new(name: impl ToString, image: impl ToString) -> Self;
}

impl ContainerExt for corev1::Container {
    fn new(name: impl ToString, image: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            image: Some(image.to_string()),
            ..default()
        }
    }
}

pub trait PodExt {
    /// Build a pod running a single container.
    ///
    /// The pod and its only container share `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pod_creator_ext::{corev1, PodExt as _};
    ///
    /// let pod = corev1::Pod::single_container("web", "nginx:latest", "default");
    /// assert_eq!(pod.metadata.name.as_deref(), Some("web"));
    /// ```
    fn single_container(
        name: impl ToString,
        image: impl ToString,
        namespace: impl ToString,
    ) -> Self;
}

impl PodExt for corev1::Pod {
    fn single_container(
        name: impl ToString,
        image: impl ToString,
        namespace: impl ToString,
    ) -> Self {
        let name = name.to_string();
        let metadata = metav1::ObjectMeta::with_namespace(&name, namespace);
        let container = corev1::Container::new(&name, image);
        let spec = corev1::PodSpec {
            containers: vec![container],
            ..default()
        };
        Self {
            metadata,
            spec: Some(spec),
            ..default()
        }
    }
}

pub fn default<T: Default>() -> T {
    T::default()
}
