/// Generates `get_<entity>` and `delete_<entity>` on a client wrapping a `ResourceClient`.
#[macro_export]
macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident) => {
        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $entity_name_snake>](&self, id: String) -> Result<Option<$entity>, $error> {
                    tracing::debug!("Sending request");
                    self.inner.get(id).await.map_err(<$error>::from)
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<delete_ $entity_name_snake>](&self, id: String) -> Result<(), $error> {
                    tracing::debug!("Sending request");
                    self.inner.delete(id).await.map_err(<$error>::from)
                }
            }
        }
    };
}

#[macro_export]
macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: $crate::actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

/// Maps framework failures onto an entity error enum that has `NotFound`,
/// `ValidationError` and `ActorCommunicationError` variants.
#[macro_export]
macro_rules! impl_framework_error {
    ($error:ty) => {
        impl From<$crate::actor_framework::FrameworkError> for $error {
            fn from(e: $crate::actor_framework::FrameworkError) -> Self {
                use $crate::actor_framework::FrameworkError;
                match e {
                    FrameworkError::NotFound(id) => Self::NotFound(id),
                    FrameworkError::Rejected(reason) => Self::ValidationError(reason),
                    other => Self::ActorCommunicationError(other.to_string()),
                }
            }
        }
    };
}

#[macro_export]
macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident) => {
        $crate::impl_client_new!($client_name, $entity);
        $crate::impl_framework_error!($error);
        $crate::impl_client_methods!($client_name, $entity, $error, $entity_name_snake);
    };
}
