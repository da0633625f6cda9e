pub mod event;

/// Opaque bearer credential, resolvable to a subject user id by the auth
/// repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);
