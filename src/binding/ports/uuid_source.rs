//! UUID generation port used by id-assigning transformers.

use crate::binding::error::TransformResult;
use uuid::Uuid;

/// Port for UUID generation.
///
/// Injected into [`crate::binding::transformer::SetUuid`] so tests can
/// substitute deterministic or failing sources without touching global
/// state.
#[cfg_attr(test, mockall::automock)]
pub trait UuidSource: Send + Sync {
    /// Returns a fresh UUID.
    ///
    /// # Errors
    ///
    /// Returns [`crate::binding::error::TransformError`] when the source
    /// cannot produce an identifier.
    fn generate(&self) -> TransformResult<Uuid>;
}

/// Random version 4 UUIDs.
///
/// # Examples
///
/// ```
/// use event_binding::binding::ports::{RandomUuidSource, UuidSource};
///
/// let id = RandomUuidSource.generate().expect("random source never fails");
/// assert_eq!(id.get_version_num(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUuidSource;

impl UuidSource for RandomUuidSource {
    fn generate(&self) -> TransformResult<Uuid> {
        Ok(Uuid::new_v4())
    }
}
