//! Code generator contract.

use crate::domain::errors::GeneratorError;

/// Produces candidate short codes.
///
/// Implementations are pure: they never touch storage, so uniqueness is
/// decided by [`crate::domain::repositories::ShortLinkRepository::insert_unique`].
/// `attempt` starts at 0 and grows by one on every collision retry; for a
/// given `long_url`, a later attempt must be able to yield a different
/// candidate than the earlier ones.
///
/// # Implementations
///
/// - [`crate::utils::code_generator::RandomCodeGenerator`] - independent random draws (default)
/// - [`crate::utils::code_generator::DigestCodeGenerator`] - SHA-256 of URL and attempt
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns a candidate code for `long_url` on the given retry `attempt`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidInput`] when the generator needs the
    /// URL and it is empty.
    fn generate(&self, long_url: &str, attempt: u32) -> Result<String, GeneratorError>;
}
