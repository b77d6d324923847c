//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - The [`entities::ShortLink`] record
//! - [`alphabet`] - Character sets for short codes and code validation
//! - [`code_generator`] - The [`code_generator::CodeGenerator`] contract
//! - [`repositories`] - The mapping store contract
//! - [`errors`] - Error taxonomy for store, generator and services
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Orchestration lives in [`crate::application::services`].

pub mod alphabet;
pub mod code_generator;
pub mod entities;
pub mod errors;
pub mod repositories;

pub use alphabet::Alphabet;
pub use code_generator::CodeGenerator;
pub use errors::{GeneratorError, ResolveError, ShortenError, StoreError};

#[cfg(test)]
pub use code_generator::MockCodeGenerator;
