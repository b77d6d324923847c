//! Short code generators.
//!
//! [`RandomCodeGenerator`] is the default: every call is an independent
//! uniform draw, so codes neither reveal nor depend on the URL.
//! [`DigestCodeGenerator`] derives codes from a SHA-256 of the URL and the
//! attempt counter. Its codes are reproducible and therefore guessable for
//! anyone who knows the URL; it is only available as an explicit opt-in.

use crate::domain::alphabet::Alphabet;
use crate::domain::code_generator::CodeGenerator;
use crate::domain::errors::GeneratorError;
use rand::Rng;
use sha2::{Digest, Sha256};

/// Default code length.
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// Generates codes of fixed length from a CSPRNG.
///
/// Uses the thread-local `rand` generator, which is seeded from the OS and
/// periodically reseeded.
///
/// # Examples
///
/// ```ignore
/// let generator = RandomCodeGenerator::new(Alphabet::Base62, 8);
/// let code = generator.generate("https://example.com", 0)?;
/// assert_eq!(code.len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    alphabet: Alphabet,
    length: usize,
}

impl RandomCodeGenerator {
    pub fn new(alphabet: Alphabet, length: usize) -> Self {
        Self { alphabet, length }
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(Alphabet::Base62, DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self, _long_url: &str, _attempt: u32) -> Result<String, GeneratorError> {
        let chars = self.alphabet.chars();
        let mut rng = rand::rng();

        Ok(std::iter::repeat_with(|| chars[rng.random_range(0..chars.len())] as char)
            .take(self.length)
            .collect())
    }
}

/// Generates codes from `SHA-256(long_url ‖ 0x00 ‖ attempt ‖ block)`.
///
/// The attempt counter is part of the hash input, so a retry after a
/// collision yields a new candidate for the same URL.
#[derive(Debug, Clone)]
pub struct DigestCodeGenerator {
    alphabet: Alphabet,
    length: usize,
}

impl DigestCodeGenerator {
    pub fn new(alphabet: Alphabet, length: usize) -> Self {
        Self { alphabet, length }
    }

    /// Endless digest output: block `n` is `SHA-256(long_url ‖ 0x00 ‖ attempt ‖ n)`.
    fn digest_stream(long_url: &str, attempt: u32) -> impl Iterator<Item = u8> + '_ {
        (0u32..).flat_map(move |block| {
            let mut hasher = Sha256::new();
            hasher.update(long_url.as_bytes());
            hasher.update([0u8]);
            hasher.update(attempt.to_be_bytes());
            hasher.update(block.to_be_bytes());
            let bytes: [u8; 32] = hasher.finalize().into();
            bytes
        })
    }
}

/// Maps bytes onto `chars` without modulo bias.
///
/// Bytes at or above the largest multiple of the alphabet size are skipped.
fn sample_unbiased(bytes: impl Iterator<Item = u8>, chars: &[u8], length: usize) -> String {
    let limit = 256 - 256 % chars.len();

    bytes
        .map(usize::from)
        .filter(|b| *b < limit)
        .map(|b| chars[b % chars.len()] as char)
        .take(length)
        .collect()
}

impl CodeGenerator for DigestCodeGenerator {
    fn generate(&self, long_url: &str, attempt: u32) -> Result<String, GeneratorError> {
        if long_url.is_empty() {
            return Err(GeneratorError::InvalidInput(
                "long URL cannot be empty".to_string(),
            ));
        }

        let code = match self.alphabet {
            Alphabet::Hex => {
                let bytes: Vec<u8> = Self::digest_stream(long_url, attempt)
                    .take(self.length.div_ceil(2))
                    .collect();
                let mut encoded = hex::encode(bytes);
                encoded.truncate(self.length);
                encoded
            }
            Alphabet::Base62 => sample_unbiased(
                Self::digest_stream(long_url, attempt),
                self.alphabet.chars(),
                self.length,
            ),
        };

        Ok(code)
    }
}
