//! Character sets that short codes are drawn from.

use std::fmt;
use std::str::FromStr;

/// Upper bound on the length of any code accepted on the resolve path.
pub const MAX_CODE_LENGTH: usize = 64;

const BASE62: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const HEX: &[u8] = b"0123456789abcdef";

/// The fixed alphabet for generated short codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// `0-9A-Za-z`
    #[default]
    Base62,
    /// `0-9a-f`
    Hex,
}

/// Returned when an alphabet name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown code alphabet '{0}', expected 'base62' or 'hex'")]
pub struct ParseAlphabetError(String);

/// Why a code was rejected by [`Alphabet::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeFormatError {
    #[error("code is empty")]
    Empty,
    #[error("code is {0} characters long, maximum is {max}", max = MAX_CODE_LENGTH)]
    TooLong(usize),
    #[error("code contains characters outside the {0} alphabet")]
    ForeignCharacter(Alphabet),
}

impl Alphabet {
    /// Returns the characters of the alphabet as ASCII bytes.
    pub fn chars(&self) -> &'static [u8] {
        match self {
            Self::Base62 => BASE62,
            Self::Hex => HEX,
        }
    }

    pub fn len(&self) -> usize {
        self.chars().len()
    }

    pub fn contains(&self, c: char) -> bool {
        match self {
            Self::Base62 => c.is_ascii_alphanumeric(),
            Self::Hex => c.is_ascii_digit() || ('a'..='f').contains(&c),
        }
    }

    /// Bits of entropy carried by a uniformly random code of `length` characters.
    pub fn entropy_bits(&self, length: usize) -> f64 {
        (self.len() as f64).log2() * length as f64
    }

    /// Checks that `code` could have been produced from this alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`CodeFormatError`] for empty codes, codes longer than
    /// [`MAX_CODE_LENGTH`], and codes containing foreign characters.
    pub fn validate(&self, code: &str) -> Result<(), CodeFormatError> {
        if code.is_empty() {
            return Err(CodeFormatError::Empty);
        }

        if code.len() > MAX_CODE_LENGTH {
            return Err(CodeFormatError::TooLong(code.len()));
        }

        if !code.chars().all(|c| self.contains(c)) {
            return Err(CodeFormatError::ForeignCharacter(*self));
        }

        Ok(())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base62 => f.write_str("base62"),
            Self::Hex => f.write_str("hex"),
        }
    }
}

impl FromStr for Alphabet {
    type Err = ParseAlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base62" => Ok(Self::Base62),
            "hex" => Ok(Self::Hex),
            _ => Err(ParseAlphabetError(s.to_string())),
        }
    }
}
