//! Binary-token scanner shared by the builder and the interpreter
//!
//! A binary token is every `0`/`1` found before a stop character, read as an
//! unsigned binary number. Anything else in between is noise and is skipped.

use thiserror::Error;

/// Result of a successful scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Decoded value, 0 when no binary digits preceded the stop character
    pub value: u64,
    /// Characters consumed, including the stop character
    pub consumed: usize,
}

/// Scanner failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The stop character never appears. Callers stop where they are.
    #[error("binary token never terminated by '{stop}'")]
    MalformedToken { stop: char },
    /// A well-formed token whose value needs more than 64 bits. `consumed`
    /// counts the stop character, so callers can step past the token.
    #[error("binary token terminated by '{stop}' does not fit in 64 bits")]
    Overflow { stop: char, consumed: usize },
}

/// Scan a binary token from the start of `text`, up to and including `stop`.
pub fn scan_binary(text: &[char], stop: char) -> Result<Token, ScanError> {
    let mut value: u64 = 0;
    let mut overflowed = false;

    for (i, &ch) in text.iter().enumerate() {
        match ch {
            '0' | '1' => {
                let bit = u64::from(ch == '1');
                // Leading zeros never overflow; only a set bit shifted out does
                if value.leading_zeros() == 0 {
                    overflowed = true;
                }
                value = (value << 1) | bit;
            }
            c if c == stop => {
                if overflowed {
                    return Err(ScanError::Overflow {
                        stop,
                        consumed: i + 1,
                    });
                }
                return Ok(Token {
                    value,
                    consumed: i + 1,
                });
            }
            _ => {}
        }
    }

    Err(ScanError::MalformedToken { stop })
}
