use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScytaleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid key {0:?}: keys must be alphabetic (no numbers or symbols)")]
    InvalidKey(String),

    #[error("Key is required to encode or decode")]
    MissingKey,

    #[error("Ciphertext has {found} column blocks, key expects {expected}")]
    BlockCount { expected: usize, found: usize },

    #[error("Malformed record on line {line}: expected key:passes:message")]
    InvalidRecord { line: usize },
}

pub type Result<T> = std::result::Result<T, ScytaleError>;

/// Non-fatal conditions raised during encoding. The operation still
/// succeeds; callers decide whether and how to surface these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The sanitized message contains characters outside the alphabet.
    /// Transposition leaks their positions, narrowing the search space
    /// for an attacker.
    NonAlphabetic,
    /// The ciphertext equals the plaintext after sanitization: the column
    /// permutation cycled back to the identity at this pass count.
    Collision { passes: usize },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::NonAlphabetic => {
                write!(f, "message is not alphabetic, may be easier to decode")
            }
            Warning::Collision { passes } => {
                write!(f, "collision occurred at pass count {}", passes)
            }
        }
    }
}
