use crate::cipher::Columnar;
use crate::error::Result;

/// A brute-force run that ended in a confirmed ordering: the synthesized
/// key and the plaintext it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovery {
    pub key: String,
    pub plaintext: String,
}

/// One-off interactive brute force of a single ciphertext. Candidate grids
/// go to `confirm`; `None` means the operator rejected every ordering.
pub fn force_message<F>(ciphertext: &str, confirm: F) -> Result<Option<Recovery>>
where
    F: FnMut(&str) -> bool,
{
    let mut engine = Columnar::new();
    let plaintext = engine.force_decode(ciphertext, confirm)?;
    Ok(plaintext.map(|plaintext| Recovery {
        key: engine.key().letters().to_string(),
        plaintext,
    }))
}
