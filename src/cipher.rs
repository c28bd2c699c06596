use crate::columns::{
    distribute, join_blocks, read_row_major, reorder, resegment, sanitize, split_blocks,
};
use crate::error::{Result, ScytaleError, Warning};
use crate::force::{render_grid, IndexPermutations};
use crate::key::Key;

/// Result of an encode: the ciphertext plus any non-fatal warnings raised
/// along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub ciphertext: String,
    pub warnings: Vec<Warning>,
}

/// The columnar transposition engine.
///
/// Holds exactly one [`Key`] at a time; callers needing independent keys
/// concurrently hold independent engines. Encode and decode are pure
/// functions of the key and their input. Ciphertext is emitted as column
/// blocks joined by single spaces.
#[derive(Debug, Clone)]
pub struct Columnar {
    key: Key,
    collision_check: bool,
}

impl Default for Columnar {
    fn default() -> Self {
        Self::new()
    }
}

impl Columnar {
    /// Engine with no key and collision checking enabled.
    pub fn new() -> Self {
        Self {
            key: Key::none(),
            collision_check: true,
        }
    }

    pub fn with_collision_check(collision_check: bool) -> Self {
        Self {
            key: Key::none(),
            collision_check,
        }
    }

    /// Replace the key. An empty string resets to the "no key" state (the
    /// precondition for brute-forcing); an invalid key leaves the previous
    /// key untouched.
    pub fn set_key(&mut self, raw: &str) -> Result<()> {
        self.key = Key::derive(raw)?;
        Ok(())
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Encode `message`, applying the transposition `passes` times
    /// (minimum 1).
    ///
    /// Each pass sanitizes the current text (removing the separators the
    /// previous pass introduced), distributes it round-robin into columns,
    /// emits the columns in encode order, and joins them with spaces.
    /// Warnings are attached for non-alphabetic content and, when collision
    /// checking is on, for ciphertext that equals the plaintext.
    pub fn encode(&self, message: &str, passes: usize) -> Result<Encoded> {
        if self.key.is_empty() {
            return Err(ScytaleError::MissingKey);
        }

        let mut warnings = Vec::new();
        let original = sanitize(message);
        if !original.chars().all(|c| c.is_ascii_alphabetic()) {
            warnings.push(Warning::NonAlphabetic);
        }

        let passes = passes.max(1);
        let mut message = original.clone();
        for _ in 0..passes {
            let text = sanitize(&message);
            let columns = distribute(&text, self.key.len());
            let emitted = reorder(&columns, self.key.encode_order());
            message = join_blocks(&emitted);
        }

        if self.collision_check && sanitize(&message) == original {
            warnings.push(Warning::Collision { passes });
        }

        Ok(Encoded {
            ciphertext: message,
            warnings,
        })
    }

    /// Decode `message`, unwinding the transposition `passes` times
    /// (minimum 1). Returns the sanitized plaintext.
    ///
    /// Each pass splits the text into its emitted blocks, restores the
    /// original column order, and reads the columns row-major. When more
    /// passes remain the reconstructed text is re-segmented into blocks:
    /// the sanitized length is invariant across passes, so the previous
    /// ciphertext's blocks have exactly the emitted-order lengths observed
    /// in this pass.
    pub fn decode(&self, message: &str, passes: usize) -> Result<String> {
        if self.key.is_empty() {
            return Err(ScytaleError::MissingKey);
        }

        let passes = passes.max(1);
        let mut message = message.to_string();
        for pass in 0..passes {
            let blocks = split_blocks(&message);
            if blocks.len() != self.key.len() {
                return Err(ScytaleError::BlockCount {
                    expected: self.key.len(),
                    found: blocks.len(),
                });
            }

            let emitted_lengths: Vec<usize> = blocks.iter().map(Vec::len).collect();
            let restored = reorder(&blocks, self.key.decode_order());
            let text = read_row_major(&restored);

            message = if pass + 1 < passes {
                resegment(&text, &emitted_lengths)
            } else {
                text
            };
        }

        Ok(sanitize(&message))
    }

    /// Brute-force a single-pass ciphertext with no key set.
    ///
    /// Every ordering of the column blocks is rendered as a row-major grid
    /// and offered to `confirm`. When an ordering is accepted, a key
    /// consistent with it is synthesized, installed as the active key, and
    /// the ordinary single-pass decode is returned. If every ordering is
    /// rejected the engine is left unchanged and `None` is returned.
    ///
    /// Only a single pass can be recovered: with the key unknown there is
    /// no pass count to replay.
    pub fn force_decode<F>(&mut self, ciphertext: &str, mut confirm: F) -> Result<Option<String>>
    where
        F: FnMut(&str) -> bool,
    {
        let blocks = split_blocks(ciphertext);

        for order in IndexPermutations::new(blocks.len()) {
            let grid = render_grid(&blocks, &order);
            if confirm(&grid) {
                // The accepted ordering maps restored positions to emitted
                // block indices, which is exactly the decode order.
                self.key = Key::from_decode_order(order);
                return self.decode(ciphertext, 1).map(Some);
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(key: &str) -> Columnar {
        let mut engine = Columnar::new();
        engine.set_key(key).unwrap();
        engine
    }

    #[test]
    fn test_encode_worked_example() {
        // Columns HW EO LR LL OD, emitted in order E H L L O
        let encoded = engine("hello").encode("HELLOWORLD", 1).unwrap();
        assert_eq!(encoded.ciphertext, "EO HW LR LL OD");
        assert!(encoded.warnings.is_empty());
    }

    #[test]
    fn test_decode_worked_example() {
        let decoded = engine("hello").decode("EO HW LR LL OD", 1).unwrap();
        assert_eq!(decoded, "HELLOWORLD");
    }

    #[test]
    fn test_round_trip_single_pass() {
        let engine = engine("hello");
        let encoded = engine.encode("Hello World!", 1).unwrap();
        let decoded = engine.decode(&encoded.ciphertext, 1).unwrap();
        assert_eq!(decoded, "HELLOWORLD!");
    }

    #[test]
    fn test_round_trip_multi_pass_non_square() {
        // 11 chars over 4 columns never divides evenly
        let engine = engine("code");
        for passes in 1..=6 {
            let encoded = engine.encode("ATTACKATTEN", passes).unwrap();
            let decoded = engine.decode(&encoded.ciphertext, passes).unwrap();
            assert_eq!(decoded, "ATTACKATTEN", "failed at {} passes", passes);
        }
    }

    #[test]
    fn test_round_trip_key_longer_than_message() {
        let engine = engine("longerkey");
        let encoded = engine.encode("HI", 2).unwrap();
        assert_eq!(engine.decode(&encoded.ciphertext, 2).unwrap(), "HI");
    }

    #[test]
    fn test_missing_key_errors() {
        let fresh = Columnar::new();
        assert!(matches!(
            fresh.encode("HELLO", 1),
            Err(ScytaleError::MissingKey)
        ));
        assert!(matches!(
            fresh.decode("HE LLO", 1),
            Err(ScytaleError::MissingKey)
        ));
    }

    #[test]
    fn test_invalid_key_leaves_previous_key() {
        let mut engine = engine("hello");
        assert!(engine.set_key("abc123").is_err());
        assert_eq!(engine.key().letters(), "HELLO");
    }

    #[test]
    fn test_clearing_key_resets_to_no_key() {
        let mut engine = engine("hello");
        engine.set_key("").unwrap();
        assert!(engine.key().is_empty());
        assert!(matches!(
            engine.encode("HELLO", 1),
            Err(ScytaleError::MissingKey)
        ));
    }

    #[test]
    fn test_non_alphabetic_warning() {
        let encoded = engine("ab").encode("attack at 9!", 1).unwrap();
        assert!(encoded.warnings.contains(&Warning::NonAlphabetic));
    }

    #[test]
    fn test_collision_warning() {
        // Key AB is the identity permutation: every pass count collides
        let encoded = engine("AB").encode("AB", 2).unwrap();
        assert!(encoded
            .warnings
            .contains(&Warning::Collision { passes: 2 }));
    }

    #[test]
    fn test_collision_check_disabled() {
        let mut engine = Columnar::with_collision_check(false);
        engine.set_key("AB").unwrap();
        let encoded = engine.encode("AB", 2).unwrap();
        assert!(encoded.warnings.is_empty());
    }

    #[test]
    fn test_no_collision_for_real_transposition() {
        let encoded = engine("ba").encode("ABCD", 1).unwrap();
        assert_eq!(encoded.ciphertext, "BD AC");
        assert!(encoded.warnings.is_empty());
    }

    #[test]
    fn test_block_count_mismatch() {
        assert!(matches!(
            engine("hello").decode("AB CD", 1),
            Err(ScytaleError::BlockCount {
                expected: 5,
                found: 2
            })
        ));
    }

    #[test]
    fn test_force_decode_recovers_plaintext() {
        let keyed = engine("zebra");
        let encoded = keyed.encode("DEFENDTHEEASTWALL", 1).unwrap();

        // Scripted operator: accept the grid that reads as the plaintext
        let mut unkeyed = Columnar::new();
        let recovered = unkeyed
            .force_decode(&encoded.ciphertext, |grid| {
                grid.chars().filter(|c| !c.is_whitespace()).collect::<String>()
                    == "DEFENDTHEEASTWALL"
            })
            .unwrap();

        assert_eq!(recovered.as_deref(), Some("DEFENDTHEEASTWALL"));
        // The derived key decodes the ciphertext on its own
        assert!(!unkeyed.key().is_empty());
        assert_eq!(
            unkeyed.decode(&encoded.ciphertext, 1).unwrap(),
            "DEFENDTHEEASTWALL"
        );
    }

    #[test]
    fn test_force_decode_rejection_leaves_engine_unchanged() {
        let mut unkeyed = Columnar::new();
        let result = unkeyed.force_decode("AB CD", |_| false).unwrap();
        assert!(result.is_none());
        assert!(unkeyed.key().is_empty());
    }

    #[test]
    fn test_force_decode_offers_every_ordering() {
        let mut unkeyed = Columnar::new();
        let mut seen = 0;
        unkeyed
            .force_decode("A B C", |_| {
                seen += 1;
                false
            })
            .unwrap();
        assert_eq!(seen, 6);
    }
}
