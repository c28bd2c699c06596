use crate::columns::sanitize;
use crate::error::{Result, ScytaleError};

/// An alphabetic transposition key and the column orders derived from it.
///
/// A `Key` is an immutable value: it is rebuilt wholesale whenever the key
/// string changes, so the letters and both orders can never disagree with
/// each other. The empty key (`len() == 0`) is the distinguished "no key"
/// state used only to permit brute-forcing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Key {
    letters: String,
    encode_order: Vec<usize>,
    decode_order: Vec<usize>,
}

impl Key {
    /// The "no key" state. Encoding and decoding reject it; brute-force
    /// recovery requires it.
    pub fn none() -> Self {
        Self::default()
    }

    /// Derive a key from a raw string: strip spaces, uppercase, then order
    /// the column indices by letter code point.
    ///
    /// The sort is stable, so repeated letters keep their original relative
    /// order. Encode/decode and brute-force key synthesis all rely on this
    /// tie-breaking being deterministic.
    ///
    /// An empty string (after stripping) yields [`Key::none`]; any
    /// non-alphabetic character is an [`ScytaleError::InvalidKey`].
    pub fn derive(raw: &str) -> Result<Self> {
        let letters = sanitize(raw);
        if letters.is_empty() {
            return Ok(Self::none());
        }
        if !letters.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ScytaleError::InvalidKey(raw.to_string()));
        }

        let chars: Vec<char> = letters.chars().collect();
        let mut encode_order: Vec<usize> = (0..chars.len()).collect();
        encode_order.sort_by_key(|&i| chars[i]);
        let decode_order = invert(&encode_order);

        Ok(Self {
            letters,
            encode_order,
            decode_order,
        })
    }

    /// Synthesize a key from a brute-force-confirmed decode order.
    ///
    /// `decode_order[i]` is the emitted-order block index that belongs at
    /// restored position `i`. The letters only have to reproduce the
    /// permutation when re-derived, so position `encode_order[k]` simply
    /// gets the k-th letter of the alphabet.
    ///
    /// Beyond 26 columns the letters wrap around the alphabet and no
    /// longer re-derive the permutation; the installed orders themselves
    /// are still exact. Brute-force enumeration is factorial, so keys that
    /// wide are never reached in practice.
    pub fn from_decode_order(decode_order: Vec<usize>) -> Self {
        let encode_order = invert(&decode_order);
        let mut letters = vec!['a'; encode_order.len()];
        for (rank, &position) in encode_order.iter().enumerate() {
            letters[position] = (b'a' + (rank % 26) as u8) as char;
        }

        Self {
            letters: letters.into_iter().collect(),
            encode_order,
            decode_order,
        }
    }

    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Number of columns this key transposes.
    pub fn len(&self) -> usize {
        self.encode_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encode_order.is_empty()
    }

    /// Column permutation applied when encoding: emitted block `k` is
    /// round-robin column `encode_order[k]`.
    pub fn encode_order(&self) -> &[usize] {
        &self.encode_order
    }

    /// Inverse permutation: restored column `i` is emitted block
    /// `decode_order[i]`.
    pub fn decode_order(&self) -> &[usize] {
        &self.decode_order
    }
}

/// Invert a permutation of `0..len`.
fn invert(permutation: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0usize; permutation.len()];
    for (new_pos, &old_pos) in permutation.iter().enumerate() {
        inverse[old_pos] = new_pos;
    }
    inverse
}
