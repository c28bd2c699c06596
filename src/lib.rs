//! Scytale - Columnar Transposition Cipher Toolkit
//!
//! A classical permutation cipher: characters keep their values but move
//! position, rearranged column by column under an alphabetic key. The
//! toolkit supports repeated (multi-pass) application, detection of
//! accidental plaintext/ciphertext collisions, and interactive brute-force
//! recovery of an unknown key from ciphertext alone.
//!
//! ## Transform
//!
//! ```text
//! Sanitize → Distribute (round-robin) → Permute columns → Join with spaces
//! ```
//!
//! repeated once per pass; decoding unwinds the same steps using the
//! inverse column order. Ciphertext is a sequence of column blocks
//! separated by single spaces.
//!
//! ## Example
//!
//! ```
//! use scytale::Columnar;
//!
//! let mut engine = Columnar::new();
//! engine.set_key("hello").unwrap();
//!
//! let encoded = engine.encode("Hello World!", 2).unwrap();
//! let decoded = engine.decode(&encoded.ciphertext, 2).unwrap();
//! assert_eq!(decoded, "HELLOWORLD!");
//! ```
//!
//! When the key is unknown, [`Columnar::force_decode`] enumerates column
//! orderings against an injected confirmation callback and derives a key
//! from the ordering the operator accepts.

pub mod cipher;
pub mod cli;
pub mod columns;
pub mod error;
pub mod force;
pub mod key;
pub mod record;

pub use cipher::{Columnar, Encoded};
pub use error::{Result, ScytaleError, Warning};
pub use key::Key;
pub use record::Record;
