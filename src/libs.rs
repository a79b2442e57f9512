//! Find the single-nucleotide point mutations of a codon that encode a
//! given amino acid under the standard genetic code.
//!
//! ```
//! use posub::mutation::matcher::find_matches_str;
//!
//! let matches = find_matches_str("TCG", "L", None).unwrap();
//! assert_eq!(matches[0].codon_alt.to_string(), "TTG");
//! ```

pub mod seq;
pub mod mutation;
pub mod io;
pub mod error;

pub mod constants;

pub use error::{Error, Result};
pub use mutation::matcher::{find_matches, find_matches_str, Query};
pub use mutation::{CodonPosition, MutationCandidate};
pub use seq::code::{translate, AminoAcid};
pub use seq::Codon;
