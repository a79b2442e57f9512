pub mod code;

use std::fmt;
use std::ops;
use std::str::{self, FromStr};

use bio::alphabets::dna;

use crate::constants::*;
use crate::error::{Error, Result};

pub type Nucleotide = u8;

/// Codon on the coding strand, stored as upper-case DNA.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codon([Nucleotide; CODON_LENGTH]);

impl Codon {
    /// Parse a codon from raw text.
    ///
    /// Input is case-insensitive; RNA input is accepted and U is stored as T.
    pub fn new(x: &str) -> Result<Codon> {
        let normalized: Vec<Nucleotide> = x.bytes()
            .map(|nt| match nt.to_ascii_uppercase() {
                b'U' => b'T',
                nt => nt,
            })
            .collect();

        if !dna::alphabet().is_word(&normalized) {
            return Err(Error::invalid_codon(x, "contains a character outside A, C, G, T/U"));
        }

        if normalized.len() != CODON_LENGTH {
            return Err(Error::invalid_codon(x, format!("expected exactly {} nucleotides, found {}",
                CODON_LENGTH, normalized.len())));
        }

        Ok(Codon([normalized[0], normalized[1], normalized[2]]))
    }

    /// Construct from nucleotides already known to be in the alphabet.
    pub(crate) fn from_nucleotides(nts: [Nucleotide; CODON_LENGTH]) -> Codon {
        debug_assert!(nts.iter().all(|nt| NUCLEOTIDES.contains(nt)));
        Codon(nts)
    }

    /// Copy of this codon with the base at 0-based `idx` replaced.
    pub fn with_base(&self, idx: usize, nt: Nucleotide) -> Codon {
        let mut nts = self.0;
        nts[idx] = nt;
        Codon::from_nucleotides(nts)
    }

    /// All 64 codons, in A, C, G, T order.
    pub fn all() -> impl Iterator<Item = Codon> {
        (0 .. N_CODONS).map(Codon::from_index)
    }

    /// Base-4 index of the codon (A=0, C=1, G=2, T=3), first position most significant.
    pub fn index(&self) -> usize {
        self.0.iter().fold(0, |acc, &nt| acc * N_NUCLEOTIDES + nucleotide_index(nt))
    }

    pub(crate) fn from_index(idx: usize) -> Codon {
        const N: usize = N_NUCLEOTIDES;
        Codon::from_nucleotides([
            NUCLEOTIDES[(idx / (N * N)) % N],
            NUCLEOTIDES[(idx / N) % N],
            NUCLEOTIDES[idx % N],
        ])
    }

    #[inline]
    pub fn as_bytes(&self) -> &[Nucleotide] {
        &self.0
    }

    /// Number of positions at which two codons differ.
    pub fn distance(&self, other: &Codon) -> usize {
        self.0.iter().zip(other.0.iter()).filter(|&(a, b)| a != b).count()
    }
}

impl ops::Index<usize> for Codon {
    type Output = Nucleotide;

    #[inline]
    fn index(&self, index: usize) -> &Nucleotide {
        &self.0[index]
    }
}

impl FromStr for Codon {
    type Err = Error;

    fn from_str(s: &str) -> Result<Codon> {
        Codon::new(s)
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // nucleotides are validated ASCII
        let s = str::from_utf8(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(s)
    }
}

// codons only hold nucleotides checked in `Codon::new`
fn nucleotide_index(nt: Nucleotide) -> usize {
    match nt {
        b'A' => 0,
        b'C' => 1,
        b'G' => 2,
        b'T' => 3,
        _ => unreachable!("unvalidated nucleotide {:?}", nt as char),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codon() {
        assert_eq!(Codon::new("TCG").unwrap().to_string(), "TCG");
        assert_eq!(Codon::new("tcg").unwrap().to_string(), "TCG");
        assert_eq!(Codon::new("UCG").unwrap().to_string(), "TCG");
        assert_eq!(Codon::new("gac").unwrap().to_string(), "GAC");
    }

    #[test]
    fn test_reject_codon() {
        for x in ["TCGA", "TC", "", "TNG", "T-G", "TCΩ", " TCG", "TCG\n", " gac\n", "T CG"].iter() {
            match Codon::new(x) {
                Err(Error::InvalidCodon { input, .. }) => assert_eq!(&input, x),
                other => panic!("expected InvalidCodon for {:?}, got {:?}", x, other),
            }
        }
    }

    #[test]
    fn test_index_round_trip() {
        let codons: Vec<Codon> = Codon::all().collect();
        assert_eq!(codons.len(), N_CODONS);
        assert_eq!(codons[0].to_string(), "AAA");
        assert_eq!(codons[63].to_string(), "TTT");
        for (i, codon) in codons.iter().enumerate() {
            assert_eq!(codon.index(), i);
        }
    }

    #[test]
    fn test_with_base() {
        let codon = Codon::new("TCG").unwrap();
        let mutated = codon.with_base(1, b'T');
        assert_eq!(mutated.to_string(), "TTG");
        assert_eq!(codon.to_string(), "TCG");
        assert_eq!(codon.distance(&mutated), 1);
    }
}
