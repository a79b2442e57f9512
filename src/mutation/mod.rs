pub mod generate;
pub mod matcher;

use std::fmt;
use std::slice;
use std::str::FromStr;

use crate::constants::*;
use crate::error::{Error, Result};
use crate::seq::code::AminoAcid;
use crate::seq::{Codon, Nucleotide};

/// Position within a codon, 1-based as presented to users.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodonPosition(u8);

impl CodonPosition {
    pub fn new(x: u8) -> Result<CodonPosition> {
        if x >= 1 && x as usize <= CODON_LENGTH {
            Ok(CodonPosition(x))
        } else {
            Err(Error::InvalidPosition(x.to_string()))
        }
    }

    pub fn iter() -> slice::Iter<'static, CodonPosition> {
        static POSITIONS: [CodonPosition; CODON_LENGTH] = [CodonPosition(1), CodonPosition(2), CodonPosition(3)];
        POSITIONS.iter()
    }

    /// 1-based position
    #[inline]
    pub fn get(&self) -> u8 {
        self.0
    }

    /// 0-based index into the codon
    #[inline]
    pub fn index(&self) -> usize {
        (self.0 - 1) as usize
    }
}

impl FromStr for CodonPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<CodonPosition> {
        s.parse::<u8>()
            .map_err(|_| Error::InvalidPosition(s.to_owned()))
            .and_then(CodonPosition::new)
    }
}

impl fmt::Display for CodonPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Effect of a point mutation on the encoded residue,
/// named by Sequence Ontology term.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MutImpact {
    Synonymous,
    Missense,
    StopGained,
    StopLost,
    StopRetained,
}

impl MutImpact {
    pub fn classify(aa_ref: AminoAcid, aa_alt: AminoAcid) -> MutImpact {
        match (aa_ref.is_stop(), aa_alt.is_stop()) {
            (true, true) => MutImpact::StopRetained,
            (true, false) => MutImpact::StopLost,
            (false, true) => MutImpact::StopGained,
            (false, false) if aa_ref == aa_alt => MutImpact::Synonymous,
            (false, false) => MutImpact::Missense,
        }
    }
}

impl fmt::Display for MutImpact {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = match *self {
            MutImpact::Synonymous => "synonymous_variant",
            MutImpact::Missense => "missense_variant",
            MutImpact::StopGained => "stop_gained",
            MutImpact::StopLost => "stop_lost",
            MutImpact::StopRetained => "stop_retained_variant",
        };

        write!(f, "{}", c)
    }
}

/// A single-base substitution of a codon, before translation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Substitution {
    /// Mutated codon position
    pub pos: CodonPosition,
    /// Reference nucleotide of the starting codon
    pub nt_ref: Nucleotide,
    /// Alternate nucleotide
    pub nt_alt: Nucleotide,
    /// Codon after the substitution
    pub codon: Codon,
}

/// Point mutation of a starting codon, with its translation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MutationCandidate {
    pub pos: CodonPosition,
    pub nt_ref: Nucleotide,
    pub nt_alt: Nucleotide,
    /// Starting codon
    pub codon_ref: Codon,
    /// Mutated codon
    pub codon_alt: Codon,
    /// Residue encoded by the starting codon
    pub aa_ref: AminoAcid,
    /// Residue encoded by the mutated codon
    pub aa_alt: AminoAcid,
    pub impact: MutImpact,
}

impl MutationCandidate {
    pub fn new(codon_ref: Codon, aa_ref: AminoAcid, sub: Substitution, aa_alt: AminoAcid) -> MutationCandidate {
        MutationCandidate {
            pos: sub.pos,
            nt_ref: sub.nt_ref,
            nt_alt: sub.nt_alt,
            codon_ref,
            codon_alt: sub.codon,
            aa_ref,
            aa_alt,
            impact: MutImpact::classify(aa_ref, aa_alt),
        }
    }

    /// Nucleotide change within the codon, e.g. `c.2C>T`
    pub fn cdna_change(&self) -> String {
        format!("c.{}{}>{}", self.pos, self.nt_ref as char, self.nt_alt as char)
    }

    /// Residue change, e.g. `p.Ser>Leu` or `p.Glu=`
    pub fn protein_change(&self) -> String {
        match self.impact {
            MutImpact::Synonymous | MutImpact::StopRetained => {
                format!("p.{}=", self.aa_ref.abbreviation())
            },
            _ => {
                format!("p.{}>{}", self.aa_ref.abbreviation(), self.aa_alt.abbreviation())
            },
        }
    }
}
