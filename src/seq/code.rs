//! The standard genetic code.

use std::fmt;
use std::slice;
use std::str::FromStr;
use std::sync::OnceLock;

use multimap::MultiMap;

use crate::constants::*;
use crate::error::{Error, Result};
use crate::seq::Codon;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AminoAcid {
    Alanine,
    Arginine,
    Asparagine,
    AsparticAcid,
    Cysteine,
    GlutamicAcid,
    Glutamine,
    Glycine,
    Histidine,
    Isoleucine,
    Leucine,
    Lysine,
    Methionine,
    Phenylalanine,
    Proline,
    Serine,
    Threonine,
    Tryptophan,
    Tyrosine,
    Valine,
    Stop,
}

pub const N_AMINO_ACIDS: usize = 21;

impl AminoAcid {
    pub fn iter() -> slice::Iter<'static, AminoAcid> {
        use self::AminoAcid::*;
        static AMINO_ACIDS: [AminoAcid; N_AMINO_ACIDS] = [
            Alanine, Arginine, Asparagine, AsparticAcid, Cysteine, GlutamicAcid, Glutamine,
            Glycine, Histidine, Isoleucine, Leucine, Lysine, Methionine, Phenylalanine,
            Proline, Serine, Threonine, Tryptophan, Tyrosine, Valine, Stop,
        ];
        AMINO_ACIDS.iter()
    }

    /// Parse a one-letter code, case-insensitive. Stop is `X` or `*`.
    pub fn from_symbol(x: u8) -> Option<AminoAcid> {
        use self::AminoAcid::*;
        let aa = match x.to_ascii_uppercase() {
            b'A' => Alanine,
            b'R' => Arginine,
            b'N' => Asparagine,
            b'D' => AsparticAcid,
            b'C' => Cysteine,
            b'E' => GlutamicAcid,
            b'Q' => Glutamine,
            b'G' => Glycine,
            b'H' => Histidine,
            b'I' => Isoleucine,
            b'L' => Leucine,
            b'K' => Lysine,
            b'M' => Methionine,
            b'F' => Phenylalanine,
            b'P' => Proline,
            b'S' => Serine,
            b'T' => Threonine,
            b'W' => Tryptophan,
            b'Y' => Tyrosine,
            b'V' => Valine,
            STOP_SYMBOL | STOP_SYMBOL_ALT => Stop,
            _ => return None,
        };
        Some(aa)
    }

    /// Parse raw text holding exactly one amino acid letter.
    pub fn new(x: &str) -> Result<AminoAcid> {
        match x.as_bytes() {
            &[c] => AminoAcid::from_symbol(c).ok_or_else(|| Error::InvalidAminoAcid(x.to_owned())),
            _ => Err(Error::InvalidAminoAcid(x.to_owned())),
        }
    }

    pub fn symbol(&self) -> char {
        use self::AminoAcid::*;
        match *self {
            Alanine => 'A',
            Arginine => 'R',
            Asparagine => 'N',
            AsparticAcid => 'D',
            Cysteine => 'C',
            GlutamicAcid => 'E',
            Glutamine => 'Q',
            Glycine => 'G',
            Histidine => 'H',
            Isoleucine => 'I',
            Leucine => 'L',
            Lysine => 'K',
            Methionine => 'M',
            Phenylalanine => 'F',
            Proline => 'P',
            Serine => 'S',
            Threonine => 'T',
            Tryptophan => 'W',
            Tyrosine => 'Y',
            Valine => 'V',
            Stop => STOP_SYMBOL as char,
        }
    }

    /// Three-letter abbreviation, `Ter` for stop (HGVS).
    pub fn abbreviation(&self) -> &'static str {
        use self::AminoAcid::*;
        match *self {
            Alanine => "Ala",
            Arginine => "Arg",
            Asparagine => "Asn",
            AsparticAcid => "Asp",
            Cysteine => "Cys",
            GlutamicAcid => "Glu",
            Glutamine => "Gln",
            Glycine => "Gly",
            Histidine => "His",
            Isoleucine => "Ile",
            Leucine => "Leu",
            Lysine => "Lys",
            Methionine => "Met",
            Phenylalanine => "Phe",
            Proline => "Pro",
            Serine => "Ser",
            Threonine => "Thr",
            Tryptophan => "Trp",
            Tyrosine => "Tyr",
            Valine => "Val",
            Stop => "Ter",
        }
    }

    pub fn name(&self) -> &'static str {
        use self::AminoAcid::*;
        match *self {
            Alanine => "alanine",
            Arginine => "arginine",
            Asparagine => "asparagine",
            AsparticAcid => "aspartic acid",
            Cysteine => "cysteine",
            GlutamicAcid => "glutamic acid",
            Glutamine => "glutamine",
            Glycine => "glycine",
            Histidine => "histidine",
            Isoleucine => "isoleucine",
            Leucine => "leucine",
            Lysine => "lysine",
            Methionine => "methionine",
            Phenylalanine => "phenylalanine",
            Proline => "proline",
            Serine => "serine",
            Threonine => "threonine",
            Tryptophan => "tryptophan",
            Tyrosine => "tyrosine",
            Valine => "valine",
            Stop => "stop",
        }
    }

    #[inline]
    pub fn is_stop(&self) -> bool {
        *self == AminoAcid::Stop
    }
}

impl FromStr for AminoAcid {
    type Err = Error;

    fn from_str(s: &str) -> Result<AminoAcid> {
        AminoAcid::new(s)
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// indexed in base 4 with A=0, C=1, G=2, T=3; first codon position varies slowest
const GENETIC_CODE: [AminoAcid; N_CODONS] = {
    use self::AminoAcid::*;
    [
        Lysine, Asparagine, Lysine, Asparagine,          // AAA AAC AAG AAT
        Threonine, Threonine, Threonine, Threonine,      // ACA ACC ACG ACT
        Arginine, Serine, Arginine, Serine,              // AGA AGC AGG AGT
        Isoleucine, Isoleucine, Methionine, Isoleucine,  // ATA ATC ATG ATT
        Glutamine, Histidine, Glutamine, Histidine,      // CAA CAC CAG CAT
        Proline, Proline, Proline, Proline,              // CCA CCC CCG CCT
        Arginine, Arginine, Arginine, Arginine,          // CGA CGC CGG CGT
        Leucine, Leucine, Leucine, Leucine,              // CTA CTC CTG CTT
        GlutamicAcid, AsparticAcid, GlutamicAcid, AsparticAcid, // GAA GAC GAG GAT
        Alanine, Alanine, Alanine, Alanine,              // GCA GCC GCG GCT
        Glycine, Glycine, Glycine, Glycine,              // GGA GGC GGG GGT
        Valine, Valine, Valine, Valine,                  // GTA GTC GTG GTT
        Stop, Tyrosine, Stop, Tyrosine,                  // TAA TAC TAG TAT
        Serine, Serine, Serine, Serine,                  // TCA TCC TCG TCT
        Stop, Cysteine, Tryptophan, Cysteine,            // TGA TGC TGG TGT
        Leucine, Phenylalanine, Leucine, Phenylalanine,  // TTA TTC TTG TTT
    ]
};

/// Translate a codon under the standard genetic code.
#[inline]
pub fn translate(codon: &Codon) -> AminoAcid {
    GENETIC_CODE[codon.index()]
}

/// Validate and translate a codon given as raw text.
pub fn translate_str(x: &str) -> Result<AminoAcid> {
    Codon::new(x).map(|codon| translate(&codon))
}

/// Codons encoding each amino acid, built once from the forward table.
fn reverse_table() -> &'static MultiMap<AminoAcid, Codon> {
    static TABLE: OnceLock<MultiMap<AminoAcid, Codon>> = OnceLock::new();
    TABLE.get_or_init(|| {
        Codon::all().map(|codon| (translate(&codon), codon)).collect()
    })
}

/// All codons encoding `aa`, in table order.
pub fn codons_for(aa: AminoAcid) -> &'static [Codon] {
    reverse_table().get_vec(&aa).map(|v| v.as_slice()).unwrap_or(&[])
}
