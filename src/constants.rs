pub const NUCLEOTIDES: [u8; 4] = [b'A', b'C', b'G', b'T'];
pub const N_NUCLEOTIDES: usize = 4;

pub const CODON_LENGTH: usize = 3;
pub const N_CODONS: usize = N_NUCLEOTIDES * N_NUCLEOTIDES * N_NUCLEOTIDES;

/// Alternative bases available at one codon position
pub const N_ALTERNATIVES: usize = N_NUCLEOTIDES - 1;

/// Every single-base change of a codon
pub const N_POINT_MUTATIONS: usize = CODON_LENGTH * N_ALTERNATIVES;

pub const STOP_SYMBOL: u8 = b'X';
pub const STOP_SYMBOL_ALT: u8 = b'*';
