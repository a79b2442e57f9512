//! Enumeration of single-base substitutions of a codon.
//!
//! Substitutions are produced position by position (1, 2, 3) and, within a
//! position, by alternate base in A, C, G, T order, skipping the reference
//! base. The order is fixed so that results are reproducible.

use log::debug;

use crate::constants::*;
use crate::mutation::{CodonPosition, Substitution};
use crate::seq::Codon;

/// Iterator over the substitutions of a codon.
pub struct Substitutions {
    codon: Codon,
    positions: &'static [CodonPosition],
    /// index into `positions`
    i: usize,
    /// index into `NUCLEOTIDES`
    j: usize,
}

impl Iterator for Substitutions {
    type Item = Substitution;

    fn next(&mut self) -> Option<Substitution> {
        while self.i < self.positions.len() {
            let pos = self.positions[self.i];
            let nt_ref = self.codon[pos.index()];

            while self.j < N_NUCLEOTIDES {
                let nt_alt = NUCLEOTIDES[self.j];
                self.j += 1;
                if nt_alt != nt_ref {
                    return Some(Substitution {
                        pos,
                        nt_ref,
                        nt_alt,
                        codon: self.codon.with_base(pos.index(), nt_alt),
                    });
                }
            }

            self.i += 1;
            self.j = 0;
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining_positions = self.positions.len().saturating_sub(self.i);
        let n = if remaining_positions == 0 {
            0
        } else {
            // alternates left at the current position, plus all later positions
            let current = NUCLEOTIDES[self.j.min(N_NUCLEOTIDES)..].iter()
                .filter(|&&nt| nt != self.codon[self.positions[self.i].index()])
                .count();
            current + (remaining_positions - 1) * N_ALTERNATIVES
        };
        (n, Some(n))
    }
}

impl ExactSizeIterator for Substitutions {}

/// Every codon one base away from `codon`, optionally restricted to one position.
///
/// Yields 9 substitutions without a position and 3 with one.
pub fn generate(codon: Codon, position: Option<CodonPosition>) -> Substitutions {
    let positions: &'static [CodonPosition] = match position {
        Some(pos) => {
            let all = CodonPosition::iter().as_slice();
            &all[pos.index() .. pos.index() + 1]
        },
        None => CodonPosition::iter().as_slice(),
    };

    debug!("generating substitutions of {} at {} position(s)", codon, positions.len());

    Substitutions { codon, positions, i: 0, j: 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codons(xs: Substitutions) -> Vec<String> {
        xs.map(|s| s.codon.to_string()).collect()
    }

    #[test]
    fn test_generate_all_positions() {
        let codon = Codon::new("TCG").unwrap();
        let subs: Vec<Substitution> = generate(codon, None).collect();
        assert_eq!(subs.len(), N_POINT_MUTATIONS);
        assert_eq!(codons(generate(codon, None)),
            vec!["ACG", "CCG", "GCG", "TAG", "TGG", "TTG", "TCA", "TCC", "TCT"]);

        let positions: Vec<u8> = subs.iter().map(|s| s.pos.get()).collect();
        assert_eq!(positions, vec![1, 1, 1, 2, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn test_generate_one_position() {
        let codon = Codon::new("GAC").unwrap();
        let pos = CodonPosition::new(3).unwrap();
        let subs: Vec<Substitution> = generate(codon, Some(pos)).collect();
        assert_eq!(subs.len(), N_ALTERNATIVES);
        for s in subs.iter() {
            assert_eq!(s.pos, pos);
            assert_eq!(s.nt_ref, b'C');
            assert_eq!(&s.codon.as_bytes()[..2], b"GA");
        }
        assert_eq!(codons(generate(codon, Some(pos))), vec!["GAA", "GAG", "GAT"]);
    }

    #[test]
    fn test_single_change_for_every_codon() {
        for codon in Codon::all() {
            let subs: Vec<Substitution> = generate(codon, None).collect();
            assert_eq!(subs.len(), 9);
            for (k, s) in subs.iter().enumerate() {
                assert_eq!(codon.distance(&s.codon), 1);
                assert_eq!(s.codon[s.pos.index()], s.nt_alt);
                assert_eq!(codon[s.pos.index()], s.nt_ref);
                assert!(subs[k + 1 ..].iter().all(|t| t.codon != s.codon));
            }

            for &pos in CodonPosition::iter() {
                let subs: Vec<Substitution> = generate(codon, Some(pos)).collect();
                assert_eq!(subs.len(), 3);
                assert!(subs.iter().all(|s| s.pos == pos && codon.distance(&s.codon) == 1));
            }
        }
    }

    #[test]
    fn test_size_hint() {
        let codon = Codon::new("AAA").unwrap();
        let mut it = generate(codon, None);
        assert_eq!(it.len(), 9);
        it.next();
        assert_eq!(it.len(), 8);
        it.next();
        it.next();
        assert_eq!(it.len(), 6);
        assert_eq!(generate(codon, CodonPosition::new(2).ok()).len(), 3);
    }

    #[test]
    fn test_deterministic() {
        let codon = Codon::new("ATG").unwrap();
        let a: Vec<Substitution> = generate(codon, None).collect();
        let b: Vec<Substitution> = generate(codon, None).collect();
        assert_eq!(a, b);
    }
}
