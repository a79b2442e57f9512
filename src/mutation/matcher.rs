use log::debug;

use crate::error::Result;
use crate::mutation::generate::generate;
use crate::mutation::{CodonPosition, MutationCandidate};
use crate::seq::code::{translate, AminoAcid};
use crate::seq::Codon;

/// A validated search: starting codon, target residue, optional position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub codon: Codon,
    pub target: AminoAcid,
    pub position: Option<CodonPosition>,
}

impl Query {
    /// Validate raw arguments. All arguments are checked before any search runs.
    pub fn parse(codon: &str, target: &str, position: Option<&str>) -> Result<Query> {
        let codon = Codon::new(codon)?;
        let target = AminoAcid::new(target)?;
        let position = match position {
            Some(x) => Some(x.parse::<CodonPosition>()?),
            None => None,
        };
        Ok(Query { codon, target, position })
    }

    pub fn run(&self) -> Vec<MutationCandidate> {
        find_matches(self.codon, self.target, self.position)
    }
}

/// Point mutations of `codon` that encode `target`, in generation order.
///
/// An empty result means no single-base change reaches `target`.
pub fn find_matches(codon: Codon, target: AminoAcid, position: Option<CodonPosition>) -> Vec<MutationCandidate> {
    let aa_ref = translate(&codon);

    let matches: Vec<MutationCandidate> = generate(codon, position)
        .filter_map(|sub| {
            let aa_alt = translate(&sub.codon);
            if aa_alt == target {
                Some(MutationCandidate::new(codon, aa_ref, sub, aa_alt))
            } else {
                None
            }
        })
        .collect();

    debug!("{} ({}) -> {}: {} match(es)", codon, aa_ref, target, matches.len());

    matches
}

/// Validate raw arguments and search.
pub fn find_matches_str(codon: &str, target: &str, position: Option<&str>) -> Result<Vec<MutationCandidate>> {
    Query::parse(codon, target, position).map(|q| q.run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::mutation::MutImpact;

    fn changes(ms: &[MutationCandidate]) -> Vec<(u8, char, char, String)> {
        ms.iter()
            .map(|m| (m.pos.get(), m.nt_ref as char, m.nt_alt as char, m.codon_alt.to_string()))
            .collect()
    }

    #[test]
    fn test_serine_to_leucine() {
        let ms = find_matches_str("TCG", "L", None).unwrap();
        assert_eq!(changes(&ms), vec![(2, 'C', 'T', "TTG".to_owned())]);
        assert_eq!(ms[0].aa_ref, AminoAcid::Serine);
        assert_eq!(ms[0].aa_alt, AminoAcid::Leucine);
        assert_eq!(ms[0].impact, MutImpact::Missense);
    }

    #[test]
    fn test_aspartate_to_glutamate_at_third_position() {
        let ms = find_matches_str("GAC", "E", Some("3")).unwrap();
        assert_eq!(changes(&ms), vec![
            (3, 'C', 'A', "GAA".to_owned()),
            (3, 'C', 'G', "GAG".to_owned()),
        ]);

        assert!(find_matches_str("GAC", "E", Some("1")).unwrap().is_empty());
    }

    #[test]
    fn test_unreachable_is_empty() {
        // TGG neighbours: AGG CGG GGG TAG TCG TTG TGA TGC TGT
        assert!(find_matches_str("TGG", "D", None).unwrap().is_empty());
    }

    #[test]
    fn test_stop_target() {
        let ms = find_matches_str("TGG", "X", None).unwrap();
        assert_eq!(changes(&ms), vec![
            (2, 'G', 'A', "TAG".to_owned()),
            (3, 'G', 'A', "TGA".to_owned()),
        ]);
        assert!(ms.iter().all(|m| m.impact == MutImpact::StopGained));

        let ms = find_matches_str("CAA", "*", None).unwrap();
        assert_eq!(changes(&ms), vec![(1, 'C', 'T', "TAA".to_owned())]);
    }

    #[test]
    fn test_synonymous_target() {
        let ms = find_matches_str("TCG", "S", None).unwrap();
        assert_eq!(changes(&ms), vec![
            (3, 'G', 'A', "TCA".to_owned()),
            (3, 'G', 'C', "TCC".to_owned()),
            (3, 'G', 'T', "TCT".to_owned()),
        ]);
        assert!(ms.iter().all(|m| m.impact == MutImpact::Synonymous));
    }

    #[test]
    fn test_invalid_arguments() {
        match find_matches_str("TCGA", "L", None) {
            Err(Error::InvalidCodon { .. }) => {},
            other => panic!("expected InvalidCodon, got {:?}", other),
        }
        match find_matches_str("TCG", "Z", None) {
            Err(Error::InvalidAminoAcid(_)) => {},
            other => panic!("expected InvalidAminoAcid, got {:?}", other),
        }
        match find_matches_str("TCG", "L", Some("4")) {
            Err(Error::InvalidPosition(_)) => {},
            other => panic!("expected InvalidPosition, got {:?}", other),
        }
    }

    #[test]
    fn test_every_match_translates_to_target() {
        for codon in Codon::all() {
            for &aa in AminoAcid::iter() {
                let ms = find_matches(codon, aa, None);
                let mut expected = 0;
                for sub in generate(codon, None) {
                    if translate(&sub.codon) == aa {
                        expected += 1;
                    }
                }
                assert_eq!(ms.len(), expected);
                assert!(ms.iter().all(|m| translate(&m.codon_alt) == aa && m.codon_ref == codon));
                assert_eq!(ms, find_matches(codon, aa, None));
            }
        }
    }
}
