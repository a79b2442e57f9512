//! Output of mutation search results.

use std::io;

use linked_hash_map::LinkedHashMap;
use log::info;

use crate::error::Result;
use crate::io::query;
use crate::mutation::matcher::Query;
use crate::mutation::{CodonPosition, MutationCandidate};
use crate::seq::code::{codons_for, translate};

pub const NO_MUTATIONS: &str = "No Possible Point Mutations";

fn tsv_writer<W: io::Write>(out: W, has_headers: bool) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(has_headers)
        .from_writer(out)
}

fn nt(x: u8) -> String {
    (x as char).to_string()
}

/// Write one line per match: position, ref, alt, mutated codon, amino acid.
pub fn write_table<W: io::Write>(out: &mut W, matches: &[MutationCandidate]) -> Result<()> {
    if matches.is_empty() {
        writeln!(out, "{}", NO_MUTATIONS)?;
        return Ok(());
    }

    let mut writer = tsv_writer(out, false);
    for m in matches {
        writer.write_record(&[
            m.pos.to_string(),
            nt(m.nt_ref),
            nt(m.nt_alt),
            m.codon_alt.to_string(),
            m.aa_alt.to_string(),
        ])?;
    }
    writer.flush()?;

    Ok(())
}

/// Write the human-readable report of one query.
pub fn write_verbose<W: io::Write>(out: &mut W, query: &Query, matches: &[MutationCandidate]) -> Result<()> {
    let aa_ref = translate(&query.codon);
    let targets: Vec<String> = codons_for(query.target).iter().map(|c| c.to_string()).collect();

    writeln!(out, "--------------- Start Report ---------------")?;
    writeln!(out, "Start Codon: {} ({})   Substitute to: {} ({})",
        query.codon, aa_ref.abbreviation(), query.target, query.target.abbreviation())?;
    writeln!(out, "Residues: {} -> {}", aa_ref.name(), query.target.name())?;
    match query.position {
        Some(pos) => writeln!(out, "Position(s): {}", pos)?,
        None => writeln!(out, "Position(s): All")?,
    }
    writeln!(out, "Target Codons: {}", targets.join(" "))?;
    writeln!(out, "Results:")?;

    if matches.is_empty() {
        writeln!(out, "{}", NO_MUTATIONS)?;
    } else {
        // every searched position is listed, even those without a match
        let mut by_position: LinkedHashMap<CodonPosition, Vec<&MutationCandidate>> = LinkedHashMap::new();
        match query.position {
            Some(pos) => { by_position.insert(pos, Vec::new()); },
            None => for &pos in CodonPosition::iter() {
                by_position.insert(pos, Vec::new());
            },
        }
        for m in matches {
            if let Some(ms) = by_position.get_mut(&m.pos) {
                ms.push(m);
            }
        }

        for (pos, ms) in by_position.iter() {
            writeln!(out, "Position {}:", pos)?;
            if ms.is_empty() {
                writeln!(out, "\tNone")?;
            }
            for m in ms {
                writeln!(out, "\t{} -> {}\t{}\t{}\t{}",
                    m.nt_ref as char, m.nt_alt as char, m.codon_alt, m.protein_change(), m.impact)?;
            }
        }
    }

    writeln!(out, "---------------- End Report ----------------")?;

    Ok(())
}

/// Tab-separated results of many queries, one row per match.
pub struct BatchWriter<W: io::Write> {
    inner: csv::Writer<W>,
    n_queries: usize,
}

impl<W: io::Write> BatchWriter<W> {
    pub fn new(out: W) -> Self {
        BatchWriter { inner: tsv_writer(out, true), n_queries: 0 }
    }

    pub fn write_header(&mut self) -> Result<()> {
        self.inner.write_record(&[
            "query", "codon", "amino_acid", "position", "ref", "alt",
            "mutated_codon", "mutated_amino_acid", "impact",
        ])?;
        Ok(())
    }

    pub fn write_query(&mut self, query: &Query, matches: &[MutationCandidate]) -> Result<()> {
        self.n_queries += 1;

        if matches.is_empty() {
            info!("query {}: {} -> {}: no possible point mutations", self.n_queries, query.codon, query.target);
        }

        for m in matches {
            self.inner.write_record(&[
                self.n_queries.to_string(),
                query.codon.to_string(),
                query.target.to_string(),
                m.pos.to_string(),
                nt(m.nt_ref),
                nt(m.nt_alt),
                m.codon_alt.to_string(),
                m.aa_alt.to_string(),
                m.impact.to_string(),
            ])?;
        }

        Ok(())
    }

    /// Number of queries written so far.
    pub fn n_queries(&self) -> usize {
        self.n_queries
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

/// Validate every query of a batch, then search and write the results.
///
/// Nothing is written when any query is invalid. Returns the number of queries.
pub fn write_batch<R: io::Read, W: io::Write>(reader: &mut query::Reader<R>, out: &mut W, verbose: bool) -> Result<usize> {
    let queries = reader.read_all()?;
    info!("read {} queries", queries.len());

    if verbose {
        for q in queries.iter() {
            write_verbose(out, q, &q.run())?;
        }
        return Ok(queries.len());
    }

    let mut writer = BatchWriter::new(out);
    writer.write_header()?;
    for q in queries.iter() {
        writer.write_query(q, &q.run())?;
    }
    writer.flush()?;

    Ok(writer.n_queries())
}
