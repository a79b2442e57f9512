use std::convert::AsRef;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};
use crate::mutation::matcher::Query;

/// A reader of tab-separated mutation queries.
///
/// Columns: codon, amino acid, and an optional codon position.
pub struct Reader<R: io::Read> {
    inner: csv::Reader<R>,
}

impl Reader<fs::File> {
    /// Read from a given file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        fs::File::open(path).map(Reader::new)
    }
}

impl<R: io::Read> Reader<R> {
    /// Read from a given reader.
    pub fn new(reader: R) -> Self {
        Reader {
            inner: csv::ReaderBuilder::new()
                .delimiter(b'\t')
                .comment(Some(b'#'))
                .has_headers(true)
                .flexible(true)
                .trim(csv::Trim::All)
                .from_reader(reader),
        }
    }

    /// Iterate over records.
    pub fn records(&mut self) -> Records<'_, R> {
        Records { inner: self.inner.records() }
    }

    /// Read and validate every query, failing on the first bad record.
    pub fn read_all(&mut self) -> Result<Vec<Query>> {
        self.records().collect()
    }
}

pub struct Records<'r, R: 'r + io::Read> {
    inner: csv::StringRecordsIter<'r, R>,
}

impl<'r, R: io::Read> Iterator for Records<'r, R> {
    type Item = Result<Query>;

    /// Get next query.
    /// Validation errors carry the line of the offending record.
    fn next(&mut self) -> Option<Result<Query>> {
        self.inner.next()
            .map(|res| {
                let record = res?;
                let line = record.position().map(|p| p.line()).unwrap_or(0);

                let codon = record.get(0)
                    .filter(|x| !x.is_empty())
                    .ok_or_else(|| Error::MissingField { line, field: "codon".to_owned() })?;
                let target = record.get(1)
                    .filter(|x| !x.is_empty())
                    .ok_or_else(|| Error::MissingField { line, field: "amino_acid".to_owned() })?;
                // missing or empty position means all positions
                let position = record.get(2).filter(|x| !x.is_empty());

                Query::parse(codon, target, position).map_err(|e| e.at_line(line))
            })
    }
}
