//! Text and JSON rendering of table rows.

use std::io::{self, Write};

use anyhow::Result;
use collatz_core::TableRow;
use serde::Serialize;

pub const HEADER: &str = "         N     length    maximum     second";
pub const RULE: &str = "---------- ---------- ---------- ----------";

pub fn format_row(row: &TableRow) -> String {
    format!(
        "{:>10} {:>10} {:>10} {:>10} {}",
        row.n, row.length, row.peak, row.next, row.classification
    )
}

/// `[3, 10, 5, 16]`
pub fn format_terms(terms: &[u64]) -> String {
    format!("{:?}", terms)
}

pub fn write_table(out: &mut impl Write, rows: &[TableRow]) -> io::Result<()> {
    writeln!(out, "{}", HEADER)?;
    writeln!(out, "{}", RULE)?;
    for row in rows {
        writeln!(out, "{}", format_row(row))?;
    }
    Ok(())
}

pub fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use collatz_core::SequenceCache;

    #[test]
    fn test_table_layout() {
        let mut cache = SequenceCache::new();
        cache.simulate(3, false).unwrap();
        let rows = cache.rows(&[3, 16]).unwrap();

        let mut buf = Vec::new();
        write_table(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let expected = "         N     length    maximum     second\n\
                        ---------- ---------- ---------- ----------\n\
                        \x20        3          8         16         10 odd\n\
                        \x20       16          5         16          8 power of two\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_format_terms() {
        assert_eq!(format_terms(&[3, 10, 5, 16]), "[3, 10, 5, 16]");
    }

    #[test]
    fn test_json_trailing_newline() {
        let mut buf = Vec::new();
        write_json(&mut buf, &[1u64, 4, 2]).unwrap();
        assert!(buf.ends_with(b"]\n"));
    }
}
