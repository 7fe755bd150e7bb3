//! Plain-text alignment report.
//!
//! One block per alignment, numbered from 1:
//!
//! ```text
//! Global alignment no. 1:
//! G-ATTACA
//! GCA-TGCU
//! Score: 0
//!
//! ```
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::common::AlignError;
use crate::traceback::Alignment;

/// Write every alignment block to `w`.
pub fn write_report<W: Write>(w: &mut W, title: &str, alignments: &[Alignment]) -> io::Result<()> {
    for (k, aln) in alignments.iter().enumerate() {
        writeln!(w, "{title} alignment no. {}:", k + 1)?;
        writeln!(w, "{}", aln.first)?;
        writeln!(w, "{}", aln.second)?;
        writeln!(w, "Score: {}", aln.score)?;
        writeln!(w)?;
    }
    Ok(())
}

/// Print the report to stdout and write the same text to `path`, replacing
/// anything already there.
pub fn print_and_save(path: &Path, title: &str, alignments: &[Alignment]) -> Result<(), AlignError> {
    let mut file = BufWriter::new(File::create(path)?);
    write_report(&mut file, title, alignments)?;
    file.flush()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, title, alignments)?;
    out.flush()?;
    log::debug!("wrote {} alignment(s) to {}", alignments.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Alignment> {
        vec![
            Alignment { first: "AC-T".into(), second: "ACGT".into(), score: 1 },
            Alignment { first: "A-CT".into(), second: "ACGT".into(), score: 1 },
        ]
    }

    #[test]
    fn block_format() {
        let mut buf = Vec::new();
        write_report(&mut buf, "Local", &sample()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Local alignment no. 1:\nAC-T\nACGT\nScore: 1\n\nLocal alignment no. 2:\nA-CT\nACGT\nScore: 1\n\n"
        );
    }

    #[test]
    fn empty_collection_writes_nothing() {
        let mut buf = Vec::new();
        write_report(&mut buf, "Global", &[]).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "stale content that is longer than the report\n".repeat(10)).unwrap();
        print_and_save(&path, "Global", &sample()[..1]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "Global alignment no. 1:\nAC-T\nACGT\nScore: 1\n\n");
    }
}
