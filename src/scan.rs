use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::buffer::PixelBuffer;
use crate::chroma::is_chroma_key;
use crate::codec::decode_rgba;
use crate::foundation::error::PaintResult;

/// True if any pixel is exactly the chroma-key marker.
pub fn contains_chroma_key(buf: &PixelBuffer) -> bool {
    buf.pixels().any(is_chroma_key)
}

/// One line of a scan report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanEntry {
    pub name: PathBuf,
    pub contains: bool,
}

impl fmt::Display for ScanEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File: {}. Contains_color: {}.",
            self.name.display(),
            u8::from(self.contains)
        )
    }
}

/// Scan each file in order. The first file that fails to decode aborts the scan.
#[tracing::instrument(skip_all, fields(files = paths.len()))]
pub fn scan_files<P: AsRef<Path>>(paths: &[P]) -> PaintResult<Vec<ScanEntry>> {
    let mut entries = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        let buf = decode_rgba(path)?;
        let contains = contains_chroma_key(&buf);
        tracing::debug!(file = %path.display(), contains, "scanned");
        entries.push(ScanEntry {
            name: path.to_path_buf(),
            contains,
        });
    }
    Ok(entries)
}

pub fn write_report<W: Write>(mut w: W, entries: &[ScanEntry]) -> PaintResult<()> {
    for entry in entries {
        writeln!(w, "{entry}").context("write scan report")?;
    }
    w.flush().context("flush scan report")?;
    Ok(())
}
