// src/util.rs
//! Small pure helpers: output-path naming and CLI numeric parsing.

use std::path::{Path, PathBuf};

/// Output path for chunk `index`: `<dir>/<stem>.<index><ext>`, beside the
/// source. `data/big.log` -> `data/big.3.log`; extensionless inputs get
/// `big.3` with no trailing dot.
pub fn part_path(source: &Path, index: u64) -> PathBuf {
    let dir = source.parent().unwrap_or_else(|| Path::new(""));
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("part");
    let name = match source.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}.{index}.{ext}"),
        None => format!("{stem}.{index}"),
    };
    dir.join(name)
}

/// Parse the numeric CLI argument. Only strictly positive integers are
/// accepted; signs, decimals, and junk all come back as `None`.
pub fn parse_positive(arg: &str) -> Option<u64> {
    match arg.trim().parse::<u64>() {
        Ok(n) if n > 0 => Some(n),
        _ => None,
    }
}

/// Strip surrounding double quotes from a path argument, if any.
pub fn strip_quotes(s: &str) -> &str {
    s.trim_matches('"')
}

/* ===================================== Tests ======================================= */
