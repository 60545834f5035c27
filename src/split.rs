// src/split.rs
//! The two split routines: fixed-size chunks and fixed-count chunks.
//! Both read the source strictly sequentially and finish each part
//! (create, write, flush, close) before starting the next. Output lands
//! beside the source as `<stem>.<index><ext>`, index starting at 1.

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use crate::util;

/// Split `source` into parts of `chunk_size` bytes each; the final part
/// holds whatever remains and may be shorter. Stops on the first
/// zero-length read, so the part count follows the data.
///
/// Returns the number of parts written.
pub fn split_by_size(source: &Path, chunk_size: u64) -> Result<u64> {
    let mut reader =
        File::open(source).with_context(|| format!("opening {}", source.display()))?;

    let mut buf = Vec::new();
    let mut index = 0u64;
    loop {
        buf.clear();
        // take() caps the read at chunk_size; the buffer only ever grows
        // to the bytes actually present, never the requested size.
        let read = Read::by_ref(&mut reader)
            .take(chunk_size)
            .read_to_end(&mut buf)
            .with_context(|| format!("reading chunk {} of {}", index + 1, source.display()))?;
        if read == 0 {
            break;
        }
        index += 1;
        let out_path = util::part_path(source, index);
        write_part(&out_path, &buf)?;
        println!("{}: {} ({} bytes)", index, out_path.display(), read);
    }

    println!("Completed!");
    Ok(index)
}

/// Split `source` into exactly `count` parts. Every part is
/// `file_size / count` bytes except the last, which also absorbs the
/// remainder. When `count` exceeds the file length the leading parts are
/// zero bytes; all `count` files are still created.
///
/// Returns the number of parts written (always `count`).
pub fn split_by_count(source: &Path, count: u64) -> Result<u64> {
    let file_size = source
        .metadata()
        .with_context(|| format!("reading metadata for {}", source.display()))?
        .len();
    let base_size = file_size / count;
    let last_size = base_size + file_size % count;

    let mut reader =
        File::open(source).with_context(|| format!("opening {}", source.display()))?;

    let mut buf = Vec::new();
    for index in 1..=count {
        let size = if index == count { last_size } else { base_size };
        buf.clear();
        Read::by_ref(&mut reader)
            .take(size)
            .read_to_end(&mut buf)
            .with_context(|| format!("reading chunk {} of {}", index, source.display()))?;
        let out_path = util::part_path(source, index);
        write_part(&out_path, &buf)?;
        println!("{}: {} ({} bytes)", index, out_path.display(), size);
    }

    println!("Completed!");
    Ok(count)
}

/// Create the part file, write the chunk, flush, close. Truncates any
/// existing file at the same path.
fn write_part(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut out =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    out.write_all(bytes)
        .with_context(|| format!("writing {}", path.display()))?;
    out.flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}

/* ===================================== Tests ======================================= */
