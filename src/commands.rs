// src/commands.rs

use anyhow::Result;
use std::{
    env,
    io,
    path::Path,
};

use crate::{split, util};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Size(u64),
    Count(u64),
}

#[derive(Debug)]
struct Request {
    path: String,
    mode: Mode,
}

pub fn run_cli() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Echo our own name first, like the classic console tools do.
    let exe = args
        .first()
        .map(|a| Path::new(a))
        .and_then(|p| p.file_name())
        .and_then(|s| s.to_str())
        .unwrap_or("fsplit");
    println!("{exe}");

    let Some(req) = parse_args(args.get(1..).unwrap_or(&[])) else {
        print_help();
        return Ok(());
    };

    let source = Path::new(&req.path);
    let outcome = match req.mode {
        Mode::Size(bytes) => split::split_by_size(source, bytes),
        Mode::Count(n) => split::split_by_count(source, n),
    };

    match outcome {
        Ok(_parts) => Ok(()),
        Err(err) if is_permission_denied(&err) => {
            // Parts finished before the failure stay on disk; no rollback.
            println!("ERROR: Access is denied.");
            print_help();
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Exactly three arguments: path, mode flag, positive integer. The flag is
/// matched case-insensitively; the path may be quoted. Anything else is a
/// usage error and comes back as `None`.
fn parse_args(args: &[String]) -> Option<Request> {
    if args.len() != 3 {
        return None;
    }

    let path = util::strip_quotes(&args[0]).to_string();

    let Some(n) = util::parse_positive(&args[2]) else {
        println!("ERROR: argument '{}' is not a positive integer.", args[2]);
        return None;
    };

    let mode = match args[1].to_ascii_lowercase().as_str() {
        "-size" => Mode::Size(n),
        "-count" => Mode::Count(n),
        _ => return None,
    };

    Some(Request { path, mode })
}

/// True when any error in the chain is an `io::Error` with kind
/// `PermissionDenied`. That is the one failure the dispatcher reports
/// politely instead of propagating.
fn is_permission_denied(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|io_err| io_err.kind() == io::ErrorKind::PermissionDenied)
}

fn print_help() {
    println!(
        r#"
Usages:

Option 1 - Splits the file into pre-defined size files (the remainder is placed in an additional last file):
    fsplit <file path> -size <size in bytes>

Option 2 - Splits the file into equally sized files (the last file absorbs the remainder):
    fsplit <file path> -count <number of files>
"#
    );
}

/* ===================================== Tests ======================================= */
