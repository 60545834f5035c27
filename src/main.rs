// src/main.rs

use anyhow::Result;

fn main() -> Result<()> {
    fsplit::commands::run_cli()
}
