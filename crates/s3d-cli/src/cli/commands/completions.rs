//! `s3d completions <shell>` and `s3d man`.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

use crate::cli::Cli;

pub fn run_completions<W: Write>(out: &mut W, shell: Shell) -> Result<()> {
    clap_complete::generate(shell, &mut Cli::command(), "s3d", out);
    Ok(())
}

pub fn run_man<W: Write>(out: &mut W) -> Result<()> {
    clap_mangen::Man::new(Cli::command()).render(out)?;
    Ok(())
}
