use std::fmt::Write;

use clap::Parser;
use linkseq_list::LinkedSequence;

#[derive(Debug, Parser)]
pub(crate) struct Show {
    /// values of the sequence, head first
    pub(crate) values: Vec<String>,
}

impl Show {
    pub(crate) fn run(&self) -> Result<(), anyhow::Error> {
        let sequence: LinkedSequence<String> = self.values.iter().cloned().collect();
        print!("{}", describe(&sequence)?);
        Ok(())
    }
}

pub(crate) fn describe(sequence: &LinkedSequence<String>) -> Result<String, anyhow::Error> {
    let mut out = String::new();
    writeln!(out, "sequence: {}", sequence)?;
    writeln!(out, "size: {}", sequence.len())?;
    writeln!(out, "first: {}", sequence.first().map_or("(none)", |v| v.as_str()))?;
    writeln!(out, "last: {}", sequence.last().map_or("(none)", |v| v.as_str()))?;
    writeln!(out, "hash: {:016x}", sequence.combined_hash())?;
    Ok(out)
}
