use std::fmt::Write;

use anyhow::{anyhow, bail};
use clap::Parser;
use linkseq_list::LinkedSequence;

#[derive(Debug, Parser)]
pub(crate) struct Swap {
    /// zero-based position of the first node
    #[arg(long)]
    pub(crate) first: usize,
    /// zero-based position of the second node
    #[arg(long)]
    pub(crate) second: usize,
    /// values of the sequence, head first
    pub(crate) values: Vec<String>,
}

impl Swap {
    pub(crate) fn run(&self) -> Result<(), anyhow::Error> {
        print!("{}", self.render()?);
        Ok(())
    }

    pub(crate) fn render(&self) -> Result<String, anyhow::Error> {
        let mut sequence: LinkedSequence<String> = self.values.iter().cloned().collect();
        if sequence.is_empty() {
            bail!("cannot swap nodes of an empty sequence");
        }
        let first = sequence
            .handle_at(self.first)
            .ok_or_else(|| out_of_range(self.first, sequence.len()))?;
        let second = sequence
            .handle_at(self.second)
            .ok_or_else(|| out_of_range(self.second, sequence.len()))?;

        tracing::debug!(first = self.first, second = self.second, "swapping positions");
        let mut out = String::new();
        writeln!(out, "before: {}", sequence)?;
        sequence.try_swap_nodes(first, second)?;
        writeln!(out, "after: {}", sequence)?;
        Ok(out)
    }
}

fn out_of_range(position: usize, len: usize) -> anyhow::Error {
    anyhow!(
        "position {} is out of range for a sequence of {} values",
        position,
        len
    )
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    fn swap(first: usize, second: usize, values: &[&str]) -> Swap {
        Swap {
            first,
            second,
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn test_render_swap() {
        let out = swap(1, 3, &["10", "20", "30", "40", "50"]).render().unwrap();
        assert_snapshot!(out, @r"
        before: (10, 20, 30, 40, 50)
        after: (10, 40, 30, 20, 50)
        ");
    }

    #[test]
    fn test_render_same_position() {
        let out = swap(0, 0, &["a", "b"]).render().unwrap();
        assert_eq!(out, "before: (a, b)\nafter: (a, b)\n");
    }

    #[test]
    fn test_out_of_range() {
        let err = swap(0, 5, &["a", "b"]).render().unwrap_err();
        assert_eq!(
            err.to_string(),
            "position 5 is out of range for a sequence of 2 values"
        );
    }

    #[test]
    fn test_empty() {
        assert!(swap(0, 0, &[]).render().is_err());
    }
}
