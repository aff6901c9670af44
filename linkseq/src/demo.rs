use std::fmt::Write;

use anyhow::Context;
use clap::Parser;
use linkseq_list::LinkedSequence;

#[derive(Debug, Parser)]
pub(crate) struct Demo {}

impl Demo {
    pub(crate) fn run(&self) -> Result<(), anyhow::Error> {
        print!("{}", render()?);
        Ok(())
    }
}

pub(crate) fn render() -> Result<String, anyhow::Error> {
    let mut sequence: LinkedSequence<i32> = [10, 20, 30, 40, 50].into_iter().collect();
    let mut out = String::new();
    writeln!(out, "Original list: {}", sequence)?;

    let second = sequence.handle_at(1).context("no second node")?;
    let fourth = sequence.handle_at(3).context("no fourth node")?;
    writeln!(out, "Swapping nodes (20) and (40) ...")?;
    sequence.try_swap_nodes(second, fourth)?;
    writeln!(out, "After swap: {}", sequence)?;

    let head = sequence.head_handle().context("no head")?;
    let tail = sequence.tail_handle().context("no tail")?;
    writeln!(
        out,
        "Swapping head and tail ({}) and ({}) ...",
        sequence.get(head).context("head not found")?,
        sequence.get(tail).context("tail not found")?,
    )?;
    sequence.try_swap_nodes(head, tail)?;
    writeln!(out, "After swap: {}", sequence)?;

    let head = sequence.head_handle().context("no head")?;
    writeln!(out, "Swapping a node with itself (no change) ...")?;
    sequence.try_swap_nodes(head, head)?;
    writeln!(out, "After swap: {}", sequence)?;
    Ok(out)
}
