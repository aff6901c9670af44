mod demo;
mod show;
mod swap;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_ENV: &str = "LINKSEQ_LOG";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log swaps and rejected handles to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a sequence from the given values and describe it.
    Show(show::Show),
    /// Swap the nodes at two positions of a sequence.
    Swap(swap::Swap),
    /// Run the swap demonstration on (10, 20, 30, 40, 50).
    Demo(demo::Demo),
}

fn init_logging(verbose: bool) {
    // an explicit filter in the environment wins over --verbose
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Show(show) => {
            show.run()?;
        }
        Commands::Swap(swap) => {
            swap.run()?;
        }
        Commands::Demo(demo) => {
            demo.run()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_swap() {
        let cli = Cli::try_parse_from([
            "linkseq", "swap", "--first", "1", "--second", "3", "a", "b", "c", "d",
        ])
        .unwrap();
        match cli.command {
            Commands::Swap(swap) => {
                assert_eq!(swap.first, 1);
                assert_eq!(swap.second, 3);
                assert_eq!(swap.values, vec!["a", "b", "c", "d"]);
            }
            _ => panic!("expected swap"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_verbose_after_subcommand() {
        let cli = Cli::try_parse_from(["linkseq", "demo", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }
}
