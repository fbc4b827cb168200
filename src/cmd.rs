//! Command line interface

use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::warn;

use crate::io::{read_command_file, read_network, CommandReader};
use crate::network::stats::stats;
use crate::session::{ExitPolicy, Session};

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Command line arguments
#[derive(Subcommand)]
pub enum Commands {
    /// Run a command stream against a new network
    ///
    /// Commands declare gates (AND, OR, XOR, NAND, NOR, XNOR with three signal names,
    /// NOT with two), set signals (SET A 1), evaluate the network (SIM)
    /// and print signals (OUT A, OUT ALL).
    #[clap(alias = "sim")]
    Run(RunArgs),

    /// Show statistics about the network declared by a command file
    ///
    /// Only gate declarations are taken into account.
    #[clap()]
    Show(ShowArgs),
}

impl Commands {
    /// Execute the command
    pub fn run(&self) -> anyhow::Result<()> {
        match self {
            Commands::Run(a) => a.run(),
            Commands::Show(a) => a.run(),
        }
    }
}

/// Command arguments for running commands
#[derive(Args)]
pub struct RunArgs {
    /// Command file; read from standard input if absent
    file: Option<PathBuf>,

    /// When to stop reading commands
    #[arg(long, value_enum, default_value_t = ExitPolicy::OutAll)]
    exit_on: ExitPolicy,
}

impl RunArgs {
    pub fn run(&self) -> anyhow::Result<()> {
        let stdout = io::stdout();
        let mut session = Session::new(stdout.lock(), self.exit_on);
        let nb_errors = match &self.file {
            Some(path) => {
                let commands = read_command_file(path)
                    .with_context(|| format!("Unable to open {}", path.display()))?;
                session.run(commands)?
            }
            None => session.run(CommandReader::new(io::stdin().lock()))?,
        };
        if nb_errors != 0 {
            warn!("{} commands failed", nb_errors);
        }
        Ok(())
    }
}

/// Command arguments for network informations
#[derive(Args)]
pub struct ShowArgs {
    /// Command file declaring the network
    file: PathBuf,
}

impl ShowArgs {
    pub fn run(&self) -> anyhow::Result<()> {
        let f = std::fs::File::open(&self.file)
            .with_context(|| format!("Unable to open {}", self.file.display()))?;
        let net = read_network(BufReader::new(f))?;
        println!("Network stats:\n{}\n\n", stats(&net));
        Ok(())
    }
}
