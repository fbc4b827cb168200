//! Read command streams

mod commands;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

pub use commands::{Command, CommandReader, ParseError};

use crate::Network;

/// Open a command file
pub fn read_command_file(path: &PathBuf) -> Result<CommandReader<BufReader<File>>, ParseError> {
    let f = File::open(path)?;
    Ok(CommandReader::new(BufReader::new(f)))
}

/// Build a network from the gate declarations of a command stream
///
/// Commands other than declarations are ignored. Fails on the first malformed command.
pub fn read_network<R: BufRead>(r: R) -> Result<Network, ParseError> {
    let mut ret = Network::new();
    for c in CommandReader::new(r) {
        if let Command::Gate {
            kind,
            inputs,
            output,
        } = c?
        {
            ret.declare_gate(kind, &inputs, output)?;
        }
    }
    Ok(ret)
}
