//! Execution of a command stream against a network
//!
//! A [`Session`] owns the network and the output sink. Errors in individual commands are
//! reported and the session goes on with the next command.
//!
//! ```
//! # use gatesim::session::{ExitPolicy, Session};
//! # use gatesim::io::CommandReader;
//! let commands = "XOR A B C SET A 1 SIM OUT C";
//! let mut session = Session::new(Vec::new(), ExitPolicy::EndOfInput);
//! session.run(CommandReader::new(commands.as_bytes())).unwrap();
//! assert_eq!(session.into_inner(), b"C: 1\n");
//! ```

use std::io::{self, BufRead, Write};

use log::{debug, warn};
use thiserror::Error;

use crate::io::{Command, CommandReader, ParseError};
use crate::Network;

/// Condition to stop reading commands, besides the end of the stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExitPolicy {
    /// Read until the end of the stream
    EndOfInput,
    /// Stop after the first `OUT ALL`
    #[default]
    OutAll,
    /// Stop after the first `OUT` of a single signal
    OutSignal,
}

/// Whether to go on reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command
    Continue,
    /// Stop the session
    Stop,
}

/// Error while executing a command
#[derive(Debug, Error)]
pub enum SessionError {
    /// The network rejected the command
    #[error(transparent)]
    Network(#[from] crate::Error),

    /// The output could not be written
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A network driven by commands, printing query results to `W`
pub struct Session<W> {
    network: Network,
    policy: ExitPolicy,
    out: W,
}

impl<W: Write> Session<W> {
    /// Create a session with an empty network
    pub fn new(out: W, policy: ExitPolicy) -> Self {
        Session {
            network: Network::new(),
            policy,
            out,
        }
    }

    /// Access the network
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Consume the session and return the output sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Execute a single command
    ///
    /// The exit policy only triggers on queries that succeed.
    pub fn execute(&mut self, c: &Command) -> Result<Flow, SessionError> {
        match c {
            Command::Gate {
                kind,
                inputs,
                output,
            } => {
                self.network.declare_gate(*kind, inputs, *output)?;
            }
            Command::Sim => self.network.evaluate(),
            Command::Set(name, value) => self.network.set_signal(*name, *value)?,
            Command::Out(name) => {
                let (name, value) = self.network.query_signal(*name)?;
                write_signal(&mut self.out, name, value)?;
                if self.policy == ExitPolicy::OutSignal {
                    return Ok(Flow::Stop);
                }
            }
            Command::OutAll => {
                for (name, value) in self.network.query_all() {
                    write_signal(&mut self.out, name, value)?;
                }
                if self.policy == ExitPolicy::OutAll {
                    return Ok(Flow::Stop);
                }
            }
        }
        Ok(Flow::Continue)
    }

    /// Execute commands until the stream ends or the exit policy stops the session
    ///
    /// Returns the number of commands that failed. Only failures to read or write abort the session.
    pub fn run<R: BufRead>(&mut self, commands: CommandReader<R>) -> io::Result<usize> {
        let mut nb_errors = 0;
        for c in commands {
            let c = match c {
                Ok(c) => c,
                Err(ParseError::Io(e)) => return Err(e),
                Err(e) => {
                    warn!("{e}");
                    nb_errors += 1;
                    continue;
                }
            };
            match self.execute(&c) {
                Ok(Flow::Continue) => (),
                Ok(Flow::Stop) => {
                    debug!("Stopping after {c}");
                    break;
                }
                Err(SessionError::Io(e)) => return Err(e),
                Err(e) => {
                    warn!("{c}: {e}");
                    nb_errors += 1;
                }
            }
        }
        self.out.flush()?;
        Ok(nb_errors)
    }
}

fn write_signal<W: Write>(w: &mut W, name: char, value: bool) -> io::Result<()> {
    writeln!(w, "{}: {}", name, value as u8)
}
