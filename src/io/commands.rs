//! Reader for the command language
//!
//! Commands are whitespace-separated tokens; line breaks carry no meaning:
//! ```text
//!     AND A B C
//!     NOT C D
//!     SET A 1
//!     SET B 1
//!     SIM
//!     OUT D
//!     OUT ALL
//! ```
//! Gate commands list the inputs then the output. Signal names are single characters.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead};

use log::warn;
use thiserror::Error;

use crate::network::GateKind;

/// A command of the command language
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Declare a gate with its inputs and its output
    Gate {
        /// Kind of the gate
        kind: GateKind,
        /// Input names
        inputs: Vec<char>,
        /// Output name
        output: char,
    },
    /// Evaluate the network
    Sim,
    /// Set the value of a signal
    Set(char, bool),
    /// Show the value of a single signal
    Out(char),
    /// Show the value of all signals
    OutAll,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Gate {
                kind,
                inputs,
                output,
            } => {
                write!(f, "{kind}")?;
                for i in inputs {
                    write!(f, " {i}")?;
                }
                write!(f, " {output}")
            }
            Command::Sim => write!(f, "SIM"),
            Command::Set(name, value) => write!(f, "SET {} {}", name, *value as u8),
            Command::Out(name) => write!(f, "OUT {name}"),
            Command::OutAll => write!(f, "OUT ALL"),
        }
    }
}

/// Error while reading a command
#[derive(Debug, Error)]
pub enum ParseError {
    /// The keyword does not start a known command
    #[error("unknown command {0}")]
    UnknownCommand(String),

    /// The input ended in the middle of a command
    #[error("missing argument for {0}")]
    MissingArgument(String),

    /// A signal name is not a single character
    #[error("invalid signal name {0}")]
    InvalidName(String),

    /// A signal value is not 0 or 1
    #[error("invalid signal value {0}, expected 0 or 1")]
    InvalidValue(String),

    /// The command is well-formed but could not be applied to the network
    #[error(transparent)]
    Network(#[from] crate::Error),

    /// Failure of the underlying reader
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Iterator over the commands of a text stream
///
/// A malformed command consumes the arguments it expects, so that reading resumes at the
/// next command. An unknown keyword is skipped alone. Bytes that are not valid UTF-8 are
/// replaced by U+FFFD.
pub struct CommandReader<R> {
    reader: R,
    line: Vec<u8>,
    nb_lines: usize,
    tokens: VecDeque<String>,
}

impl<R: BufRead> CommandReader<R> {
    /// Create a reader over a buffered text stream
    pub fn new(r: R) -> Self {
        CommandReader {
            reader: r,
            line: Vec::new(),
            nb_lines: 0,
            tokens: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>, ParseError> {
        while self.tokens.is_empty() {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
            self.nb_lines += 1;
            let l = String::from_utf8_lossy(&self.line);
            if let Cow::Owned(_) = l {
                warn!("Invalid UTF-8 on line {}", self.nb_lines);
            }
            self.tokens
                .extend(l.split_whitespace().map(|t| t.to_string()));
        }
        Ok(self.tokens.pop_front())
    }

    /// Read the `n` arguments of a command before any of them is checked
    fn arguments(&mut self, command: &str, n: usize) -> Result<Vec<String>, ParseError> {
        let mut ret = Vec::with_capacity(n);
        for _ in 0..n {
            let arg = self
                .next_token()?
                .ok_or_else(|| ParseError::MissingArgument(command.to_string()))?;
            ret.push(arg);
        }
        Ok(ret)
    }

    fn command(&mut self, keyword: &str) -> Result<Command, ParseError> {
        if let Ok(kind) = keyword.parse::<GateKind>() {
            let args = self.arguments(keyword, kind.arity() + 1)?;
            let mut names = args
                .iter()
                .map(|a| parse_name(a))
                .collect::<Result<Vec<char>, ParseError>>()?;
            let output = names.pop().unwrap_or_default();
            return Ok(Command::Gate {
                kind,
                inputs: names,
                output,
            });
        }
        match keyword {
            "SIM" => Ok(Command::Sim),
            "SET" => {
                let args = self.arguments(keyword, 2)?;
                let name = parse_name(&args[0])?;
                let value = parse_value(&args[1])?;
                Ok(Command::Set(name, value))
            }
            "OUT" => {
                let args = self.arguments(keyword, 1)?;
                if args[0] == "ALL" {
                    Ok(Command::OutAll)
                } else {
                    Ok(Command::Out(parse_name(&args[0])?))
                }
            }
            _ => Err(ParseError::UnknownCommand(keyword.to_string())),
        }
    }
}

impl<R: BufRead> Iterator for CommandReader<R> {
    type Item = Result<Command, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Err(e) => Some(Err(e)),
            Ok(None) => None,
            Ok(Some(keyword)) => Some(self.command(&keyword)),
        }
    }
}

fn parse_name(token: &str) -> Result<char, ParseError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ParseError::InvalidName(token.to_string())),
    }
}

fn parse_value(token: &str) -> Result<bool, ParseError> {
    match token {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(ParseError::InvalidValue(token.to_string())),
    }
}
