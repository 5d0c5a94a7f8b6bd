//! Command-line front end for inspecting pairmap offsets.
//!
//! # Usage
//!
//! Offset of the pair (1, 2) among 4 nodes:
//!
//! ```sh
//! pairmap encode xxpos -n 4 1 2
//! ```
//!
//! Which 1-based pair sits at offset 6:
//!
//! ```sh
//! pairmap rev xxpos -n 4 6
//! ```
//!
//! The whole `ypos` block with variable names:
//!
//! ```sh
//! pairmap columns ypos -n 3
//! ```
//!
//! Set `RUST_LOG=debug` to see what is being computed.

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use pairmap_core::{Encoding, IndexError, Key, rev};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the offset of a node or a pair of nodes.
    Encode {
        /// Encoding: xpos, xxpos, upos or ypos.
        encoding: Encoding,
        /// Number of nodes.
        #[arg(short, long = "nodes", value_name = "NNODES")]
        nnodes: usize,
        /// First node index (zero-based; 1-based for upos).
        i: usize,
        /// Second node index, for pair encodings (zero-based).
        j: Option<usize>,
    },
    /// Print the 1-based node or pair stored at an offset.
    Rev {
        /// Encoding: xpos, xxpos, upos or ypos.
        encoding: Encoding,
        /// Number of nodes.
        #[arg(short, long = "nodes", value_name = "NNODES")]
        nnodes: usize,
        /// Offset to look up.
        target: usize,
    },
    /// Print every column of an encoding's block as `offset<TAB>name`.
    Columns {
        /// Encoding: xpos, xxpos, upos or ypos.
        encoding: Encoding,
        /// Number of nodes.
        #[arg(short, long = "nodes", value_name = "NNODES")]
        nnodes: usize,
    },
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    Index(#[from] IndexError),
    #[display("failed to write output: {_0}")]
    Io(#[from] io::Error),
    #[display("{encoding} takes {expected}")]
    Arity {
        encoding: Encoding,
        expected: &'static str,
    },
    #[display("the grid needs at least one node")]
    NoNodes,
    #[display("node {index} is out of range for {nnodes} nodes")]
    OutOfRange { index: usize, nnodes: usize },
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let mut stdout = io::stdout().lock();
    match run(args.command, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("command failed: {err:?}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::Encode {
            encoding,
            nnodes,
            i,
            j,
        } => {
            let key = key_for(encoding, i, j, nnodes)?;
            log::debug!("encoding {key:?} with {encoding} over {nnodes} nodes");
            writeln!(out, "{}", encoding.encode(key, nnodes)?)?;
        }
        Command::Rev {
            encoding,
            nnodes,
            target,
        } => {
            log::debug!("scanning {encoding} over {nnodes} nodes for offset {target}");
            match rev(nnodes, encoding, target) {
                Some(label) => writeln!(out, "{label}")?,
                None => writeln!(out, "not found")?,
            }
        }
        Command::Columns { encoding, nnodes } => {
            log::debug!(
                "{encoding} block over {nnodes} nodes: start={}, len={}",
                encoding.block_start(nnodes),
                encoding.block_len(nnodes)
            );
            for (key, offset) in encoding.columns(nnodes) {
                writeln!(out, "{offset}\t{}", encoding.column_name(key)?)?;
            }
        }
    }
    Ok(())
}

/// Builds the key for `encode`, rejecting indices outside the grid.
///
/// Pair indices are zero-based and must be below `nnodes`; the `upos` index
/// is 1-based and may be at most `nnodes`.
fn key_for(
    encoding: Encoding,
    i: usize,
    j: Option<usize>,
    nnodes: usize,
) -> Result<Key, CliError> {
    if nnodes == 0 {
        return Err(CliError::NoNodes);
    }
    let check = |index: usize, max: usize| {
        if index <= max {
            Ok(index)
        } else {
            Err(CliError::OutOfRange { index, nnodes })
        }
    };
    match (encoding.takes_pair(), j) {
        (true, Some(j)) => Ok(Key::Pair(check(i, nnodes - 1)?, check(j, nnodes - 1)?)),
        (false, None) => Ok(Key::Node(check(i, nnodes)?)),
        (true, None) => Err(CliError::Arity {
            encoding,
            expected: "two node indices",
        }),
        (false, Some(_)) => Err(CliError::Arity {
            encoding,
            expected: "one node index",
        }),
    }
}
