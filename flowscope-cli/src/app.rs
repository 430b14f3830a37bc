use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// flowscope - build and run control-flow graphs for a tiny register language
#[derive(Debug, Parser)]
#[command(name = "flowscope", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a program and run it to completion, printing the final environment.
    Run {
        /// Path to the program file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Abort execution after this many instructions.
        #[arg(long, value_name = "N")]
        max_steps: Option<u64>,
    },

    /// Build a program and print its control-flow graph in Graphviz DOT format.
    Dot {
        /// Path to the program file.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}
