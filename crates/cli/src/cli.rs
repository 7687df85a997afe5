use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Configuration domain a format belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Domain {
    /// Agent definitions.
    #[default]
    Agent,
    /// MCP server sets.
    Mcp,
}

/// Command-line interface for the `assistantkit` application.
#[derive(Debug, Parser)]
#[command(
    name = "assistantkit",
    version,
    about = "Generate and convert agent and MCP configuration for AI coding assistants"
)]
pub struct Cli {
    /// Log debug output to stderr (overrides `RUST_LOG`).
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available `assistantkit` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generates platform agent files from a directory of canonical specs.
    Generate {
        /// Directory of canonical agent specs (`*.md`).
        #[arg(
            long,
            env = "ASSISTANTKIT_SPEC_DIR",
            default_value = "plugins/spec/agents",
            value_name = "DIR"
        )]
        spec: PathBuf,
        /// Output format for `--output`.
        #[arg(long, default_value = "claude")]
        format: String,
        /// Output directory for a single format.
        #[arg(long, value_name = "DIR", conflicts_with = "targets")]
        output: Option<PathBuf>,
        /// Several targets as `format:dir` pairs, comma-separated.
        #[arg(long, env = "ASSISTANTKIT_TARGETS", value_name = "LIST")]
        targets: Option<String>,
    },
    /// Generates every target listed in a project's `deployment.json`.
    Project {
        /// Project directory holding `agents/` and `deployment.json`.
        dir: PathBuf,
        /// Only generate targets with this priority (e.g. p1).
        #[arg(long)]
        priority: Option<String>,
    },
    /// Converts one file between formats.
    Convert {
        /// File to read.
        input: PathBuf,
        /// Source format name.
        #[arg(long)]
        from: String,
        /// Destination format name.
        #[arg(long)]
        to: String,
        #[arg(long, value_enum, default_value_t = Domain::Agent)]
        domain: Domain,
        /// Write here instead of stdout.
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Lists registered formats.
    Formats {
        /// Limit to one domain.
        #[arg(long, value_enum)]
        domain: Option<Domain>,
    },
    /// Checks a plugin directory holds the required files.
    Validate {
        /// Plugin directory.
        dir: PathBuf,
        /// Required path relative to the directory (repeatable); defaults to the Claude plugin manifest.
        #[arg(long = "require", value_name = "FILE")]
        require: Vec<String>,
    },
}
