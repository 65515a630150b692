//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `schema`: Infer a JSON Schema from the variables a template references
//! - `render`: Render a template against one or more JSON data files
//! - `html`: Render a JSON-Schema-driven form to static HTML
//! - `init`: Initialize formgen configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Schema(cmd)) => cmd.common.verbose,
            Some(Command::Render(cmd)) => cmd.common.verbose,
            Some(Command::Html(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Expression delimiters (override config file).
#[derive(Debug, Clone, Default, Args)]
pub struct DelimiterArgs {
    /// Marker opening an output expression (default: "<%=")
    #[arg(long, value_name = "MARKER", allow_hyphen_values = true)]
    pub open: Option<String>,

    /// Marker closing an output expression (default: "%>")
    #[arg(long, value_name = "MARKER", allow_hyphen_values = true)]
    pub close: Option<String>,
}

#[derive(Debug, Args)]
pub struct SchemaCommand {
    /// Path to the template file
    #[arg(long)]
    pub template: PathBuf,

    /// Path to the output JSON file (default: stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub delimiters: DelimiterArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Path to the template file
    #[arg(long)]
    pub template: PathBuf,

    /// Path to a JSON data file, exposed under its file name without extension.
    /// Can be specified multiple times: --data input.json --data metadata.json
    #[arg(long, required = true)]
    pub data: Vec<PathBuf>,

    #[command(flatten)]
    pub delimiters: DelimiterArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct HtmlCommand {
    /// Path to the form JSON schema file
    #[arg(long)]
    pub schema: PathBuf,

    /// Path to the UI schema JSON file
    #[arg(long)]
    pub style: Option<PathBuf>,

    /// Path to the form data JSON file
    #[arg(long)]
    pub data: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a JSON Schema for the variables a template references
    Schema(SchemaCommand),
    /// Render a template with data from JSON files
    Render(RenderCommand),
    /// Render a form for a JSON schema as static HTML
    Html(HtmlCommand),
    /// Initialize a new .formgenrc.json configuration file
    Init,
}
