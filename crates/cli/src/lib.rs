mod complete;
mod inspect;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "stencil-ls",
    version,
    about = "Language server for Stencil components",
    long_about = "Completion, diagnostics and document links for Stencil web components. \
                  Run `stencil-ls lsp` from an editor, or use the inspection commands to see \
                  what the server extracts from a single file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the Language Server Protocol (LSP) server on stdio
    Lsp,
    /// Print the component metadata extracted from a file as JSON
    Inspect {
        /// Component source file (.tsx or .ts)
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
    /// Print the completion candidates at a position in a file
    #[command(long_about = "Lists completions exactly as the server would offer them, \
                            with deferred items already resolved.")]
    Complete {
        #[arg(value_name = "FILE")]
        path: PathBuf,
        /// Zero-based line
        #[arg(long)]
        line: u32,
        /// Zero-based UTF-16 column
        #[arg(long)]
        character: u32,
    },
    /// Print the JSON schema of the component metadata record
    Schema,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // The server owns stdout, so only the CLI commands log to stderr
    let (component, to_stderr) = match &cli.command {
        Commands::Lsp => ("lsp", false),
        _ => ("cli", true),
    };
    let _guard = stencil_ls_core::logging::init_logging(component, to_stderr);

    match cli.command {
        Commands::Lsp => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(stencil_ls_lsp::run_server())?;
            Ok(())
        }
        Commands::Inspect { path } => inspect::run(path),
        Commands::Complete {
            path,
            line,
            character,
        } => complete::run(path, line, character),
        Commands::Schema => {
            let schema = schemars::schema_for!(stencil_ls_api::ComponentMetadata);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
    }
}
