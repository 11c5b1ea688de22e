//! CLI entry point for the `adjg` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use adjgraph::cli::commands;
use adjgraph::GraphError;

#[derive(Parser)]
#[command(
    name = "adjg",
    about = "adjg — depth-first algorithms and minimum spanning trees over JSON graph documents"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about a graph document
    Info {
        /// Path to the JSON graph document
        file: PathBuf,
    },
    /// Depth-first walk from a start node
    Dfs {
        /// Path to the JSON graph document
        file: PathBuf,
        /// Start node
        start: String,
    },
    /// Detect a directed cycle
    Cycle {
        /// Path to the JSON graph document
        file: PathBuf,
    },
    /// Print a topological order of the nodes
    Topo {
        /// Path to the JSON graph document
        file: PathBuf,
    },
    /// Minimum spanning tree (Prim) from a start node
    Mst {
        /// Path to the JSON graph document
        file: PathBuf,
        /// Start node
        start: String,
        /// Write the tree as a graph document instead of printing it
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Reverse every edge
    Transpose {
        /// Path to the JSON graph document
        file: PathBuf,
        /// Write the result here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Add the reverse of every edge
    Undirected {
        /// Path to the JSON graph document
        file: PathBuf,
        /// Write the result here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Render the graph as Graphviz DOT
    Dot {
        /// Path to the JSON graph document
        file: PathBuf,
        /// Render as a strict undirected graph
        #[arg(long)]
        undirected: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Dfs { file, start } => commands::cmd_dfs(&file, &start, json),
        Commands::Cycle { file } => commands::cmd_cycle(&file, json),
        Commands::Topo { file } => commands::cmd_topo(&file, json),
        Commands::Mst {
            file,
            start,
            output,
        } => commands::cmd_mst(&file, &start, output.as_deref(), json),
        Commands::Transpose { file, output } => commands::cmd_transpose(&file, output.as_deref()),
        Commands::Undirected { file, output } => {
            commands::cmd_undirected(&file, output.as_deref())
        }
        Commands::Dot { file, undirected } => commands::cmd_dot(&file, undirected),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) | GraphError::InvalidWeight(_) => 2,
            GraphError::UnknownNode(_) | GraphError::InvalidStart(_) => 4,
        };
        process::exit(code);
    }
}
