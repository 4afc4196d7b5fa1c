use crate::analytics::domain::RelationKind;
use crate::application::dto::OutputFormat;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Homebrew install analytics and dependency relations
#[derive(Parser, Debug)]
#[command(name = "brew-analytics")]
#[command(version)]
#[command(propagate_version = true)]
#[command(
    about = "Fetch Homebrew analytics and build install panels, dependency trees and matrices",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format: json or markdown [default: json]
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to ./brew-analytics.config.yml when present)
    #[arg(short, long, global = true, env = "BREW_ANALYTICS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Ignore the metadata cache and fetch everything again
    #[arg(long, global = true)]
    pub refresh: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (no progress output, only errors are logged)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install counts, trends and install-on-request ratios
    Installs,

    /// Dependency edges of every formula in the analytics, plus popularity
    Edges {
        #[command(flatten)]
        relation: RelationArgs,
    },

    /// Transitive dependency tree of one formula
    Tree {
        /// Formula at the root of the tree
        formula: String,

        #[command(flatten)]
        relation: RelationArgs,

        #[command(flatten)]
        edges: EdgesFileArgs,
    },

    /// Adjacency matrix of the most depended-upon formulas
    Matrix {
        /// Number of formulas in the matrix [default: 100]
        #[arg(long, value_parser = parse_positive)]
        top: Option<usize>,

        #[command(flatten)]
        relation: RelationArgs,

        #[command(flatten)]
        edges: EdgesFileArgs,
    },
}

#[derive(ClapArgs, Debug, Clone, Copy)]
pub struct RelationArgs {
    /// Relation: dependencies, recommended, optional or requirements
    #[arg(short, long, default_value = "dependencies")]
    pub relation: RelationKind,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct EdgesFileArgs {
    /// Read edges from a file written by the `edges` command instead of
    /// fetching live data
    #[arg(short, long = "edges-file", value_name = "FILE")]
    pub edges_file: Option<PathBuf>,
}

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be greater than 0".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
