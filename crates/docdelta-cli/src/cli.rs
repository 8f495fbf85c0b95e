use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docdelta",
    about = "docdelta: structural comparison of two document revisions",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare an original and a modified revision
    Compare(CompareArgs),
    /// List the sections detected in one document
    Sections(SectionsArgs),
}

#[derive(Args)]
pub struct CompareArgs {
    /// Extracted text of the original revision
    pub original: PathBuf,
    /// Extracted text of the modified revision
    pub modified: PathBuf,
    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Track occurrences of a keyword (repeatable)
    #[arg(short = 'k', long = "keyword")]
    pub keywords: Vec<String>,
    /// Number of leading lines scanned for differences
    #[arg(long)]
    pub window: Option<usize>,
    /// Score content similarity of every retained section
    #[arg(long)]
    pub section_similarity: bool,
    /// Lines shown from the start and end of each document
    #[arg(long, default_value = "5")]
    pub edges: usize,
}

#[derive(Args)]
pub struct SectionsArgs {
    /// Extracted text of the document
    pub path: PathBuf,
    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compare_with_overrides() {
        let cli = Cli::parse_from([
            "docdelta", "compare", "a.txt", "b.txt", "-k", "研究", "-k", "分析", "--window", "10",
            "--format", "json",
        ]);
        assert_eq!(cli.format, OutputFormat::Json);
        let Command::Compare(args) = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(args.original, PathBuf::from("a.txt"));
        assert_eq!(args.keywords, vec!["研究", "分析"]);
        assert_eq!(args.window, Some(10));
        assert_eq!(args.edges, 5);
        assert!(!args.section_similarity);
    }

    #[test]
    fn parses_sections() {
        let cli = Cli::parse_from(["docdelta", "-v", "sections", "thesis.txt"]);
        assert!(cli.verbose);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(matches!(cli.command, Command::Sections(_)));
    }
}
