use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use docdelta_diff::{compare, SectionSummary};
use docdelta_segment::{split_lines, Segmenter};
use docdelta_types::{DiffConfig, DiffError, DiffResult, DocumentVersion};

use crate::cli::*;
use crate::render;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let output = match cli.command {
        Command::Compare(args) => cmd_compare(args, cli.format)?,
        Command::Sections(args) => cmd_sections(args, cli.format)?,
    };
    println!("{output}");
    Ok(())
}

/// Read the extracted text of one document version.
pub fn load_document(path: &Path, version: DocumentVersion) -> DiffResult<String> {
    fs::read_to_string(path).map_err(|e| DiffError::InputUnavailable {
        version,
        reason: format!("{}: {e}", path.display()),
    })
}

fn load_config(path: Option<&Path>) -> anyhow::Result<DiffConfig> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            DiffConfig::from_toml_str(&text).with_context(|| format!("loading config {}", path.display()))
        }
        None => Ok(DiffConfig::default()),
    }
}

fn cmd_compare(args: CompareArgs, format: OutputFormat) -> anyhow::Result<String> {
    let mut config = load_config(args.config.as_deref())?;
    config.keyword_tracking_list.extend(args.keywords);
    if let Some(window) = args.window {
        config.divergence_window = window;
    }
    if args.section_similarity {
        config.section_similarity = true;
    }

    let original = load_document(&args.original, DocumentVersion::Original)?;
    let modified = load_document(&args.modified, DocumentVersion::Modified)?;
    info!(
        original = %args.original.display(),
        modified = %args.modified.display(),
        "documents loaded"
    );

    let report = compare(&original, &modified, &config)?;
    match format {
        OutputFormat::Text => Ok(render::report(&report, &original, &modified, args.edges)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
    }
}

fn cmd_sections(args: SectionsArgs, format: OutputFormat) -> anyhow::Result<String> {
    let config = load_config(args.config.as_deref())?;
    config.validate()?;
    let text = load_document(&args.path, DocumentVersion::Original)?;
    let sections = Segmenter::from_config(&config).segment(&split_lines(&text));
    let outline: Vec<SectionSummary> = sections.iter().map(SectionSummary::from).collect();

    match format {
        OutputFormat::Text => Ok(render::outline(&outline)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&outline)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    use tempfile::NamedTempFile;

    fn text_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn compare_args(original: &Path, modified: &Path) -> CompareArgs {
        CompareArgs {
            original: original.to_path_buf(),
            modified: modified.to_path_buf(),
            config: None,
            keywords: Vec::new(),
            window: None,
            section_similarity: false,
            edges: 0,
        }
    }

    #[test]
    fn missing_document_is_input_unavailable() {
        let err = load_document(Path::new("/nonexistent/thesis.txt"), DocumentVersion::Modified)
            .unwrap_err();
        assert!(matches!(
            err,
            DiffError::InputUnavailable {
                version: DocumentVersion::Modified,
                ..
            }
        ));
    }

    #[test]
    fn config_file_is_loaded() {
        let file = text_file("divergence_window = 7\n");
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.divergence_window, 7);
        assert!(load_config(Some(Path::new("/nonexistent/docdelta.toml"))).is_err());
    }

    #[test]
    fn compare_outputs_json_report() {
        let original = text_file("第一章 引言\nx");
        let modified = text_file("第一章 引言\nx\n第二章 结论\ny");
        let mut args = compare_args(original.path(), modified.path());
        args.keywords = vec!["结论".into()];

        let output = cmd_compare(args, OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["sections"]["entries"][0]["title"], "第二章 结论");
        assert_eq!(json["keywords"][0]["delta"], 1);
    }

    #[test]
    fn compare_outputs_text_report() {
        let original = text_file("第一章 A\n第二章 B");
        let modified = text_file("第一章 A");
        let output = cmd_compare(
            compare_args(original.path(), modified.path()),
            OutputFormat::Text,
        )
        .unwrap();
        assert!(output.contains("第二章 B"));
    }

    #[test]
    fn compare_fails_on_missing_input() {
        let original = text_file("第一章 A");
        let args = compare_args(original.path(), &PathBuf::from("/nonexistent/b.txt"));
        let err = cmd_compare(args, OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("modified document unavailable"));
    }

    #[test]
    fn sections_lists_outline() {
        let file = text_file("封面\n第一章 引言\n内容");
        let args = SectionsArgs {
            path: file.path().to_path_buf(),
            config: None,
        };
        let output = cmd_sections(args, OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 2);
        assert_eq!(json[1]["title"], "第一章 引言");
    }
}
