//! Human-readable rendering of comparison results.

use std::fmt::Write;

use colored::Colorize;

use docdelta_diff::{DiffReport, DocumentStats, PercentChange, PresenceChange, SectionStatus, SectionSummary};
use docdelta_segment::split_lines;
use docdelta_types::SectionKind;

const DIVERGENT_LINE_PREVIEW: usize = 150;
const EDGE_LINE_PREVIEW: usize = 100;

/// Render a full comparison report.
pub fn report(report: &DiffReport, original: &str, modified: &str, edges: usize) -> String {
    let mut out = String::new();
    overview(&mut out, report);
    structure(&mut out, report);
    section_changes(&mut out, report);
    divergence(&mut out, report);
    keywords(&mut out, report);
    if edges > 0 {
        document_edges(&mut out, original, modified, edges);
    }
    out.trim_end().to_string()
}

/// Render one document's outline.
pub fn outline(sections: &[SectionSummary]) -> String {
    let mut out = String::new();
    if sections.is_empty() {
        out.push_str("No sections detected.");
        return out;
    }
    let mut number = 0;
    for section in sections {
        let label = match section.kind {
            SectionKind::Preamble => "[preamble]".dimmed().to_string(),
            SectionKind::Headed => {
                number += 1;
                format!("{number}. {}", section.title)
            }
        };
        let _ = writeln!(
            out,
            "  {label} (lines {}-{}, ~{} tokens)",
            section.start_line + 1,
            section.end_line + 1,
            section.size_metric
        );
    }
    out.trim_end().to_string()
}

fn overview(out: &mut String, report: &DiffReport) {
    let _ = writeln!(out, "{}", "Document comparison".bold());
    document_line(out, "original", &report.original);
    document_line(out, "modified", &report.modified);

    let percent = match report.length_change {
        PercentChange::Percent(p) => format!("{p:+.2}%"),
        PercentChange::DivisionUndefined => "undefined: original is empty".into(),
    };
    let _ = writeln!(out, "  length:     {:+} chars ({percent})", report.char_delta);
    let _ = writeln!(out, "  lines:      {:+}", report.line_delta);
    let _ = writeln!(
        out,
        "  similarity: {}",
        format!("{:.2}%", report.similarity * 100.0).cyan()
    );
    let changes = &report.line_changes;
    let _ = writeln!(
        out,
        "  line diff:  {} / {} in {} hunks\n",
        format!("+{}", changes.additions()).green(),
        format!("-{}", changes.deletions()).red(),
        changes.hunks.len()
    );
}

fn document_line(out: &mut String, label: &str, stats: &DocumentStats) {
    let _ = writeln!(
        out,
        "  {label}:   {} chars, {} lines, {} chapters",
        thousands(stats.chars),
        thousands(stats.lines),
        stats.headers
    );
}

fn structure(out: &mut String, report: &DiffReport) {
    for (label, stats) in [("original", &report.original), ("modified", &report.modified)] {
        let _ = writeln!(out, "{}", format!("Chapter structure ({label})").bold());
        let _ = writeln!(out, "{}\n", outline(&stats.outline));
    }
}

fn section_changes(out: &mut String, report: &DiffReport) {
    let sections = &report.sections;
    let _ = writeln!(
        out,
        "{} retained {}, removed {}, added {}",
        "Chapter changes:".bold(),
        sections.retained(),
        sections.removals(),
        sections.additions()
    );
    if report.no_sections_detected {
        let _ = writeln!(out, "  {}", "no sections detected in one or both documents".yellow());
    }

    for entry in sections.with_status(SectionStatus::Removed) {
        let size = entry.original_size_metric.unwrap_or(0);
        let _ = writeln!(out, "  {} {} (~{size} tokens)", "-".red(), entry.title);
    }
    for entry in sections.with_status(SectionStatus::Added) {
        let size = entry.modified_size_metric.unwrap_or(0);
        let _ = writeln!(out, "  {} {} (~{size} tokens)", "+".green(), entry.title);
    }
    for entry in sections.with_status(SectionStatus::Retained) {
        let (old, new) = (
            entry.original_size_metric.unwrap_or(0),
            entry.modified_size_metric.unwrap_or(0),
        );
        let delta = entry.delta.unwrap_or(0);
        let delta = match delta.signum() {
            1 => format!("{delta:+}").green(),
            -1 => format!("{delta:+}").red(),
            _ => format!("{delta:+}").dimmed(),
        };
        let similarity = entry
            .content_similarity
            .map(|s| format!(" [similarity {:.1}%]", s * 100.0))
            .unwrap_or_default();
        let _ = writeln!(out, "  {}: {old} → {new} ({delta}){similarity}", entry.title);
    }

    if let Some(preamble) = &report.preamble {
        let _ = writeln!(
            out,
            "  {} {} → {} ({:+})",
            "preamble:".dimmed(),
            preamble.original_size_metric.unwrap_or(0),
            preamble.modified_size_metric.unwrap_or(0),
            preamble.delta()
        );
    }
    out.push('\n');
}

fn divergence(out: &mut String, report: &DiffReport) {
    let scan = &report.divergence;
    let _ = writeln!(out, "{}", format!("First {} lines", scan.window).bold());
    if scan.differences.is_empty() {
        let _ = writeln!(out, "  no differences in the first {} lines\n", scan.window);
        return;
    }
    for line in &scan.differences {
        let _ = writeln!(out, "  {}", format!("line {}", line.index + 1).yellow());
        let _ = writeln!(out, "    original: {}", truncate(&line.original, DIVERGENT_LINE_PREVIEW));
        let _ = writeln!(out, "    modified: {}", truncate(&line.modified, DIVERGENT_LINE_PREVIEW));
    }
    out.push('\n');
}

fn keywords(out: &mut String, report: &DiffReport) {
    let changed: Vec<_> = report.changed_keywords().collect();
    if changed.is_empty() {
        return;
    }
    let _ = writeln!(out, "{}", "Keywords".bold());
    for k in changed {
        let presence = match k.presence() {
            Some(PresenceChange::Added) => format!(" {}", "added".green()),
            Some(PresenceChange::Removed) => format!(" {}", "removed".red()),
            None => String::new(),
        };
        let _ = writeln!(
            out,
            "  '{}': {} → {} ({:+}){presence}",
            k.keyword, k.original_count, k.modified_count, k.delta
        );
    }
    out.push('\n');
}

fn document_edges(out: &mut String, original: &str, modified: &str, count: usize) {
    let _ = writeln!(out, "{}", "Document edges".bold());
    for (label, text) in [("original", original), ("modified", modified)] {
        let lines = split_lines(text);
        let head = count.min(lines.len());
        let tail_start = lines.len().saturating_sub(count);

        let _ = writeln!(out, "  {label} head:");
        for (i, line) in lines[..head].iter().enumerate() {
            let _ = writeln!(out, "    {}: {}", i + 1, truncate(line, EDGE_LINE_PREVIEW));
        }
        let _ = writeln!(out, "  {label} tail:");
        for (i, line) in lines[tail_start..].iter().enumerate() {
            let _ = writeln!(out, "    {}: {}", tail_start + i + 1, truncate(line, EDGE_LINE_PREVIEW));
        }
    }
}

fn truncate(line: &str, max_chars: usize) -> String {
    match line.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &line[..cut]),
        None => line.to_string(),
    }
}

fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
