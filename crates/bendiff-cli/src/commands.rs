use std::path::Path;

use anyhow::Context;
use bendiff_diff::{compute_diff_stats, diff_lines, DiffStats, LineDiff, LineOp, WhitespaceMode};
use bendiff_nav::{enumerate_change_hunks, next_change_index, prev_change_index, ChangeLocation};
use bendiff_render::{build_render, RenderBlockSide, RenderDocument, RenderLine, ViewMode};
use bendiff_text::{load_utf8_text_file, LoadStatus, LoadedText};
use colored::Colorize;
use serde::Serialize;

use crate::cli::*;
use crate::config::BendiffConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = BendiffConfig::load_or_default(cli.config.as_deref())?;
    match cli.command {
        Command::Diff(args) => cmd_diff(args, &config, cli.format),
        Command::Stats(args) => cmd_stats(args, &config, cli.format),
        Command::Changes(args) => cmd_changes(args, &config, cli.format),
    }
}

/// Both sides loaded and compared.
struct Comparison {
    left: LoadedText,
    right: LoadedText,
    diff: LineDiff,
}

impl Comparison {
    /// Load both paths and diff whatever loaded; a failed side counts as empty.
    fn load(args: &CompareArgs, config: &BendiffConfig) -> Self {
        let mode = args.whitespace.unwrap_or(config.whitespace);
        let left = load_utf8_text_file(&args.left);
        let right = load_utf8_text_file(&args.right);
        let diff = diff_lines(left.diff_lines(), right.diff_lines(), mode);
        Self { left, right, diff }
    }

    fn report_load_failures(&self) {
        for side in [&self.left, &self.right] {
            if !side.is_ok() {
                let path = side.path.as_deref().unwrap_or(Path::new("-"));
                eprintln!("{} {}: {}", "warning:".yellow().bold(), path.display(), side.status.describe());
            }
        }
    }
}

#[derive(Serialize)]
struct DiffReport<'a> {
    whitespace: WhitespaceMode,
    view: ViewMode,
    left_status: LoadStatus,
    right_status: LoadStatus,
    stats: DiffStats,
    document: &'a RenderDocument,
}

fn cmd_diff(args: DiffArgs, config: &BendiffConfig, format: OutputFormat) -> anyhow::Result<()> {
    let view = args.view.unwrap_or(config.view);
    let line_numbers = config.line_numbers && !args.no_line_numbers;
    if args.no_color || !config.color {
        colored::control::set_override(false);
    }

    let cmp = Comparison::load(&args.compare, config);
    let doc = build_render(view, &cmp.left, &cmp.right, &cmp.diff);
    let stats = compute_diff_stats(&cmp.diff);

    match format {
        OutputFormat::Json => {
            let report = DiffReport {
                whitespace: cmp.diff.mode,
                view,
                left_status: cmp.left.status,
                right_status: cmp.right.status,
                stats,
                document: &doc,
            };
            print_json(&report)
        }
        OutputFormat::Text => {
            cmp.report_load_failures();
            match view {
                ViewMode::Inline => print_inline(&doc, line_numbers),
                ViewMode::SideBySide => print_side_by_side(&doc, line_numbers),
            }
            if !doc.is_empty() {
                println!();
            }
            println!("{}", stats_line(&stats));
            Ok(())
        }
    }
}

fn cmd_stats(args: StatsArgs, config: &BendiffConfig, format: OutputFormat) -> anyhow::Result<()> {
    let cmp = Comparison::load(&args.compare, config);
    let stats = compute_diff_stats(&cmp.diff);
    match format {
        OutputFormat::Json => print_json(&stats),
        OutputFormat::Text => {
            cmp.report_load_failures();
            println!("{}", stats_line(&stats));
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct CursorReport {
    current: Option<usize>,
    index: Option<usize>,
    change: Option<ChangeLocation>,
}

fn cmd_changes(args: ChangesArgs, config: &BendiffConfig, format: OutputFormat) -> anyhow::Result<()> {
    let cmp = Comparison::load(&args.compare, config);
    let changes = enumerate_change_hunks(&cmp.diff);

    if !args.next && !args.prev {
        return match format {
            OutputFormat::Json => print_json(&changes),
            OutputFormat::Text => {
                cmp.report_load_failures();
                if changes.is_empty() {
                    println!("No changes.");
                }
                for c in &changes {
                    println!("{:>4}  {}", c.hunk_index.to_string().yellow(), change_header(c).cyan());
                }
                Ok(())
            }
        };
    }

    let index = if args.next {
        next_change_index(args.current, &changes)
    } else {
        prev_change_index(args.current, &changes)
    };
    match format {
        OutputFormat::Json => print_json(&CursorReport {
            current: args.current,
            index,
            change: index.and_then(|i| changes.get(i).copied()),
        }),
        OutputFormat::Text => {
            match index.and_then(|i| changes.get(i)) {
                Some(c) => println!("{}  {}", c.hunk_index.to_string().yellow().bold(), change_header(c).cyan()),
                None => println!("{}", "no further change".dimmed()),
            }
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{text}");
    Ok(())
}

fn stats_line(stats: &DiffStats) -> String {
    format!(
        "{} hunk(s), {} {}",
        stats.hunk_count,
        format!("+{}", stats.added_line_count).green(),
        format!("-{}", stats.deleted_line_count).red()
    )
}

/// `@@ -l,c +r,c @@` with 1-based starts; an empty range names the line before it.
fn change_header(c: &ChangeLocation) -> String {
    fn range(start: usize, count: usize) -> String {
        let first = if count == 0 { start } else { start + 1 };
        format!("{first},{count}")
    }
    format!(
        "@@ -{} +{} @@",
        range(c.left_start, c.left_count),
        range(c.right_start, c.right_count)
    )
}

fn line_number(n: Option<usize>, enabled: bool) -> String {
    if !enabled {
        return String::new();
    }
    let text = n.map(|n| n.to_string()).unwrap_or_default();
    format!("{:>5} ", text.dimmed())
}

fn marker(op: LineOp) -> char {
    match op {
        LineOp::Equal => ' ',
        LineOp::Insert => '+',
        LineOp::Delete => '-',
    }
}

fn paint(text: &str, op: LineOp) -> String {
    match op {
        LineOp::Equal => text.to_string(),
        LineOp::Insert => text.green().to_string(),
        LineOp::Delete => text.red().to_string(),
    }
}

fn print_inline(doc: &RenderDocument, line_numbers: bool) {
    for (side, line) in doc.lines() {
        let text = match side {
            RenderBlockSide::Right => &line.right_text,
            RenderBlockSide::Left | RenderBlockSide::Both => &line.left_text,
        };
        println!(
            "{}{}{} {}",
            line_number(line.left_line, line_numbers),
            line_number(line.right_line, line_numbers),
            paint(&marker(line.op).to_string(), line.op),
            paint(text, line.op)
        );
    }
}

fn print_side_by_side(doc: &RenderDocument, line_numbers: bool) {
    let width = doc
        .lines()
        .map(|(_, l)| l.left_text.chars().count())
        .max()
        .unwrap_or(0);
    for (_, line) in doc.lines() {
        let (left_marker, right_marker) = side_markers(line);
        let padding = width.saturating_sub(line.left_text.chars().count());
        println!(
            "{}{} {}{} {} {}{} {}",
            line_number(line.left_line, line_numbers),
            paint(&left_marker.to_string(), line.op),
            paint(&line.left_text, line.op),
            " ".repeat(padding),
            "|".dimmed(),
            line_number(line.right_line, line_numbers),
            paint(&right_marker.to_string(), line.op),
            paint(&line.right_text, line.op)
        );
    }
}

fn side_markers(line: &RenderLine) -> (char, char) {
    match line.op {
        LineOp::Equal => (' ', ' '),
        LineOp::Delete => ('-', ' '),
        LineOp::Insert => (' ', '+'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(left_start: usize, left_count: usize, right_start: usize, right_count: usize) -> ChangeLocation {
        ChangeLocation { hunk_index: 0, left_start, left_count, right_start, right_count }
    }

    #[test]
    fn header_uses_one_based_starts() {
        assert_eq!(change_header(&location(1, 1, 1, 1)), "@@ -2,1 +2,1 @@");
    }

    #[test]
    fn header_for_pure_delete_names_line_before() {
        assert_eq!(change_header(&location(3, 1, 2, 0)), "@@ -4,1 +2,0 @@");
        assert_eq!(change_header(&location(0, 0, 0, 2)), "@@ -0,0 +1,2 @@");
    }

    #[test]
    fn side_markers_follow_op() {
        let mut line = RenderLine { op: LineOp::Delete, ..RenderLine::default() };
        assert_eq!(side_markers(&line), ('-', ' '));
        line.op = LineOp::Insert;
        assert_eq!(side_markers(&line), (' ', '+'));
        line.op = LineOp::Equal;
        assert_eq!(side_markers(&line), (' ', ' '));
    }

    #[test]
    fn line_numbers_can_be_disabled() {
        assert_eq!(line_number(Some(3), false), "");
    }

    #[test]
    fn comparison_treats_missing_side_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let left = dir.path().join("left.txt");
        std::fs::write(&left, "a\nb\n").unwrap();
        let args = CompareArgs {
            left,
            right: dir.path().join("gone.txt"),
            whitespace: None,
        };

        let cmp = Comparison::load(&args, &BendiffConfig::default());
        assert_eq!(cmp.right.status, LoadStatus::NotFound);
        assert_eq!(cmp.diff.left_line_count, 2);
        assert_eq!(cmp.diff.right_line_count, 0);
        let stats = compute_diff_stats(&cmp.diff);
        assert_eq!((stats.hunk_count, stats.deleted_line_count), (1, 2));
    }

    #[test]
    fn comparison_flag_overrides_config_mode() {
        let dir = tempfile::tempdir().unwrap();
        let left = dir.path().join("l.txt");
        let right = dir.path().join("r.txt");
        std::fs::write(&left, "a  \n").unwrap();
        std::fs::write(&right, "a\n").unwrap();
        let config = BendiffConfig { whitespace: WhitespaceMode::IgnoreTrailing, ..BendiffConfig::default() };

        let from_config = CompareArgs { left: left.clone(), right: right.clone(), whitespace: None };
        assert!(Comparison::load(&from_config, &config).diff.is_empty());

        let from_flag = CompareArgs { left, right, whitespace: Some(WhitespaceMode::Exact) };
        assert!(!Comparison::load(&from_flag, &config).diff.is_empty());
    }
}
