//! Document model and the inline / side-by-side builders.
//!
//! Both builders share the handling of a side that failed to load: if only
//! the left loaded, the whole file reads as deleted; if only the right
//! loaded, as added; if neither did, the document is empty. Why a side
//! failed is the loader's business and is never inspected here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use bendiff_diff::{build_aligned_rows, AlignedRow, LineDiff, LineOp};
use bendiff_text::LoadedText;

/// Which column(s) a block occupies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderBlockSide {
    Left,
    Right,
    #[default]
    Both,
}

/// One display line.
///
/// Line numbers are 1-based. A side with no line has `None` and empty text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderLine {
    pub left_line: Option<usize>,
    pub right_line: Option<usize>,
    pub op: LineOp,
    pub left_text: String,
    pub right_text: String,
}

impl RenderLine {
    fn deleted(index: usize, text: &str) -> Self {
        Self {
            left_line: Some(index + 1),
            op: LineOp::Delete,
            left_text: text.to_string(),
            ..Self::default()
        }
    }

    fn inserted(index: usize, text: &str) -> Self {
        Self {
            right_line: Some(index + 1),
            op: LineOp::Insert,
            right_text: text.to_string(),
            ..Self::default()
        }
    }

    fn from_row(left: &LoadedText, right: &LoadedText, row: &AlignedRow) -> Self {
        let mut line = Self {
            op: row.op,
            ..Self::default()
        };
        if let Some(idx) = row.left {
            line.left_line = Some(idx + 1);
            line.left_text = left.lines.get(idx).cloned().unwrap_or_default();
        }
        if let Some(idx) = row.right {
            line.right_line = Some(idx + 1);
            line.right_text = right.lines.get(idx).cloned().unwrap_or_default();
        }
        line
    }
}

/// A run of consecutive lines sharing a side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderBlock {
    pub side: RenderBlockSide,
    pub lines: Vec<RenderLine>,
}

/// An ordered list of blocks ready for display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderDocument {
    pub blocks: Vec<RenderBlock>,
}

impl RenderDocument {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Total number of display lines across all blocks.
    pub fn line_count(&self) -> usize {
        self.blocks.iter().map(|b| b.lines.len()).sum()
    }

    /// All lines with the side of the block they belong to.
    pub fn lines(&self) -> impl Iterator<Item = (RenderBlockSide, &RenderLine)> {
        self.blocks
            .iter()
            .flat_map(|b| b.lines.iter().map(move |l| (b.side, l)))
    }

    /// Append `line` to the last block if it has `side`, else open a new one.
    fn push_line(&mut self, side: RenderBlockSide, line: RenderLine) {
        match self.blocks.last_mut() {
            Some(block) if block.side == side => block.lines.push(line),
            _ => self.blocks.push(RenderBlock {
                side,
                lines: vec![line],
            }),
        }
    }

    fn single_block(side: RenderBlockSide, lines: Vec<RenderLine>) -> Self {
        Self {
            blocks: vec![RenderBlock { side, lines }],
        }
    }
}

/// Inline (single column) or side-by-side (two column) layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    Inline,
    #[default]
    SideBySide,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Inline => "inline",
            ViewMode::SideBySide => "side-by-side",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inline" => Ok(ViewMode::Inline),
            "side-by-side" => Ok(ViewMode::SideBySide),
            other => Err(format!("unknown view mode: {other}")),
        }
    }
}

/// Which single-sided document, if any, the load statuses call for.
enum OneSided<'a> {
    Deleted(&'a LoadedText),
    Added(&'a LoadedText),
    Nothing,
}

fn one_sided<'a>(left: &'a LoadedText, right: &'a LoadedText) -> Option<OneSided<'a>> {
    match (left.is_ok(), right.is_ok()) {
        (true, true) => None,
        (true, false) => Some(OneSided::Deleted(left)),
        (false, true) => Some(OneSided::Added(right)),
        (false, false) => Some(OneSided::Nothing),
    }
}

fn deleted_lines(text: &LoadedText) -> Vec<RenderLine> {
    text.lines
        .iter()
        .enumerate()
        .map(|(i, l)| RenderLine::deleted(i, l))
        .collect()
}

fn inserted_lines(text: &LoadedText) -> Vec<RenderLine> {
    text.lines
        .iter()
        .enumerate()
        .map(|(i, l)| RenderLine::inserted(i, l))
        .collect()
}

/// Build a two-column document.
///
/// With both sides loaded this is a single `Both` block with one line per
/// aligned row; the column without a line is left blank.
pub fn build_side_by_side_render(
    left: &LoadedText,
    right: &LoadedText,
    d: &LineDiff,
) -> RenderDocument {
    match one_sided(left, right) {
        Some(OneSided::Deleted(text)) => {
            debug!(lines = text.lines.len(), "side-by-side render of deleted file");
            RenderDocument::single_block(RenderBlockSide::Both, deleted_lines(text))
        }
        Some(OneSided::Added(text)) => {
            debug!(lines = text.lines.len(), "side-by-side render of added file");
            RenderDocument::single_block(RenderBlockSide::Both, inserted_lines(text))
        }
        Some(OneSided::Nothing) => {
            debug!(left = ?left.status, right = ?right.status, "nothing to render");
            RenderDocument::default()
        }
        None => {
            let lines = build_aligned_rows(d)
                .iter()
                .map(|row| RenderLine::from_row(left, right, row))
                .collect();
            RenderDocument::single_block(RenderBlockSide::Both, lines)
        }
    }
}

/// Build a single-column document.
///
/// Equal rows go to `Both` blocks, deletions to `Left` blocks and insertions
/// to `Right` blocks. Consecutive rows with the same side share a block, so
/// no two adjacent blocks have the same side.
pub fn build_inline_render(left: &LoadedText, right: &LoadedText, d: &LineDiff) -> RenderDocument {
    match one_sided(left, right) {
        Some(OneSided::Deleted(text)) => {
            debug!(lines = text.lines.len(), "inline render of deleted file");
            RenderDocument::single_block(RenderBlockSide::Left, deleted_lines(text))
        }
        Some(OneSided::Added(text)) => {
            debug!(lines = text.lines.len(), "inline render of added file");
            RenderDocument::single_block(RenderBlockSide::Right, inserted_lines(text))
        }
        Some(OneSided::Nothing) => {
            debug!(left = ?left.status, right = ?right.status, "nothing to render");
            RenderDocument::default()
        }
        None => {
            let mut doc = RenderDocument::default();
            for row in build_aligned_rows(d) {
                let side = match row.op {
                    LineOp::Equal => RenderBlockSide::Both,
                    LineOp::Delete => RenderBlockSide::Left,
                    LineOp::Insert => RenderBlockSide::Right,
                };
                doc.push_line(side, RenderLine::from_row(left, right, &row));
            }
            doc
        }
    }
}

/// Build the document for `view`.
pub fn build_render(
    view: ViewMode,
    left: &LoadedText,
    right: &LoadedText,
    d: &LineDiff,
) -> RenderDocument {
    match view {
        ViewMode::Inline => build_inline_render(left, right, d),
        ViewMode::SideBySide => build_side_by_side_render(left, right, d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bendiff_diff::{diff_lines, WhitespaceMode};
    use bendiff_text::LoadStatus;

    fn side_char(side: RenderBlockSide) -> char {
        match side {
            RenderBlockSide::Left => 'L',
            RenderBlockSide::Right => 'R',
            RenderBlockSide::Both => 'B',
        }
    }

    fn op_char(op: LineOp) -> char {
        match op {
            LineOp::Equal => '=',
            LineOp::Insert => '+',
            LineOp::Delete => '-',
        }
    }

    fn num_or_dash(n: Option<usize>) -> String {
        n.map_or_else(|| "-".to_string(), |n| n.to_string())
    }

    /// One entry per visual row: "<side> <op> <left line> <right line>".
    fn simplify(doc: &RenderDocument) -> Vec<String> {
        doc.lines()
            .map(|(side, l)| {
                format!(
                    "{} {} {} {}",
                    side_char(side),
                    op_char(l.op),
                    num_or_dash(l.left_line),
                    num_or_dash(l.right_line)
                )
            })
            .collect()
    }

    fn sides(doc: &RenderDocument) -> Vec<RenderBlockSide> {
        doc.blocks.iter().map(|b| b.side).collect()
    }

    fn loaded(lines: &[&str]) -> LoadedText {
        LoadedText::from_lines(lines.iter().copied())
    }

    fn diff(left: &LoadedText, right: &LoadedText, mode: WhitespaceMode) -> LineDiff {
        diff_lines(left.diff_lines(), right.diff_lines(), mode)
    }

    use RenderBlockSide::{Both, Left, Right};

    #[test]
    fn side_by_side_single_both_block_with_insert() {
        let left = loaded(&["a", "b"]);
        let right = loaded(&["a", "X", "b"]);
        let doc = build_side_by_side_render(&left, &right, &diff(&left, &right, WhitespaceMode::Exact));

        assert_eq!(sides(&doc), vec![Both]);
        let lines = &doc.blocks[0].lines;
        assert_eq!(lines.len(), 3);

        assert_eq!(lines[0].op, LineOp::Equal);
        assert_eq!((lines[0].left_line, lines[0].right_line), (Some(1), Some(1)));
        assert_eq!((lines[0].left_text.as_str(), lines[0].right_text.as_str()), ("a", "a"));

        assert_eq!(lines[1].op, LineOp::Insert);
        assert_eq!((lines[1].left_line, lines[1].right_line), (None, Some(2)));
        assert_eq!((lines[1].left_text.as_str(), lines[1].right_text.as_str()), ("", "X"));

        assert_eq!(lines[2].op, LineOp::Equal);
        assert_eq!((lines[2].left_line, lines[2].right_line), (Some(2), Some(3)));
        assert_eq!(lines[2].right_text, "b");
    }

    #[test]
    fn side_by_side_delete_leaves_right_blank() {
        let left = loaded(&["a", "X", "b"]);
        let right = loaded(&["a", "b"]);
        let doc = build_side_by_side_render(&left, &right, &diff(&left, &right, WhitespaceMode::Exact));

        assert_eq!(
            simplify(&doc),
            vec!["B = 1 1", "B - 2 -", "B = 3 2"]
        );
        let deleted = &doc.blocks[0].lines[1];
        assert_eq!(deleted.left_text, "X");
        assert_eq!(deleted.right_text, "");
    }

    #[test]
    fn inline_replace_is_left_block_then_right_block() {
        let left = loaded(&["a", "b", "c"]);
        let right = loaded(&["a", "B", "c"]);
        let doc = build_inline_render(&left, &right, &diff(&left, &right, WhitespaceMode::Exact));

        assert_eq!(sides(&doc), vec![Both, Left, Right, Both]);

        let del = &doc.blocks[1].lines;
        assert_eq!(del.len(), 1);
        assert_eq!(del[0].op, LineOp::Delete);
        assert_eq!((del[0].left_line, del[0].right_line), (Some(2), None));
        assert_eq!(del[0].left_text, "b");

        let ins = &doc.blocks[2].lines;
        assert_eq!(ins.len(), 1);
        assert_eq!(ins[0].op, LineOp::Insert);
        assert_eq!((ins[0].left_line, ins[0].right_line), (None, Some(2)));
        assert_eq!(ins[0].right_text, "B");
    }

    #[test]
    fn inline_deleted_file_is_one_left_block() {
        let left = loaded(&["a", "b"]);
        let right = LoadedText::missing(LoadStatus::NotFound);
        let doc = build_inline_render(&left, &right, &LineDiff::default());

        assert_eq!(sides(&doc), vec![Left]);
        assert_eq!(simplify(&doc), vec!["L - 1 -", "L - 2 -"]);
        assert_eq!(doc.blocks[0].lines[0].left_text, "a");
        assert_eq!(doc.blocks[0].lines[1].left_text, "b");
    }

    #[test]
    fn inline_added_file_is_one_right_block() {
        let left = LoadedText::missing(LoadStatus::NotFound);
        let right = loaded(&["x"]);
        let doc = build_inline_render(&left, &right, &LineDiff::default());

        assert_eq!(sides(&doc), vec![Right]);
        assert_eq!(simplify(&doc), vec!["R + - 1"]);
        assert_eq!(doc.blocks[0].lines[0].right_text, "x");
    }

    #[test]
    fn side_by_side_single_sided_uses_both_block() {
        let left = loaded(&["a", "b"]);
        let right = LoadedText::missing(LoadStatus::NotUtf8);
        let doc = build_side_by_side_render(&left, &right, &LineDiff::default());
        assert_eq!(simplify(&doc), vec!["B - 1 -", "B - 2 -"]);

        let doc = build_side_by_side_render(&right, &left, &LineDiff::default());
        assert_eq!(simplify(&doc), vec!["B + - 1", "B + - 2"]);
        assert_eq!(doc.blocks[0].lines[1].right_text, "b");
        assert_eq!(doc.blocks[0].lines[1].left_text, "");
    }

    #[test]
    fn both_sides_missing_is_empty() {
        let left = LoadedText::missing(LoadStatus::Unreadable);
        let right = LoadedText::missing(LoadStatus::NotFound);
        assert!(build_inline_render(&left, &right, &LineDiff::default()).is_empty());
        assert!(build_side_by_side_render(&left, &right, &LineDiff::default()).is_empty());
    }

    #[test]
    fn inline_insert_in_middle() {
        let left = loaded(&["a", "b", "c", "d"]);
        let right = loaded(&["a", "b", "X", "c", "d"]);
        let doc = build_inline_render(&left, &right, &diff(&left, &right, WhitespaceMode::Exact));

        assert_eq!(sides(&doc), vec![Both, Right, Both]);
        assert_eq!(
            simplify(&doc),
            vec!["B = 1 1", "B = 2 2", "R + - 3", "B = 3 4", "B = 4 5"]
        );
    }

    #[test]
    fn inline_consecutive_deletes_share_a_block() {
        let left = loaded(&["a", "x", "y", "b"]);
        let right = loaded(&["a", "b"]);
        let doc = build_inline_render(&left, &right, &diff(&left, &right, WhitespaceMode::Exact));

        assert_eq!(sides(&doc), vec![Both, Left, Both]);
        assert_eq!(simplify(&doc), vec!["B = 1 1", "L - 2 -", "L - 3 -", "B = 4 2"]);
    }

    #[test]
    fn inline_consecutive_inserts_share_a_block() {
        let left = loaded(&["a", "b"]);
        let right = loaded(&["a", "x", "y", "b"]);
        let doc = build_inline_render(&left, &right, &diff(&left, &right, WhitespaceMode::Exact));

        assert_eq!(sides(&doc), vec![Both, Right, Both]);
        assert_eq!(simplify(&doc), vec!["B = 1 1", "R + - 2", "R + - 3", "B = 2 4"]);
    }

    #[test]
    fn ignore_trailing_whitespace_makes_lines_equal() {
        let left = loaded(&["a ", "b\t"]);
        let right = loaded(&["a", "b"]);
        let d = diff(&left, &right, WhitespaceMode::IgnoreTrailing);

        let doc = build_side_by_side_render(&left, &right, &d);
        assert_eq!(sides(&doc), vec![Both]);
        assert_eq!(simplify(&doc), vec!["B = 1 1", "B = 2 2"]);
        // Display text keeps the original whitespace.
        assert_eq!(doc.blocks[0].lines[0].left_text, "a ");

        let doc = build_inline_render(&left, &right, &d);
        assert_eq!(sides(&doc), vec![Both]);
        assert_eq!(simplify(&doc), vec!["B = 1 1", "B = 2 2"]);
    }

    #[test]
    fn adjacent_inline_blocks_never_share_a_side() {
        let left = loaded(&["a", "b", "c", "d", "e", "f"]);
        let right = loaded(&["x", "b", "y", "z", "e"]);
        let doc = build_inline_render(&left, &right, &diff(&left, &right, WhitespaceMode::Exact));

        for pair in doc.blocks.windows(2) {
            assert_ne!(pair[0].side, pair[1].side);
        }
        assert!(doc.blocks.iter().all(|b| !b.lines.is_empty()));
        assert_eq!(doc.line_count(), 6 + 3);
    }

    #[test]
    fn build_render_dispatches_on_view() {
        let left = loaded(&["a", "b"]);
        let right = loaded(&["a", "c"]);
        let d = diff(&left, &right, WhitespaceMode::Exact);

        assert_eq!(
            build_render(ViewMode::Inline, &left, &right, &d),
            build_inline_render(&left, &right, &d)
        );
        assert_eq!(
            build_render(ViewMode::SideBySide, &left, &right, &d),
            build_side_by_side_render(&left, &right, &d)
        );
    }

    #[test]
    fn view_mode_names() {
        assert_eq!("inline".parse::<ViewMode>().unwrap(), ViewMode::Inline);
        assert_eq!("side-by-side".parse::<ViewMode>().unwrap(), ViewMode::SideBySide);
        assert!("split".parse::<ViewMode>().is_err());
        assert_eq!(ViewMode::default().to_string(), "side-by-side");
    }

    #[test]
    fn document_serializes_absent_lines_as_null() {
        let left = loaded(&["a"]);
        let right = LoadedText::missing(LoadStatus::NotFound);
        let doc = build_inline_render(&left, &right, &LineDiff::default());

        let json = serde_json::to_value(&doc).unwrap();
        let line = &json["blocks"][0]["lines"][0];
        assert_eq!(json["blocks"][0]["side"], "left");
        assert_eq!(line["left_line"], 1);
        assert!(line["right_line"].is_null());
        assert_eq!(line["op"], "delete");
    }
}
