//! Box-drawing table decoder.
//!
//! The warp CLI renders profile listings as a Unicode box-drawing table.
//! The structural glyphs are configuration ([`TableGlyphs`]), not
//! hard-coded in the decode logic, so a change in the tool's rendering is
//! handled by substituting a glyph set rather than editing the parser.
//!
//! Decoding favors robustness over strictness: header rows, rule rows, and
//! malformed rows are skipped, never errors. Each skipped candidate line is
//! reported through a `tracing` debug event so a silent rendering change in
//! the external tool is still observable.

use tracing::debug;

/// The structural glyphs of a rendered text table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGlyphs {
    /// Glyph a data or header line must contain to be considered at all.
    pub row_edge: char,
    /// Internal divider a data line is split on.
    pub column_divider: char,
    /// Text that identifies the header row (matched anywhere in the line).
    pub header_marker: String,
    /// Decorative rule glyphs; a line containing any of these carries no
    /// data.
    pub border_glyphs: Vec<char>,
    /// Corner and edge glyphs stripped from cell boundaries.
    pub strip_glyphs: Vec<char>,
}

impl TableGlyphs {
    /// The glyph set the warp CLI renders profile listings with: double-line
    /// outer frame, light vertical column divider, double-line and dashed
    /// horizontal rules.
    pub fn warp() -> Self {
        Self {
            row_edge: '║',
            column_divider: '│',
            header_marker: "ID".to_string(),
            border_glyphs: vec!['═', '╌'],
            strip_glyphs: vec!['║', '╔', '╗', '╚', '╝', '╟', '╢', '╠', '╣'],
        }
    }
}

impl Default for TableGlyphs {
    fn default() -> Self {
        Self::warp()
    }
}

/// Decode the data rows of a rendered table into stripped cell lists.
///
/// A line is a data-row candidate only when it contains the row edge glyph,
/// does not contain the header marker, and contains none of the border
/// glyphs. Candidates are split on the column divider; every cell is
/// stripped of edge glyphs and surrounding whitespace. A row survives only
/// when all of its cells are non-empty.
pub fn decode_rows(input: &str, glyphs: &TableGlyphs) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    for line in input.lines() {
        if !line.contains(glyphs.row_edge)
            || line.contains(&glyphs.header_marker)
            || glyphs.border_glyphs.iter().any(|g| line.contains(*g))
        {
            debug!(line, "skipping table header/border line");
            continue;
        }

        let cells: Vec<String> = line
            .split(glyphs.column_divider)
            .map(|part| {
                part.trim_matches(|c: char| c.is_whitespace() || glyphs.strip_glyphs.contains(&c))
                    .to_string()
            })
            .collect();

        if cells.iter().any(|cell| cell.is_empty()) {
            debug!(line, "skipping malformed table row");
            continue;
        }

        rows.push(cells);
    }

    rows
}
