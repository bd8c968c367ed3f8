// Plain-text board renderer.
// Each cell shows the first character of the top-most item covering it.

use gridboard_core::{GridArea, GridConfig, GridRenderer};

const EMPTY: char = '.';

/// Tallest board the text renderer will draw. Rows past this are cropped.
pub const MAX_ROWS: i32 = 1024;

#[derive(Debug, Default)]
pub struct TextBoard {
    columns: usize,
    cells: Vec<Vec<char>>,
    output: String,
    cropped: bool,
}

impl TextBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text produced by the last completed frame.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// True when the last frame had more than `MAX_ROWS` rows.
    pub fn is_cropped(&self) -> bool {
        self.cropped
    }
}

/// Clip a 1-based, end-exclusive line run to 0-based cell indices below `len`.
fn cell_range(start: i32, end: i32, len: usize) -> std::ops::Range<usize> {
    let first = (start as i64 - 1).clamp(0, len as i64) as usize;
    let last = (end as i64 - 1).clamp(0, len as i64) as usize;
    first..last.max(first)
}

impl GridRenderer for TextBoard {
    fn begin(&mut self, config: GridConfig) {
        self.columns = config.columns.max(0) as usize;
        self.cropped = config.rows > MAX_ROWS;
        // Inclusive row ends: a grid of `rows` rows has row lines up to `rows`.
        let rows = config.rows.clamp(0, MAX_ROWS) as usize + 1;
        self.cells = vec![vec![EMPTY; self.columns]; rows];
        self.output.clear();
    }

    fn draw_item(&mut self, key: &str, area: GridArea) {
        let glyph = key.chars().next().unwrap_or('?');
        let rows = cell_range(area.row.start, area.row.end, self.cells.len());
        let cols = cell_range(area.column.start, area.column.end, self.columns);
        for line in &mut self.cells[rows] {
            line[cols.clone()].fill(glyph);
        }
    }

    fn end(&mut self) {
        for line in &self.cells {
            self.output.extend(line.iter());
            self.output.push('\n');
        }
    }
}
