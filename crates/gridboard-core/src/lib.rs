mod tests;

use serde::{Deserialize, Serialize};

// ──────────────────────────────────────────────
// Geometry
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Shrink by the given padding. Returns the content box.
    pub fn inset(&self, padding: Padding) -> Rect {
        Rect::new(
            self.x + padding.left,
            self.y + padding.top,
            self.width - padding.left - padding.right,
            self.height - padding.top - padding.bottom,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Padding of the grid container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    #[serde(default)]
    pub top: f32,
    #[serde(default)]
    pub right: f32,
    #[serde(default)]
    pub bottom: f32,
    #[serde(default)]
    pub left: f32,
}

impl Padding {
    pub const ZERO: Self = Self::uniform(0.0);

    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Build from computed-style strings such as `"28px"`.
    /// Each side falls back to zero when it cannot be parsed.
    pub fn from_css(top: &str, right: &str, bottom: &str, left: &str) -> Self {
        Self::new(parse_px(top), parse_px(right), parse_px(bottom), parse_px(left))
    }
}

/// Parse a CSS pixel length (`"12px"`, `"12.5px"`, `"0"`).
/// Anything unparseable, negative, or non-finite yields `0.0`.
pub fn parse_px(value: &str) -> f32 {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    match number.parse::<f32>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

// ──────────────────────────────────────────────
// Grid model
// ──────────────────────────────────────────────

/// Number of columns in the grid. Fixed.
pub const COLUMN_COUNT: i32 = 12;

pub type ItemKey = String;

/// Placement of an item on the grid: 0-based, inclusive on both ends.
/// Serialized as `[rowStart, rowEnd, colStart, colEnd]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 4]", into = "[i32; 4]")]
pub struct Position {
    pub row_start: i32,
    pub row_end: i32,
    pub col_start: i32,
    pub col_end: i32,
}

impl Position {
    pub const fn new(row_start: i32, row_end: i32, col_start: i32, col_end: i32) -> Self {
        Self {
            row_start,
            row_end,
            col_start,
            col_end,
        }
    }

    /// Build from an untyped component list. Needs exactly four components.
    pub fn from_slice(components: &[i32]) -> Option<Self> {
        match *components {
            [row_start, row_end, col_start, col_end] => {
                Some(Self::new(row_start, row_end, col_start, col_end))
            }
            _ => None,
        }
    }

    /// Saturates instead of overflowing for positions far outside the grid.
    pub fn row_span(&self) -> i32 {
        self.row_end.saturating_sub(self.row_start)
    }

    pub fn col_span(&self) -> i32 {
        self.col_end.saturating_sub(self.col_start)
    }
}

impl From<[i32; 4]> for Position {
    fn from(p: [i32; 4]) -> Self {
        Self::new(p[0], p[1], p[2], p[3])
    }
}

impl From<Position> for [i32; 4] {
    fn from(p: Position) -> Self {
        [p.row_start, p.row_end, p.col_start, p.col_end]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_key")]
    pub key: ItemKey,
    pub position: Position,
}

impl Item {
    pub fn new(key: impl Into<ItemKey>, position: Position) -> Self {
        Self {
            key: key.into(),
            position,
        }
    }
}

/// Grid dimensions as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub columns: i32,
    pub rows: i32,
}

/// A run of grid lines: 1-based, end-exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLines {
    pub start: i32,
    pub end: i32,
}

/// Where and how an item is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridArea {
    pub row: GridLines,
    pub column: GridLines,
    /// Stacking order; higher draws on top.
    pub z_index: usize,
    /// Item height measured in column widths.
    pub row_units: i32,
}

impl GridArea {
    /// Grid lines `[start + 1, end + 2)` on each axis: the inclusive 0-based end
    /// needs one past itself to cover a non-empty track. Saturates at `i32::MAX`.
    pub fn for_item(position: Position, index: usize) -> Self {
        Self {
            row: GridLines {
                start: position.row_start.saturating_add(1),
                end: position.row_end.saturating_add(2),
            },
            column: GridLines {
                start: position.col_start.saturating_add(1),
                end: position.col_end.saturating_add(2),
            },
            z_index: index.saturating_add(1),
            row_units: position.row_span().saturating_add(1),
        }
    }
}

// ──────────────────────────────────────────────
// Drag payload
// ──────────────────────────────────────────────

/// MIME type under which a dragged card carries its key.
pub const CARD_MIME: &str = "application/card";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Card,
}

/// What is being dragged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub kind: PayloadKind,
    pub key: ItemKey,
}

impl DragPayload {
    pub fn card(key: impl Into<ItemKey>) -> Self {
        Self {
            kind: PayloadKind::Card,
            key: key.into(),
        }
    }

    /// Decode a data-transfer entry. Only non-empty `application/card` data is a payload.
    pub fn from_data(mime: &str, data: &str) -> Option<Self> {
        if mime != CARD_MIME || data.is_empty() {
            return None;
        }
        Some(Self::card(data))
    }

    /// Human-readable `text/plain` companion entry.
    pub fn description(&self) -> String {
        format!("Moving item: {}", self.key)
    }
}

/// Signals emitted by the input source over one drag gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum DragSignal {
    /// The dragged element announces its payload.
    Start(DragPayload),
    /// The pointer entered the grid container.
    Enter(Option<DragPayload>),
    /// The pointer moved over the container, in viewport coordinates.
    Over {
        payload: Option<DragPayload>,
        position: Vec2,
    },
    End,
}

// ──────────────────────────────────────────────
// Trait: GeometryProvider
// ──────────────────────────────────────────────

/// Live measurements of the grid container.
/// Read on every resolve; the container may have changed since the last one.
pub trait GeometryProvider {
    /// Bounding rectangle in viewport coordinates, or `None` while unmeasured.
    fn rect(&self) -> Option<Rect>;
    fn padding(&self) -> Padding;
}

/// Geometry that never changes. Handy for headless use and tests.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedGeometry {
    pub rect: Option<Rect>,
    pub padding: Padding,
}

impl FixedGeometry {
    pub fn new(rect: Rect, padding: Padding) -> Self {
        Self {
            rect: Some(rect),
            padding,
        }
    }

    pub fn unmeasured() -> Self {
        Self::default()
    }
}

impl GeometryProvider for FixedGeometry {
    fn rect(&self) -> Option<Rect> {
        self.rect
    }

    fn padding(&self) -> Padding {
        self.padding
    }
}

// ──────────────────────────────────────────────
// Trait: GridRenderer
// ──────────────────────────────────────────────

/// Draws one box per item. Items arrive back to front.
pub trait GridRenderer {
    fn begin(&mut self, config: GridConfig);
    fn draw_item(&mut self, key: &str, area: GridArea);
    fn end(&mut self);
}
