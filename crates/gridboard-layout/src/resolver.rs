// Drag-to-cell resolution: pointer position -> candidate placement.
// Pure: nothing here touches the store.

use gridboard_core::{GeometryProvider, Padding, Position, Rect, Vec2, COLUMN_COUNT};
use serde::{Deserialize, Serialize};

use crate::store::{Candidate, LayoutStore};

/// How a vertical pointer offset snaps to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalSnap {
    /// Nearest row line, halves away from zero. Columns always floor.
    #[default]
    Round,
    Floor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverOptions {
    #[serde(default)]
    pub vertical_snap: VerticalSnap,
    /// Keep items from landing above row 0 when dragged past the top edge.
    #[serde(default = "default_clamp_negative_rows")]
    pub clamp_negative_rows: bool,
}

fn default_clamp_negative_rows() -> bool {
    true
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            vertical_snap: VerticalSnap::default(),
            clamp_negative_rows: default_clamp_negative_rows(),
        }
    }
}

// ──────────────────────────────────────────────
// Geometry
// ──────────────────────────────────────────────

/// Container measurements for a single resolve cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometrySnapshot {
    pub rect: Rect,
    pub padding: Padding,
}

impl GeometrySnapshot {
    pub fn new(rect: Rect, padding: Padding) -> Self {
        Self { rect, padding }
    }

    /// Read the provider now. `None` while the container is unmeasured.
    pub fn read(provider: &dyn GeometryProvider) -> Option<Self> {
        let rect = provider.rect()?;
        Some(Self::new(rect, provider.padding()))
    }

    /// Pointer offset from the top-left of the content box.
    pub fn relative(&self, pointer: Vec2) -> Vec2 {
        Vec2::new(
            pointer.x - self.rect.x - self.padding.left,
            pointer.y - self.rect.y - self.padding.top,
        )
    }
}

/// Size of one grid cell in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    pub column_width: f32,
    pub row_height: f32,
}

impl CellSize {
    /// Split the content box into `COLUMN_COUNT` columns and `row_count` rows.
    /// Returns `None` when the content box has no usable area.
    pub fn measure(geometry: &GeometrySnapshot, row_count: i32) -> Option<Self> {
        let content = geometry.rect.inset(geometry.padding);
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if !usable(content.width) || !usable(content.height) || row_count < 1 {
            return None;
        }
        Some(Self {
            column_width: content.width / COLUMN_COUNT as f32,
            row_height: content.height / row_count as f32,
        })
    }
}

// ──────────────────────────────────────────────
// Resolution
// ──────────────────────────────────────────────

/// Compute where `key` lands if dropped at `pointer` (viewport coordinates).
///
/// Spans are kept as they are. Columns are floored and pushed left until the
/// whole span fits inside the grid; rows are snapped per `options` and may
/// extend past the current row count, which grows to fit.
///
/// Returns `None` for an unknown key, unusable geometry, or a pointer so far
/// away that the row index no longer fits in an `i32`.
pub fn resolve_drag(
    store: &LayoutStore,
    key: &str,
    pointer: Vec2,
    geometry: &GeometrySnapshot,
    options: ResolverOptions,
) -> Option<Candidate> {
    let Some(current) = store.get(key) else {
        log::debug!("drag for unknown item {key:?}");
        return None;
    };
    let Some(cell) = CellSize::measure(geometry, store.row_count()) else {
        log::debug!("container has no usable area, skipping drag");
        return None;
    };

    let relative = geometry.relative(pointer);
    if !relative.x.is_finite() || !relative.y.is_finite() {
        return None;
    }

    let (col_span, row_span) = (current.position.col_span(), current.position.row_span());
    let Some((col_start, col_end)) = resolve_columns(relative.x / cell.column_width, col_span)
    else {
        log::debug!("{key} cannot fit in the grid columns, skipping drag");
        return None;
    };
    let Some((row_start, row_end)) = resolve_rows(relative.y / cell.row_height, row_span, options)
    else {
        log::debug!("{key} dragged outside the representable rows, skipping drag");
        return None;
    };

    let position = Position::new(row_start, row_end, col_start, col_end);
    log::trace!("resolved {key} at ({}, {}) -> {:?}", relative.x, relative.y, position);
    Some(Candidate {
        key: current.key.clone(),
        position,
    })
}

/// Same as [`resolve_drag`], measuring the container first.
pub fn resolve_drag_with(
    store: &LayoutStore,
    key: &str,
    pointer: Vec2,
    provider: &dyn GeometryProvider,
    options: ResolverOptions,
) -> Option<Candidate> {
    let Some(geometry) = GeometrySnapshot::read(provider) else {
        log::debug!("container not measured yet, skipping drag");
        return None;
    };
    resolve_drag(store, key, pointer, &geometry, options)
}

/// `cells` is the pointer offset in column widths.
/// `None` when the span is negative or wider than the grid.
fn resolve_columns(cells: f32, span: i32) -> Option<(i32, i32)> {
    let last = COLUMN_COUNT - 1;
    if !(0..=last).contains(&span) {
        return None;
    }
    let mut start = cells.floor().clamp(0.0, last as f32) as i32;
    let end = (start + span).min(last);
    // Pull back so the full span stays inside the grid.
    if end - start < span {
        start = end - span;
    }
    Some((start, end))
}

/// `cells` is the pointer offset in row heights.
/// `None` when the snapped row or the row end does not fit in an `i32`.
fn resolve_rows(cells: f32, span: i32, options: ResolverOptions) -> Option<(i32, i32)> {
    if span < 0 {
        return None;
    }
    let snapped = match options.vertical_snap {
        VerticalSnap::Round => cells.round(),
        VerticalSnap::Floor => cells.floor(),
    };
    if !(i32::MIN as f32..i32::MAX as f32).contains(&snapped) {
        return None;
    }
    let mut start = snapped as i32;
    if options.clamp_negative_rows {
        start = start.max(0);
    }
    Some((start, start.checked_add(span)?))
}
