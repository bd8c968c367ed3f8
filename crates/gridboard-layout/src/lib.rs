// Grid layout core: the item store and the drag-to-cell resolver.
// Rendering and geometry measurement live behind the traits in gridboard-core.

mod resolver;
mod store;

use gridboard_core::{GridRenderer, Item, Position};

pub use gridboard_core::COLUMN_COUNT;
pub use resolver::{
    resolve_drag, resolve_drag_with, CellSize, GeometrySnapshot, ResolverOptions, VerticalSnap,
};
pub use store::{Candidate, LayoutStore, RawUpdate};

/// Layout shown before anything has been dragged.
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new("1", Position::new(0, 0, 0, 8)),
        Item::new("2", Position::new(0, 0, 9, 11)),
        Item::new("3", Position::new(2, 2, 0, 11)),
        Item::new("4", Position::new(2, 3, 4, 5)),
    ]
}

/// Feed the current collection to a renderer, back to front.
pub fn render_layout(store: &LayoutStore, renderer: &mut dyn GridRenderer) {
    renderer.begin(store.grid_config());
    for (key, area) in store.grid_areas() {
        renderer.draw_item(&key, area);
    }
    renderer.end();
}
