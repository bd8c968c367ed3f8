// Drag gesture handling.
// Turns input-source signals into resolve-then-apply cycles against the layout store.


use gridboard_core::{DragPayload, DragSignal, GeometryProvider, Vec2};
use gridboard_layout::{resolve_drag_with, Candidate, LayoutStore, ResolverOptions};

// ──────────────────────────────────────────────
// Outcome
// ──────────────────────────────────────────────

/// What a signal did.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// The container accepts the drag (a card payload is present).
    Accepted,
    /// The dragged item was placed; the store now holds this candidate last.
    Moved(Candidate),
    /// Nothing changed.
    Ignored,
}

// ──────────────────────────────────────────────
// Controller
// ──────────────────────────────────────────────

/// Tracks the current gesture and commits every drag-over straight into the store.
/// There is no separate drop step: the last drag-over is where the item rests.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    active: Option<DragPayload>,
    options: ResolverOptions,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ResolverOptions) -> Self {
        Self {
            active: None,
            options,
        }
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Payload announced by the dragged element, if a gesture is running.
    pub fn active(&self) -> Option<&DragPayload> {
        self.active.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Process one signal. Geometry is read from `geometry` on every drag-over.
    pub fn process(
        &mut self,
        signal: DragSignal,
        store: &mut LayoutStore,
        geometry: &dyn GeometryProvider,
    ) -> DragOutcome {
        match signal {
            DragSignal::Start(payload) => {
                log::debug!("drag start: {}", payload.description());
                self.active = Some(payload);
                DragOutcome::Ignored
            }
            DragSignal::Enter(payload) => {
                if payload.or_else(|| self.active.clone()).is_some() {
                    DragOutcome::Accepted
                } else {
                    DragOutcome::Ignored
                }
            }
            DragSignal::Over { payload, position } => {
                let payload = payload.or_else(|| self.active.clone());
                match payload {
                    Some(payload) => self.drag_over(&payload, position, store, geometry),
                    None => DragOutcome::Ignored,
                }
            }
            DragSignal::End => {
                self.active = None;
                DragOutcome::Ignored
            }
        }
    }

    fn drag_over(
        &self,
        payload: &DragPayload,
        position: Vec2,
        store: &mut LayoutStore,
        geometry: &dyn GeometryProvider,
    ) -> DragOutcome {
        let candidate = resolve_drag_with(store, &payload.key, position, geometry, self.options);
        let Some(candidate) = candidate else {
            return DragOutcome::Ignored;
        };
        if store.apply_update(candidate.clone()) {
            DragOutcome::Moved(candidate)
        } else {
            DragOutcome::Ignored
        }
    }
}
