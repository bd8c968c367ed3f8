// Scripted drag replay: feeds recorded gestures through the drag controller.

use gridboard_core::{DragPayload, DragSignal, GeometryProvider, Vec2};
use gridboard_input::{DragController, DragOutcome};
use gridboard_layout::{LayoutStore, RawUpdate};
use serde::Deserialize;

/// One scripted step.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    /// Drag `key` and release it with the pointer at (`x`, `y`) in viewport coordinates.
    Drag { key: String, x: f32, y: f32 },
    /// Hand an update straight to the store, bypassing the resolver.
    Update { update: RawUpdate },
}

pub fn parse_script(json: &str) -> serde_json::Result<Vec<ScriptStep>> {
    serde_json::from_str(json)
}

/// Replay `steps` in order. Returns how many of them changed the layout.
pub fn replay(
    steps: Vec<ScriptStep>,
    store: &mut LayoutStore,
    controller: &mut DragController,
    geometry: &dyn GeometryProvider,
) -> usize {
    let mut applied = 0;
    for (index, step) in steps.into_iter().enumerate() {
        let changed = match step {
            ScriptStep::Drag { key, x, y } => {
                drag_gesture(key, Vec2::new(x, y), store, controller, geometry)
            }
            ScriptStep::Update { update } => store.apply_raw(update),
        };
        if changed {
            applied += 1;
        } else {
            log::info!("step {} left the layout unchanged", index);
        }
    }
    applied
}

fn drag_gesture(
    key: String,
    pointer: Vec2,
    store: &mut LayoutStore,
    controller: &mut DragController,
    geometry: &dyn GeometryProvider,
) -> bool {
    let payload = DragPayload::card(key);
    let signals = [
        DragSignal::Start(payload.clone()),
        DragSignal::Enter(Some(payload)),
        DragSignal::Over {
            payload: None,
            position: pointer,
        },
        DragSignal::End,
    ];

    let mut moved = false;
    for signal in signals {
        if let DragOutcome::Moved(candidate) = controller.process(signal, store, geometry) {
            log::debug!("{} -> {:?}", candidate.key, candidate.position);
            moved = true;
        }
    }
    moved
}
