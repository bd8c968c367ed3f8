// Gridboard: headless driver for the grid layout core.
// Seeds the board, optionally replays a drag script, then prints the layout
// as JSON followed by a text rendering.
//
// Usage: gridboard [SCRIPT.json]

mod board;
mod script;
mod settings;

use std::process::ExitCode;

use gridboard_input::DragController;
use gridboard_layout::{render_layout, LayoutStore};

use board::TextBoard;

fn main() -> ExitCode {
    env_logger::init();

    let settings = settings::load_settings();
    let geometry = settings.container.geometry();
    let mut store = LayoutStore::seeded();
    let mut controller = DragController::with_options(settings.resolver);

    if let Some(path) = std::env::args().nth(1) {
        let data = match std::fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) => {
                log::error!("Failed to read {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        };
        let steps = match script::parse_script(&data) {
            Ok(steps) => steps,
            Err(e) => {
                log::error!("Failed to parse {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        };
        let total = steps.len();
        let applied = script::replay(steps, &mut store, &mut controller, &geometry);
        log::info!("replayed {} steps, {} changed the layout", total, applied);
    }

    match serde_json::to_string_pretty(store.items()) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Failed to serialize layout: {}", e);
            return ExitCode::FAILURE;
        }
    }

    let mut board = TextBoard::new();
    render_layout(&store, &mut board);
    print!("{}", board.output());
    if board.is_cropped() {
        log::error!(
            "layout needs {} rows, board shows the first {}",
            store.row_count(),
            board::MAX_ROWS
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
