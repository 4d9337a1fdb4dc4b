use anyhow::Result;

use shapeboard_canvas::config::BoardConfig;
use shapeboard_canvas::BoardWindow;
use shapeboard_engine::logging::{init_logging, LoggingConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    log::info!("1-4 add circle/square/triangle/hexagon (Shift: larger), C: next color, Esc: quit");

    BoardWindow::new()
        .title("Shapeboard")
        .size(1024.0, 768.0)
        .config(BoardConfig::default())
        .run()
}
