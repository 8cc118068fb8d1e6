//! Plain-text rendering of game snapshots.

use rewind_tictactoe::view::{CellView, GameView};
use rewind_tictactoe::{GameEvent, GameSnapshot};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

fn cell_text(cell: &CellView) -> String {
    let mark = match cell.mark {
        Some(player) => player.to_string(),
        None => cell.index.to_string(),
    };
    if cell.highlighted {
        format!("[{}]", mark)
    } else {
        format!(" {} ", mark)
    }
}

/// Renders one frame: board, status, sort toggle and move list.
pub fn render(snapshot: &GameSnapshot) -> String {
    let view = GameView::from(snapshot);
    let mut out = String::new();

    for (row, cells) in view.cells.chunks(3).enumerate() {
        let line: Vec<_> = cells.iter().map(cell_text).collect();
        out.push_str(&line.join("|"));
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }

    out.push('\n');
    out.push_str(&view.status);
    out.push('\n');
    out.push_str(&format!("(sort: {})\n", view.sort_toggle));
    for item in &view.moves {
        let marker = if item.selected { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}\n", marker, item.step, item.label));
    }
    out
}

/// Subscriber that tells the front end when to redraw.
#[derive(Debug)]
pub struct Presenter {
    events: mpsc::UnboundedReceiver<GameEvent>,
}

impl Presenter {
    /// Wraps a subscription obtained from the controller.
    pub fn new(events: mpsc::UnboundedReceiver<GameEvent>) -> Self {
        Self { events }
    }

    /// Drains pending notifications, returning true if any arrived.
    #[instrument(skip(self))]
    pub fn take_changes(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events.try_recv() {
            debug!(?event, "State changed");
            changed = true;
        }
        changed
    }
}
