use rand::rngs::StdRng;

use crate::placement::{EvasivePlacer, Point, Rect, Size};

use super::escalation::{ButtonMood, PromptStage};

/// One run of the card: where the No button sits, how many times it has
/// dodged, and whether YES has been clicked yet.
///
/// The No button starts unplaced and invisible. The first frame with a
/// real layout places it beside the YES button, exactly once; after
/// that every pointer approach bumps the dodge count and asks the
/// placer for a fresh spot. A YES click freezes everything.
#[derive(Debug, Clone)]
pub struct Session {
    no_pos: Point,
    placed: bool,
    no_attempts: u32,
    yes_clicked: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            no_pos: Point::default(),
            placed: false,
            no_attempts: 0,
            yes_clicked: false,
        }
    }

    /// One-shot bootstrap. Does nothing until the container has real
    /// dimensions, then places the No button beside its anchor and
    /// latches; later calls are ignored so resizes cannot re-run it.
    /// Returns whether placement happened on this call.
    pub fn place_no_button(
        &mut self,
        placer: &EvasivePlacer,
        container: Rect,
        anchor: Rect,
        movable: Size,
    ) -> bool {
        if self.placed || container.width <= 0.0 || container.height <= 0.0 {
            return false;
        }
        self.no_pos = placer.initial_position(container, anchor, movable);
        self.placed = true;
        true
    }

    /// The pointer got too close: count the attempt and move the button.
    /// Ignored before placement and after a YES.
    pub fn dodge_no_button(
        &mut self,
        placer: &EvasivePlacer,
        container: Rect,
        avoid: Rect,
        movable: Size,
        cursor: Option<Point>,
        rng: &mut StdRng,
    ) {
        if !self.placed || self.yes_clicked {
            return;
        }
        self.no_attempts += 1;
        self.no_pos = placer.next_position(container, avoid, movable, self.no_pos, cursor, rng);
    }

    /// Accept. Irreversible for the rest of the session.
    pub fn click_yes(&mut self) {
        self.yes_clicked = true;
    }

    /// Current No button position, relative to the container's top-left
    pub fn no_pos(&self) -> Point {
        self.no_pos
    }

    /// Whether the bootstrap placement has happened yet
    pub fn is_placed(&self) -> bool {
        self.placed
    }

    pub fn attempts(&self) -> u32 {
        self.no_attempts
    }

    pub fn yes_clicked(&self) -> bool {
        self.yes_clicked
    }

    pub fn stage(&self) -> PromptStage {
        PromptStage::for_attempts(self.no_attempts)
    }

    pub fn mood(&self) -> ButtonMood {
        ButtonMood::for_attempts(self.no_attempts)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
