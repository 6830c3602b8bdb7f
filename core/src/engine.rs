use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Mode {
    /// Accepting new clicks.
    Forward,
    /// Automatically retracting clicks, oldest first.
    Replaying,
}

impl Mode {
    pub const fn is_forward(self) -> bool {
        matches!(self, Self::Forward)
    }

    pub const fn is_replaying(self) -> bool {
        matches!(self, Self::Replaying)
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::Forward
    }
}

/// Click/replay state machine over an immutable [`GridLayout`].
///
/// Clicks accumulate in insertion order while the engine runs [`Mode::Forward`].
/// Once every active cell is marked the engine flips to [`Mode::Replaying`] and
/// each [`replay_tick`](Self::replay_tick) retracts the oldest click, until the
/// order is empty and the cycle starts over. The marked mask is true exactly
/// for the coordinates held in the click order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplayEngine {
    layout: GridLayout,
    marked: Array2<bool>,
    click_order: VecDeque<Coord2>,
    mode: Mode,
}

impl ReplayEngine {
    pub fn new(layout: GridLayout) -> Self {
        let size = layout.size();
        Self {
            layout,
            marked: Array2::default(size.to_nd_index()),
            click_order: VecDeque::new(),
            mode: Default::default(),
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn size(&self) -> Coord2 {
        self.layout.size()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn active_count(&self) -> CellCount {
        self.layout.active_count()
    }

    pub fn marked_count(&self) -> CellCount {
        self.click_order.len().try_into().unwrap()
    }

    pub fn is_active(&self, coords: Coord2) -> bool {
        self.layout.is_active(coords)
    }

    pub fn is_marked(&self, coords: Coord2) -> bool {
        self.marked[coords.to_nd_index()]
    }

    /// A cell accepts a click iff it is active, not yet marked, and the engine
    /// is still accepting clicks.
    pub fn is_clickable(&self, coords: Coord2) -> bool {
        self.mode.is_forward() && self.is_active(coords) && !self.is_marked(coords)
    }

    /// Click history, oldest first.
    pub fn click_order(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.click_order.iter().copied()
    }

    /// Appends a click at `coords` to the order.
    ///
    /// Out-of-bounds coordinates are the only error; every in-bounds
    /// precondition failure is a soft [`ClickOutcome::Ignored`] that leaves
    /// the engine untouched, including clicks delivered while replaying.
    pub fn register_click(&mut self, coords: Coord2) -> Result<ClickOutcome> {
        use ClickOutcome::*;

        let coords = self.layout.validate_coords(coords)?;

        if !self.is_clickable(coords) {
            log::trace!("click ignored at {:?}", coords);
            return Ok(Ignored);
        }

        self.marked[coords.to_nd_index()] = true;
        self.click_order.push_back(coords);
        self.update_mode();

        Ok(if self.mode.is_replaying() {
            ReplayStarted
        } else {
            Marked
        })
    }

    /// Retracts the oldest click. The timer driving the replay is the only
    /// caller; this is the only way clicks leave the order.
    pub fn replay_tick(&mut self) -> TickOutcome {
        use TickOutcome::*;

        if !self.mode.is_replaying() {
            return Idle;
        }

        // Replaying implies a non-empty order.
        let Some(coords) = self.click_order.pop_front() else {
            self.update_mode();
            return Idle;
        };

        self.marked[coords.to_nd_index()] = false;
        log::trace!("retracted click at {:?}", coords);
        self.update_mode();

        if self.mode.is_forward() { Completed } else { Retracted }
    }

    /// Mode is a function of the click-order length, re-evaluated after every
    /// mutation. A grid with no active cells never leaves [`Mode::Forward`].
    fn update_mode(&mut self) {
        match self.mode {
            Mode::Forward
                if self.active_count() > 0 && self.marked_count() >= self.active_count() =>
            {
                self.mode = Mode::Replaying;
                log::debug!("all {} active cells marked, replaying", self.active_count());
            }
            Mode::Replaying if self.click_order.is_empty() => {
                self.mode = Mode::Forward;
                log::debug!("replay finished, accepting clicks again");
            }
            _ => {}
        }
    }
}
