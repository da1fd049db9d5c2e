use super::error::{GameError, Result};
use super::rod::{Disk, Rod, RodId};
use crate::config::MAX_DISKS;

/// What a single touch did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchOutcome {
    /// Top disk of the touched rod is now selected
    Selected,
    /// Touched the selected rod again; selection cleared
    Deselected,
    /// The selected disk moved
    Moved { from: RodId, to: RodId },
    /// Target's top disk is smaller; selection kept
    Rejected,
    /// Nothing selected and the touched rod is empty
    Ignored,
}

/// Towers of Hanoi: three rods, a fixed set of disks and the selection
/// state driven by touches.
///
/// Every rod is strictly decreasing bottom to top, and the disks across
/// all rods are exactly `1..=disk_count`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HanoiGame {
    rods: [Rod; 3],
    disk_count: u8,
    max_disks: u8,
    selected: Option<RodId>,
}

impl HanoiGame {
    /// Create a game with `disk_count` disks stacked on the left rod
    pub fn new(disk_count: u8) -> Result<Self> {
        Self::with_max_disks(MAX_DISKS, disk_count)
    }

    /// Same as `new`, with a custom disk limit
    pub fn with_max_disks(max_disks: u8, disk_count: u8) -> Result<Self> {
        let mut game = Self {
            rods: Default::default(),
            disk_count: 0,
            max_disks,
            selected: None,
        };
        game.start_game(disk_count)?;
        Ok(game)
    }

    /// Reset the board with `disk_count` disks on the left rod.
    ///
    /// The count is validated first; on error the board is left as it was.
    pub fn start_game(&mut self, disk_count: u8) -> Result<()> {
        if disk_count > self.max_disks {
            return Err(GameError::TooManyDisks {
                requested: disk_count,
                max: self.max_disks,
            });
        }
        if disk_count == 0 {
            return Err(GameError::NoDisks);
        }

        let mut left = Rod::new();
        for size in (1..=disk_count).rev() {
            left.push(Disk::new(size));
        }

        self.rods = [left, Rod::new(), Rod::new()];
        self.disk_count = disk_count;
        self.selected = None;
        Ok(())
    }

    /// Apply a touch and report whether the game is now won
    pub fn touch_rod(&mut self, rod: RodId) -> bool {
        self.touch(rod);
        self.is_won()
    }

    /// Apply a touch to `rod` following the select / move state machine
    pub fn touch(&mut self, rod: RodId) -> TouchOutcome {
        match self.selected {
            None if self.rod(rod).is_empty() => TouchOutcome::Ignored,
            None => {
                self.selected = Some(rod);
                TouchOutcome::Selected
            }
            Some(from) if from == rod => {
                self.selected = None;
                TouchOutcome::Deselected
            }
            Some(from) => {
                let Some(disk) = self.rod(from).top() else {
                    // a selected rod always holds a disk
                    self.selected = None;
                    return TouchOutcome::Ignored;
                };
                if !self.rod(rod).accepts(disk) {
                    return TouchOutcome::Rejected;
                }

                self.rods[from.index()].pop();
                self.rods[rod.index()].push(disk);
                self.selected = None;
                TouchOutcome::Moved { from, to: rod }
            }
        }
    }

    /// All disks have left the start rod and sit together on another one
    pub fn is_won(&self) -> bool {
        let target = self.disk_count as usize;
        self.rod(RodId::Middle).len() == target || self.rod(RodId::Right).len() == target
    }

    pub fn rod(&self, rod: RodId) -> &Rod {
        &self.rods[rod.index()]
    }

    /// Rods in left, middle, right order
    pub fn rods(&self) -> impl Iterator<Item = (RodId, &Rod)> + '_ {
        RodId::ALL.into_iter().map(|id| (id, self.rod(id)))
    }

    pub fn selected_rod(&self) -> Option<RodId> {
        self.selected
    }

    /// The disk currently marked for a move, for highlighting
    pub fn selected_disk(&self) -> Option<Disk> {
        self.selected.and_then(|rod| self.rod(rod).top())
    }

    pub fn disk_count(&self) -> u8 {
        self.disk_count
    }

    pub fn max_disks(&self) -> u8 {
        self.max_disks
    }
}
