use crate::domain::{HanoiGame, Result, RodId, TouchOutcome};

/// HanoiSession wraps a game the way the front-end drives it: touches in,
/// win notifications out, and a fresh board after every win.
#[derive(Clone, Debug)]
pub struct HanoiSession {
    pub game: HanoiGame,
    pub moves: u32,
    pub wins: u32,
    disk_count: u8,
}

impl HanoiSession {
    pub fn new(disk_count: u8) -> Result<Self> {
        Ok(Self {
            game: HanoiGame::new(disk_count)?,
            moves: 0,
            wins: 0,
            disk_count,
        })
    }

    /// Forward a touch. Returns true when it completed the puzzle, in which
    /// case the board has already been reset for the next round.
    ///
    /// Fails if the board cannot be reset with the session's disk count
    /// (e.g. `game` was replaced by one with a lower limit); the win is not
    /// counted then.
    pub fn touch(&mut self, rod: RodId) -> Result<bool> {
        if let TouchOutcome::Moved { .. } = self.game.touch(rod) {
            self.moves += 1;
        }
        if !self.game.is_won() {
            return Ok(false);
        }

        self.game.start_game(self.disk_count)?;
        self.wins += 1;
        self.moves = 0;
        Ok(true)
    }

    /// Start over with a different number of disks.
    /// On error the current round continues untouched.
    pub fn restart(&mut self, disk_count: u8) -> Result<()> {
        self.game.start_game(disk_count)?;
        self.disk_count = disk_count;
        self.moves = 0;
        Ok(())
    }

    pub fn disk_count(&self) -> u8 {
        self.disk_count
    }
}
