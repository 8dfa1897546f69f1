//! Score, life and frame counters for one round.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ledger {
    /// Never decreases during play.
    pub score: u32,
    pub life: u32,
    /// GamePlay frames elapsed this round.
    pub game_timer: u32,
    /// Remaining invulnerability frames after a hit.
    pub player_timer: u32,
}

impl Ledger {
    pub fn new(starting_life: u32) -> Self {
        Self {
            score: 0,
            life: starting_life,
            game_timer: 0,
            player_timer: 0,
        }
    }

    pub fn award_kill(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Take one life and start the invulnerability window.
    /// Returns `true` when this hit depleted the last life.
    pub fn lose_life(&mut self, invulnerable_frames: u32) -> bool {
        self.life = self.life.saturating_sub(1);
        self.player_timer = invulnerable_frames;
        self.life == 0
    }

    pub fn is_invulnerable(&self) -> bool {
        self.player_timer > 0
    }

    pub fn is_depleted(&self) -> bool {
        self.life == 0
    }

    /// End-of-frame bookkeeping.
    pub fn advance_frame(&mut self) {
        self.game_timer = self.game_timer.wrapping_add(1);
        self.player_timer = self.player_timer.saturating_sub(1);
    }
}
