//! Timed player buffs
//!
//! Picking up a kind extends its timer by a fixed bonus up to a per-kind cap.
//! Durations stack, intensity does not.

use serde::{Deserialize, Serialize};

use super::state::PowerupKind;
use crate::decay;

/// Bonus seconds granted per pickup, and the cap on the remaining time
pub fn bonus_and_cap(kind: PowerupKind) -> (f32, f32) {
    match kind {
        PowerupKind::Rapid => (7.0, 10.0),
        PowerupKind::Shield => (4.0, 6.0),
        PowerupKind::Spread => (9.0, 12.0),
    }
}

/// Remaining seconds of each buff
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Buffs {
    pub rapid: f32,
    pub shield: f32,
    pub spread: f32,
}

impl Buffs {
    fn slot(&mut self, kind: PowerupKind) -> &mut f32 {
        match kind {
            PowerupKind::Rapid => &mut self.rapid,
            PowerupKind::Shield => &mut self.shield,
            PowerupKind::Spread => &mut self.spread,
        }
    }

    pub fn remaining(&self, kind: PowerupKind) -> f32 {
        match kind {
            PowerupKind::Rapid => self.rapid,
            PowerupKind::Shield => self.shield,
            PowerupKind::Spread => self.spread,
        }
    }

    #[inline]
    pub fn is_active(&self, kind: PowerupKind) -> bool {
        self.remaining(kind) > 0.0
    }

    /// Extend `kind` by its bonus, capped. Returns the new remaining time.
    pub fn apply(&mut self, kind: PowerupKind) -> f32 {
        let (bonus, cap) = bonus_and_cap(kind);
        let slot = self.slot(kind);
        *slot = (*slot + bonus).min(cap);
        *slot
    }

    /// Run every timer down by `dt`
    pub fn decay(&mut self, dt: f32) {
        for kind in PowerupKind::ALL {
            let slot = self.slot(kind);
            *slot = decay(*slot, dt);
        }
    }
}
