use crate::config::{BoostConfig, GameConfig};
use std::time::Instant;

/// Return the level reached with `score` points
pub(crate) fn level_for(score: u32, points_per_level: u32) -> u32 {
    1 + score / points_per_level.max(1)
}

/// Return the number of ticks per second at `level`, plus the boost bonus if
/// `boosting` is true
pub(crate) fn ticks_per_second(config: &GameConfig, level: u32, boosting: bool) -> u32 {
    let bonus = match config.boost {
        Some(boost) if boosting => boost.speed,
        _ => 0,
    };
    config
        .base_speed
        .saturating_add(config.speed_increment.saturating_mul(level.saturating_sub(1)))
        .saturating_add(bonus)
}

/// Timed boost with a cooldown.
///
/// Triggering a boost starts two clocks at once: the boost itself, which ends
/// after [`BoostConfig::duration`], and the cooldown, which ends after the
/// longer [`BoostConfig::cooldown`].  A new boost can only be triggered once
/// both have run out.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Boost {
    triggered_at: Option<Instant>,
    active: bool,
    cooling_down: bool,
}

impl Boost {
    pub(crate) fn active(&self) -> bool {
        self.active
    }

    pub(crate) fn cooling_down(&self) -> bool {
        self.cooling_down
    }

    /// Clear whichever of the boost & cooldown have run out by `now`
    pub(crate) fn update(&mut self, now: Instant, config: &BoostConfig) {
        let Some(start) = self.triggered_at else {
            return;
        };
        let elapsed = now.saturating_duration_since(start);
        if self.active && elapsed >= config.duration {
            self.active = false;
            log::debug!("Boost ended");
        }
        if self.cooling_down && elapsed >= config.cooldown {
            self.cooling_down = false;
            self.triggered_at = None;
            log::debug!("Boost cooldown ended");
        }
    }

    /// Start a boost at `now` if neither a boost nor a cooldown is in effect.
    /// Returns `true` if the boost started.
    pub(crate) fn trigger(&mut self, now: Instant, config: &BoostConfig) -> bool {
        self.update(now, config);
        if self.active || self.cooling_down {
            log::trace!("Boost requested while unavailable");
            return false;
        }
        self.triggered_at = Some(now);
        self.active = true;
        self.cooling_down = true;
        log::debug!("Boost triggered");
        true
    }
}
