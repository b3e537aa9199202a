use super::speed::{level_for, ticks_per_second, Boost};
use crate::config::GameConfig;
use std::time::{Duration, Instant};

/// Score, level, and speed of a game in progress
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GameState {
    pub(crate) score: u32,
    pub(crate) level: u32,

    /// Current number of ticks per second, including any boost
    pub(crate) speed: u32,

    pub(crate) boost: Boost,
}

impl GameState {
    pub(crate) fn new(config: &GameConfig) -> GameState {
        GameState {
            score: 0,
            level: 1,
            speed: ticks_per_second(config, 1, false),
            boost: Boost::default(),
        }
    }

    /// Award points for eating a food.  Returns `true` if this raised the
    /// level.
    pub(crate) fn eat(&mut self, config: &GameConfig) -> bool {
        self.score = self.score.saturating_add(config.points_per_food);
        let level = level_for(self.score, config.points_per_level);
        let leveled = level > self.level;
        self.level = level;
        self.recompute_speed(config);
        leveled
    }

    /// Expire the boost and/or cooldown as of `now`
    pub(crate) fn update(&mut self, now: Instant, config: &GameConfig) {
        if let Some(ref bcfg) = config.boost {
            self.boost.update(now, bcfg);
        }
        self.recompute_speed(config);
    }

    /// Try to start a boost at `now`.  Always fails if boosting is disabled.
    pub(crate) fn trigger_boost(&mut self, now: Instant, config: &GameConfig) -> bool {
        let Some(ref bcfg) = config.boost else {
            return false;
        };
        let triggered = self.boost.trigger(now, bcfg);
        self.recompute_speed(config);
        triggered
    }

    /// Return the time between ticks at the current speed
    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.speed.max(1)
    }

    fn recompute_speed(&mut self, config: &GameConfig) {
        self.speed = ticks_per_second(config, self.level, self.boost.active());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts;

    fn config() -> GameConfig {
        GameConfig {
            base_speed: 10,
            speed_increment: 2,
            points_per_food: 1,
            points_per_level: 2,
            ..GameConfig::default()
        }
    }

    #[test]
    fn initial() {
        let state = GameState::new(&config());
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.speed, 10);
        assert!(!state.boost.active());
        assert!(!state.boost.cooling_down());
        assert_eq!(state.tick_period(), Duration::from_millis(100));
    }

    #[test]
    fn leveling() {
        let config = config();
        let mut state = GameState::new(&config);
        assert!(!state.eat(&config));
        assert!(state.eat(&config));
        assert_eq!((state.score, state.level, state.speed), (2, 2, 12));
        assert!(!state.eat(&config));
        assert!(state.eat(&config));
        assert_eq!((state.score, state.level, state.speed), (4, 3, 14));
    }

    #[test]
    fn boost_raises_speed_until_it_ends() {
        let config = config();
        let mut state = GameState::new(&config);
        state.eat(&config);
        state.eat(&config);
        assert_eq!(state.level, 2);
        let start = Instant::now();
        assert!(state.trigger_boost(start, &config));
        assert_eq!(state.speed, 12 + consts::DEFAULT_BOOST_SPEED);
        assert!(state.tick_period() < Duration::from_secs(1) / 12);
        state.update(start + Duration::from_secs(60), &config);
        assert_eq!(state.speed, 12);
    }

    #[test]
    fn boost_disabled() {
        let config = GameConfig {
            boost: None,
            ..config()
        };
        let mut state = GameState::new(&config);
        assert!(!state.trigger_boost(Instant::now(), &config));
        assert_eq!(state, GameState::new(&config));
    }
}
