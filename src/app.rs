use crate::banner::Banner;
use crate::command::Command;
use crate::config::GameConfig;
use crate::game::{Ending, Game, Grid, NoSpaceAvailable};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, buffer::Buffer, layout::Rect, widgets::Widget, Terminal};
use std::io;
use std::time::Instant;

#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    phase: Phase,
    game: Game<R>,

    /// When the next tick is due.  `None` when no tick has been scheduled
    /// since the last one ran or the phase last changed.
    next_tick: Option<Instant>,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(config: GameConfig, grid: Grid, rng: R) -> Result<App<R>, NoSpaceAvailable> {
        Ok(App {
            phase: Phase::Start,
            game: Game::new_with_rng(config, grid, rng)?,
            next_tick: None,
        })
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        log::info!("Quitting");
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    /// Wait for either the next tick or an input event, whichever comes
    /// first, and handle it.  Outside of play, there are no ticks.
    fn process_input(&mut self) -> io::Result<()> {
        if self.phase == Phase::Playing {
            let now = Instant::now();
            let when = *self
                .next_tick
                .get_or_insert_with(|| now + self.game.tick_period());
            let wait = when.saturating_duration_since(now);
            if wait.is_zero() || !poll(wait)? {
                self.next_tick = None;
                self.tick(Instant::now());
                return Ok(());
            }
        }
        self.handle_event(read()?);
        Ok(())
    }

    fn tick(&mut self, now: Instant) {
        if let Some(ending) = self.game.tick(now) {
            self.fire(Trigger::Ended(ending));
        }
    }

    fn handle_event(&mut self, event: Event) {
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return;
        };
        let trigger = match (self.phase, cmd) {
            (_, Command::Quit) => Trigger::Quit,
            (Phase::Start, Command::Begin) => Trigger::Begin,
            (Phase::GameOver(_), Command::Restart) => Trigger::Restart,
            (Phase::Playing, Command::Boost) => {
                if !self.game.trigger_boost(Instant::now()) {
                    log::debug!("Boost unavailable");
                }
                return;
            }
            (Phase::Playing, cmd) => {
                if let Some(direction) = cmd.direction() {
                    self.game.turn(direction);
                }
                return;
            }
            _ => return,
        };
        self.fire(trigger);
    }

    /// Apply `trigger` to the current phase
    fn fire(&mut self, trigger: Trigger) {
        let next = self.phase.transition(trigger);
        if next == self.phase {
            return;
        }
        if matches!(self.phase, Phase::GameOver(_)) && next == Phase::Playing {
            if let Err(e) = self.game.restart() {
                log::warn!("Could not restart game: {e}");
                self.phase = Phase::GameOver(Ending::Exhausted);
                return;
            }
        }
        log::debug!("{:?} -> {:?} on {:?}", self.phase, next, trigger);
        self.phase = next;
        self.next_tick = None;
    }
}

impl<R> App<R> {
    fn quitting(&self) -> bool {
        self.phase == Phase::Terminated
    }
}

impl<R> Widget for &App<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.game.render(area, buf);
        match self.phase {
            Phase::Start => Banner::title_screen(self.game.boost_enabled()).render(area, buf),
            Phase::GameOver(ending) => {
                Banner::game_over(ending.to_string(), self.game.score(), self.game.level())
                    .render(area, buf);
            }
            Phase::Playing | Phase::Terminated => (),
        }
    }
}

/// The top-level states of the program
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    /// Title screen; the game is shown but doesn't move
    Start,
    Playing,
    GameOver(Ending),
    Terminated,
}

impl Phase {
    /// Return the phase that follows `self` on `trigger`.  Triggers that
    /// don't apply to the current phase leave it unchanged.
    fn transition(self, trigger: Trigger) -> Phase {
        match (self, trigger) {
            (_, Trigger::Quit) => Phase::Terminated,
            (Phase::Start, Trigger::Begin) => Phase::Playing,
            (Phase::Playing, Trigger::Ended(ending)) => Phase::GameOver(ending),
            (Phase::GameOver(_), Trigger::Restart) => Phase::Playing,
            (phase, _) => phase,
        }
    }
}

/// Events that move the program from one [`Phase`] to another
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Trigger {
    Begin,
    Ended(Ending),
    Restart,
    Quit,
}
