use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::apple::Apple;
use crate::config::GameConfig;
use crate::input::Heading;
use crate::snake::{Cell, Snake};

/// The one terminal gameplay condition: the head hit a wall or the body.
///
/// Wall and self collision are deliberately indistinguishable here; both end
/// the session the same way. Always recovered by the outer loop (game-over
/// screen, then [`Game::reset`]), never propagated further.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("snake collided")]
pub struct Collision;

/// Sub-state tracking the player's standing against the high score.
///
/// Advances only on a scoring tick and only forward; [`Game::reset`] is the
/// sole way back to `None`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RecordPhase {
    /// Below the standing high score.
    None,
    /// Caught up to the standing high score, not yet past it.
    AtRecord,
    /// Strictly exceeded it this tick; fires at most once per session.
    JustBroke,
    /// Past the record; the banner runs out its display window.
    Holding,
}

/// What happened during one tick, for the audio/presentation layer.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TickEvents {
    pub ate_apple: bool,
    pub broke_record: bool,
}

/// Snapshot shown on the game-over screen, captured before the reset wipes
/// the session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameOverSummary {
    pub score: usize,
    pub highscore: usize,
    pub broke_record: bool,
}

/// The game controller: owns the snake, the apple, and score bookkeeping,
/// and runs the per-tick update protocol.
#[derive(Debug)]
pub struct Game {
    pub snake: Snake,
    pub apple: Apple,
    highscore: usize,
    record_phase: RecordPhase,
    celebrating_until: Option<Instant>,
    broke_record: bool,
    config: GameConfig,
    rng: StdRng,
}

impl Game {
    /// Creates a game with an entropy-seeded apple sequence.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::from_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic game for tests and reproducible runs.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let snake = new_snake(&config);
        let apple = Apple::spawn(&mut rng, &config);
        let highscore = snake.len();

        // A fresh process starts with score == highscore, so the player is
        // already at the record.
        let record_phase = if snake.len() == highscore {
            RecordPhase::AtRecord
        } else {
            RecordPhase::None
        };

        Self {
            snake,
            apple,
            highscore,
            record_phase,
            celebrating_until: None,
            broke_record: false,
            config,
            rng,
        }
    }

    /// Runs one tick of the update protocol.
    ///
    /// Order is fixed: advance the snake, test the apple (grow, score,
    /// advance the record machine, relocate), test self-collision, test the
    /// walls. Returns the tick's cue-worthy events, or [`Collision`] when
    /// the session is over.
    pub fn play(&mut self, now: Instant) -> Result<TickEvents, Collision> {
        let mut events = TickEvents::default();

        self.snake.step(self.config.cell_size);

        if self.snake.head() == self.apple.position {
            events.ate_apple = true;
            self.snake.grow();

            if self.snake.len() >= self.highscore {
                self.highscore = self.snake.len();
                events.broke_record = self.advance_record_phase(now);
            }

            self.apple.relocate(&mut self.rng, &self.config);
        }

        if self.snake.head_hits_tail() {
            return Err(Collision);
        }

        if !self
            .snake
            .head()
            .is_inside(self.config.width, self.config.height)
        {
            return Err(Collision);
        }

        Ok(events)
    }

    /// Advances the record phase after a scoring tick. Returns true exactly
    /// when the standing high score was first strictly exceeded.
    fn advance_record_phase(&mut self, now: Instant) -> bool {
        match self.record_phase {
            RecordPhase::None => {
                self.record_phase = RecordPhase::AtRecord;
                false
            }
            RecordPhase::AtRecord => {
                self.record_phase = RecordPhase::JustBroke;
                self.celebrating_until = Some(now + self.config.celebration_window);
                self.broke_record = true;
                true
            }
            RecordPhase::JustBroke | RecordPhase::Holding => {
                self.record_phase = RecordPhase::Holding;
                false
            }
        }
    }

    /// Returns true while the "New record!!!" banner should be visible.
    ///
    /// Both the controller and the score display consult this, so the
    /// banner's lifetime is bounded by the window no matter who checks.
    #[must_use]
    pub fn celebration_active(&self, now: Instant) -> bool {
        matches!(
            self.record_phase,
            RecordPhase::JustBroke | RecordPhase::Holding
        ) && self.celebrating_until.is_some_and(|until| now <= until)
    }

    /// Starts a fresh session: new snake and apple, record machine back to
    /// `None`. The high score survives for the life of the process.
    pub fn reset(&mut self) {
        self.snake = new_snake(&self.config);
        self.apple = Apple::spawn(&mut self.rng, &self.config);
        self.record_phase = RecordPhase::None;
        self.celebrating_until = None;
        self.broke_record = false;
    }

    /// Captures the numbers for the game-over screen.
    #[must_use]
    pub fn summary(&self) -> GameOverSummary {
        GameOverSummary {
            score: self.score(),
            highscore: self.highscore,
            broke_record: self.broke_record,
        }
    }

    /// Current score: the snake's length.
    #[must_use]
    pub fn score(&self) -> usize {
        self.snake.len()
    }

    /// Best score seen this process lifetime. Never decreases.
    #[must_use]
    pub fn highscore(&self) -> usize {
        self.highscore
    }

    /// Current record phase.
    #[must_use]
    pub fn record_phase(&self) -> RecordPhase {
        self.record_phase
    }

    /// True once this session has strictly exceeded the standing high score.
    #[must_use]
    pub fn broke_record(&self) -> bool {
        self.broke_record
    }

    /// The configuration this game was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

fn new_snake(config: &GameConfig) -> Snake {
    let start = Cell {
        x: config.cell_size,
        y: config.cell_size,
    };
    Snake::new(start, config.start_length, Heading::Down)
}

/// Inter-tick delay for the given snake length.
///
/// Shrinks smoothly as the snake grows, then holds a constant floor once
/// the length passes the configured threshold.
#[must_use]
pub fn tick_delay(length: usize, config: &GameConfig) -> Duration {
    if length > config.speed_floor_length {
        return Duration::from_secs_f64(0.07);
    }

    let len = length as f64;
    Duration::from_secs_f64(0.3 - (0.1 * len - 0.1).sqrt() / 10.0)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::apple::Apple;
    use crate::config::GameConfig;
    use crate::input::Heading;
    use crate::snake::{Cell, Snake};

    use super::{tick_delay, Collision, Game, RecordPhase};

    const OFF_PATH: Cell = Cell { x: 600, y: 600 };

    fn test_game() -> Game {
        let mut game = Game::with_seed(GameConfig::classic(), 7);
        game.apple = Apple::at(OFF_PATH);
        game
    }

    fn eat_one(game: &mut Game, now: Instant) -> super::TickEvents {
        // Put the apple on the cell the head is about to enter.
        let mut probe = game.snake.clone();
        probe.step(game.config().cell_size);
        game.apple = Apple::at(probe.head());

        let events = game.play(now).expect("eating tick should not collide");
        game.apple = Apple::at(OFF_PATH);
        events
    }

    #[test]
    fn eating_grows_the_snake_and_raises_the_score() {
        let mut game = test_game();
        let events = eat_one(&mut game, Instant::now());

        assert!(events.ate_apple);
        assert_eq!(game.score(), 2);
        assert_eq!(game.highscore(), 2);
    }

    #[test]
    fn apple_test_is_exact_cell_equality() {
        let mut game = test_game();
        game.snake = Snake::new(Cell { x: 200, y: 160 }, 1, Heading::Down);
        // One pixel off the head's next cell: no meal.
        game.apple = Apple::at(Cell { x: 201, y: 200 });

        let events = game.play(Instant::now()).expect("no collision");

        assert!(!events.ate_apple);
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn wall_collision_triggers_exactly_at_the_boundary() {
        let mut game = test_game();
        game.snake = Snake::new(Cell { x: 600, y: 0 }, 1, Heading::Right);

        // 600 → 640: off the board.
        assert_eq!(game.play(Instant::now()), Err(Collision));
    }

    #[test]
    fn last_on_board_column_is_not_a_wall_collision() {
        let mut game = test_game();
        game.snake = Snake::new(Cell { x: 560, y: 0 }, 1, Heading::Right);

        // 560 → 600: still on the board.
        assert!(game.play(Instant::now()).is_ok());
        assert_eq!(game.snake.head(), Cell { x: 600, y: 0 });
    }

    #[test]
    fn self_collision_ends_the_session() {
        let mut game = test_game();
        // A loop: after one step left the head lands at (80, 120), which the
        // body shift has just filled from the old fourth segment.
        game.snake = Snake::from_segments(
            vec![
                Cell { x: 120, y: 120 },
                Cell { x: 120, y: 80 },
                Cell { x: 80, y: 80 },
                Cell { x: 80, y: 120 },
                Cell { x: 80, y: 160 },
            ],
            Heading::Left,
        );

        assert_eq!(game.play(Instant::now()), Err(Collision));
    }

    #[test]
    fn fresh_process_breaks_record_on_first_meal() {
        // Score starts equal to the high score, so the first meal strictly
        // exceeds it.
        let mut game = test_game();
        assert_eq!(game.record_phase(), RecordPhase::AtRecord);

        let events = eat_one(&mut game, Instant::now());

        assert!(events.broke_record);
        assert!(game.broke_record());
        assert_eq!(game.record_phase(), RecordPhase::JustBroke);
    }

    #[test]
    fn record_machine_fires_just_broke_exactly_once() {
        let mut game = test_game();
        game.reset();
        assert_eq!(game.record_phase(), RecordPhase::None);

        let now = Instant::now();

        // First meal at-or-past the standing record only arms the machine.
        let events = eat_one(&mut game, now);
        assert!(!events.broke_record);
        assert!(!game.broke_record());
        assert_eq!(game.record_phase(), RecordPhase::AtRecord);

        // Strictly exceeds it: fires once.
        let events = eat_one(&mut game, now);
        assert!(events.broke_record);
        assert!(game.broke_record());
        assert_eq!(game.record_phase(), RecordPhase::JustBroke);

        // Further meals keep updating the high score without refiring.
        for _ in 0..3 {
            let events = eat_one(&mut game, now);
            assert!(!events.broke_record);
            assert_eq!(game.record_phase(), RecordPhase::Holding);
        }
        assert_eq!(game.highscore(), game.score());
    }

    #[test]
    fn celebration_banner_expires_after_the_window() {
        let mut game = test_game();
        let now = Instant::now();

        let events = eat_one(&mut game, now);
        assert!(events.broke_record);

        assert!(game.celebration_active(now));
        assert!(game.celebration_active(now + Duration::from_millis(1999)));
        assert!(!game.celebration_active(now + Duration::from_millis(2001)));
    }

    #[test]
    fn highscore_survives_reset_and_never_decreases() {
        let mut game = test_game();
        let now = Instant::now();

        eat_one(&mut game, now);
        eat_one(&mut game, now);
        assert_eq!(game.highscore(), 3);

        game.reset();
        assert_eq!(game.score(), 1);
        assert_eq!(game.highscore(), 3);
        assert_eq!(game.record_phase(), RecordPhase::None);
        assert!(!game.broke_record());

        // A short new run leaves the record untouched.
        game.play(now).expect("no collision");
        assert_eq!(game.highscore(), 3);
    }

    #[test]
    fn tick_delay_starts_at_300ms_and_shrinks_to_the_floor() {
        let config = GameConfig::classic();

        assert!((tick_delay(1, &config).as_secs_f64() - 0.3).abs() < 1e-9);

        for length in 1..config.speed_floor_length {
            assert!(
                tick_delay(length + 1, &config) < tick_delay(length, &config),
                "delay should strictly decrease at length {length}"
            );
        }

        let floor = tick_delay(config.speed_floor_length + 1, &config);
        assert!((floor.as_secs_f64() - 0.07).abs() < 1e-9);
        assert_eq!(tick_delay(100, &config), floor);
        assert_eq!(tick_delay(1000, &config), floor);
    }
}
