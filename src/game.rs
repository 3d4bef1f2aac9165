use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GridSize, MAX_SPEED, MIN_SPEED};
use crate::food::Food;
use crate::input::{Direction, GameInput};
use crate::snake::{Position, Snake};

/// Snapshot handed to the render sink once per cycle.
#[derive(Debug, Clone)]
pub struct RenderState {
    /// Body cells from head to tail.
    pub body: Vec<Position>,
    pub food: Position,
    /// Cell vacated this tick, as an incremental-redraw hint.
    pub vacated: Option<Position>,
    pub speed: u32,
    pub max_length: usize,
    pub paused: bool,
}

/// Complete mutable game state for one session.
///
/// Owns the snake, the food, and the session-level knobs (speed, pause,
/// high-water length). All mutation happens through `apply_input` and
/// `tick` on the single simulation thread.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    bounds: GridSize,
    rng: StdRng,
    speed: u32,
    max_length_seen: usize,
    paused: bool,
    pending_direction: Option<Direction>,
}

impl GameState {
    /// Creates a session with an entropy-seeded RNG.
    #[must_use]
    pub fn new(bounds: GridSize, initial_speed: u32) -> Self {
        Self::new_with_seed(bounds, initial_speed, rand::random())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, initial_speed: u32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let snake = Snake::new(bounds.center());
        let food = Food::spawn(&mut rng, bounds, &snake)
            .expect("a fresh board with a one-cell snake always has free cells");

        Self {
            snake,
            food,
            bounds,
            rng,
            speed: initial_speed.clamp(MIN_SPEED, MAX_SPEED),
            max_length_seen: 1,
            paused: false,
            pending_direction: None,
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// Order matters: the latched direction request is applied first, a
    /// paused session then skips movement entirely, and after movement the
    /// feeding check runs before the self-collision check. The two can
    /// never both hold on one tick because food is placed off the body,
    /// so a head cell that matches the food cannot also be a segment.
    pub fn tick(&mut self) {
        if let Some(requested) = self.pending_direction.take() {
            self.snake.update_direction(requested);
        }

        if self.paused {
            return;
        }

        self.snake.advance(self.bounds);

        if self.snake.head() == self.food.position {
            self.snake.grow();
            self.max_length_seen = self.max_length_seen.max(self.snake.target_length());
            self.replace_food();
        } else if self.snake.self_collision() {
            self.snake.reset();
            self.replace_food();
        }
    }

    /// Applies one external input event.
    ///
    /// Direction requests are latched with last-input-wins semantics and
    /// consumed on the next tick. Pause and speed act immediately and are
    /// honored regardless of pause state. `Quit` is the loop's concern and
    /// is a no-op here.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.pending_direction = Some(direction),
            GameInput::TogglePause => self.paused = !self.paused,
            GameInput::SpeedUp => self.speed = (self.speed + 1).min(MAX_SPEED),
            GameInput::SpeedDown => self.speed = self.speed.saturating_sub(1).max(MIN_SPEED),
            GameInput::Quit => {}
        }
    }

    /// Emits the snapshot consumed by the render sink.
    ///
    /// While paused no cell was vacated this cycle, so the redraw hint is
    /// suppressed rather than repeating the last pre-pause tail.
    #[must_use]
    pub fn render_state(&self) -> RenderState {
        RenderState {
            body: self.snake.segments().copied().collect(),
            food: self.food.position,
            vacated: if self.paused {
                None
            } else {
                self.snake.last_tail()
            },
            speed: self.speed,
            max_length: self.max_length_seen,
            paused: self.paused,
        }
    }

    /// Returns the tick period implied by the current speed setting.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.speed))
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn speed(&self) -> u32 {
        self.speed
    }

    #[must_use]
    pub fn max_length_seen(&self) -> usize {
        self.max_length_seen
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Re-places food off the current body.
    ///
    /// When no free cell exists the stale food position is kept and the
    /// tick continues; the next feeding cannot occur until a cell frees
    /// up, which beats hanging in a placement loop.
    fn replace_food(&mut self) {
        if let Ok(food) = Food::spawn(&mut self.rng, self.bounds, &self.snake) {
            self.food = food;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{GridSize, MAX_SPEED, MIN_SPEED};
    use crate::food::Food;
    use crate::input::{Direction, GameInput};
    use crate::snake::{Position, Snake};

    use super::GameState;

    const BOUNDS: GridSize = GridSize {
        width: 32,
        height: 24,
    };

    fn state_with(snake: Snake, food: Position, seed: u64) -> GameState {
        let mut state = GameState::new_with_seed(BOUNDS, 10, seed);
        state.snake = snake;
        state.food = Food::at(food);
        state
    }

    #[test]
    fn growth_law_holds_across_feedings() {
        let mut state = state_with(
            Snake::new(Position { x: 1, y: 1 }),
            Position { x: 3, y: 1 },
            1,
        );

        // Two plain ticks, feeding on the second.
        state.tick();
        assert_eq!(state.snake.len(), state.snake.target_length());
        state.tick();

        assert_eq!(state.snake.target_length(), 2);
        assert_eq!(state.max_length_seen(), 2);

        // The added cell materializes on the following tick.
        state.tick();
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.snake.len(), state.snake.target_length());
    }

    #[test]
    fn feeding_is_detected_before_any_collision_check() {
        // Length-3 snake heading straight at the food.
        let snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 0, y: 0 },
            ],
            Direction::Right,
            BOUNDS.center(),
        );
        let mut state = state_with(snake, Position { x: 3, y: 0 }, 2);

        state.tick();

        assert_eq!(state.snake.head(), Position { x: 3, y: 0 });
        assert_eq!(state.snake.target_length(), 4);
        // No reset happened: the body is intact and grows on the next tick.
        assert_eq!(state.snake.len(), 3);
        state.tick();
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn self_collision_resets_to_start_state() {
        // Tight loop: stepping down lands the head on a mid-body segment.
        let snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 3, y: 2 },
                Position { x: 3, y: 3 },
                Position { x: 2, y: 3 },
                Position { x: 1, y: 3 },
            ],
            Direction::Down,
            BOUNDS.center(),
        );
        let mut state = state_with(snake, Position { x: 20, y: 20 }, 3);

        state.tick();

        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.target_length(), 1);
        assert_eq!(state.snake.head(), BOUNDS.center());
        assert_eq!(state.snake.direction(), Direction::Right);
    }

    #[test]
    fn max_length_survives_a_reset() {
        let mut state = state_with(
            Snake::new(Position { x: 1, y: 1 }),
            Position { x: 2, y: 1 },
            4,
        );

        state.tick();
        assert_eq!(state.max_length_seen(), 2);

        // Force a collision-equivalent reset.
        state.snake.reset();
        assert_eq!(state.max_length_seen(), 2);
    }

    #[test]
    fn food_never_overlaps_body_after_replacement() {
        let mut state = GameState::new_with_seed(BOUNDS, 10, 5);

        for turn in 0..200 {
            // Wander in a rectangle so the snake keeps moving legally.
            let direction = match turn % 4 {
                0 => Direction::Right,
                1 => Direction::Down,
                2 => Direction::Left,
                _ => Direction::Up,
            };
            state.apply_input(GameInput::Direction(direction));
            state.tick();

            assert!(!state.snake.occupies(state.food.position));
        }
    }

    #[test]
    fn speed_stays_within_bounds() {
        let mut state = GameState::new_with_seed(BOUNDS, 10, 6);

        for _ in 0..100 {
            state.apply_input(GameInput::SpeedUp);
        }
        assert_eq!(state.speed(), MAX_SPEED);

        for _ in 0..100 {
            state.apply_input(GameInput::SpeedDown);
        }
        assert_eq!(state.speed(), MIN_SPEED);
    }

    #[test]
    fn pause_freezes_positions_length_and_food() {
        let mut state = GameState::new_with_seed(BOUNDS, 10, 7);
        state.apply_input(GameInput::TogglePause);

        let body_before: Vec<Position> = state.snake.segments().copied().collect();
        let food_before = state.food.position;

        for _ in 0..10 {
            state.tick();
        }

        let body_after: Vec<Position> = state.snake.segments().copied().collect();
        assert_eq!(body_before, body_after);
        assert_eq!(state.food.position, food_before);

        // Speed changes are still honored while paused.
        state.apply_input(GameInput::SpeedUp);
        assert_eq!(state.speed(), 11);

        state.apply_input(GameInput::TogglePause);
        state.tick();
        assert_ne!(
            body_before,
            state.snake.segments().copied().collect::<Vec<_>>()
        );
    }

    #[test]
    fn render_state_reflects_the_session() {
        let mut state = GameState::new_with_seed(BOUNDS, 12, 8);
        state.food = Food::at(Position { x: 0, y: 0 });
        state.tick();

        let render = state.render_state();

        assert_eq!(render.body.first(), Some(&state.snake.head()));
        assert_eq!(render.food, state.food.position);
        assert_eq!(render.vacated, state.snake.last_tail());
        assert_eq!(render.speed, 12);
        assert_eq!(render.max_length, 1);
        assert!(!render.paused);
    }

    #[test]
    fn entropy_seeded_session_starts_playable() {
        let state = GameState::new(BOUNDS, 10);

        assert_eq!(state.snake.head(), BOUNDS.center());
        assert!(!state.snake.occupies(state.food.position));
        assert_eq!(state.speed(), 10);
    }

    #[test]
    fn paused_snapshot_carries_no_vacated_cell() {
        let mut state = GameState::new_with_seed(BOUNDS, 10, 10);
        state.food = Food::at(Position { x: 0, y: 0 });

        state.tick();
        assert!(state.render_state().vacated.is_some());

        state.apply_input(GameInput::TogglePause);
        state.tick();
        assert_eq!(state.render_state().vacated, None);

        state.apply_input(GameInput::TogglePause);
        state.tick();
        assert!(state.render_state().vacated.is_some());
    }

    #[test]
    fn tick_interval_follows_speed() {
        let state = GameState::new_with_seed(BOUNDS, 10, 9);
        assert_eq!(state.tick_interval().as_millis(), 100);
    }
}
