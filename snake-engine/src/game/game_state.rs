use std::time::Duration;

use crate::log;

use super::session_rng::SessionRng;
use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{Direction, EndReason, Point};

/// Score thresholds and the tick interval they unlock, fastest first. Below
/// the lowest threshold the configured base interval applies.
const SPEED_STEPS: [(u32, u64); 4] = [(150, 25), (100, 50), (50, 75), (10, 100)];

const START_DIRECTION: Direction = Direction::Right;

#[derive(Clone, Debug)]
pub struct GameState {
    snake: Snake,
    food: Point,
    score: u32,
    running: bool,
    end_reason: Option<EndReason>,
    tick_interval: Duration,
    settings: GameSettings,
}

/// Read-only render payload: everything a renderer needs to paint the live
/// game or the game-over screen.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    pub segments: Vec<Point>,
    pub food: Point,
    pub direction: Direction,
    pub score: u32,
    pub running: bool,
    pub end_reason: Option<EndReason>,
    pub tick_interval: Duration,
}

impl GameState {
    pub fn new(settings: GameSettings, rng: &mut SessionRng) -> Self {
        let snake = Snake::new(
            Point::new(0, 0),
            settings.initial_body_length,
            START_DIRECTION,
        );
        let food = random_food_position(&settings, rng);
        let tick_interval = Duration::from_millis(settings.base_tick_interval_ms);
        Self {
            snake,
            food,
            score: 0,
            running: true,
            end_reason: None,
            tick_interval,
            settings,
        }
    }

    pub fn set_direction(&mut self, requested: Direction) {
        if self.running {
            self.snake.set_direction(requested);
        }
    }

    /// One simulation step: move, recompute speed, consume food, detect
    /// collisions. A no-op once the game is over.
    pub fn tick(&mut self, rng: &mut SessionRng) {
        if !self.running {
            return;
        }

        let new_head = self.snake.advance(self.settings.unit_size);

        // Derived from the score before this tick's consumption, so eating
        // only affects the interval from the next tick on.
        self.tick_interval = self.interval_for_score(self.score);

        if new_head == self.food {
            self.score += 1;
            self.food = random_food_position(&self.settings, rng);
            log!(
                "Ate food at ({}, {}). Score: {}, respawned at ({}, {})",
                new_head.x,
                new_head.y,
                self.score,
                self.food.x,
                self.food.y
            );
        } else {
            self.snake.retract();
        }

        self.check_collisions(new_head);
    }

    pub fn reset(&mut self, rng: &mut SessionRng) {
        self.snake = Snake::new(
            Point::new(0, 0),
            self.settings.initial_body_length,
            START_DIRECTION,
        );
        self.food = random_food_position(&self.settings, rng);
        self.score = 0;
        self.running = true;
        self.end_reason = None;
        self.tick_interval = Duration::from_millis(self.settings.base_tick_interval_ms);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            segments: self.snake.segments().iter().copied().collect(),
            food: self.food,
            direction: self.snake.direction(),
            score: self.score,
            running: self.running,
            end_reason: self.end_reason,
            tick_interval: self.tick_interval,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    fn check_collisions(&mut self, head: Point) {
        // Only live segments are compared; the head itself is index 0.
        if self.snake.hits_itself() {
            self.end(EndReason::SelfCollision);
            return;
        }

        let max_x = self.settings.board_width - self.settings.unit_size;
        let max_y = self.settings.board_height - self.settings.unit_size;
        if head.x < 0 || head.x > max_x || head.y < 0 || head.y > max_y {
            self.end(EndReason::WallCollision);
        }
    }

    fn end(&mut self, reason: EndReason) {
        self.running = false;
        self.end_reason = Some(reason);
        log!("Game over: {:?}. Final score: {}", reason, self.score);
    }

    fn interval_for_score(&self, score: u32) -> Duration {
        for (threshold, millis) in SPEED_STEPS {
            if score >= threshold {
                return Duration::from_millis(millis);
            }
        }
        Duration::from_millis(self.settings.base_tick_interval_ms)
    }

    #[cfg(test)]
    fn set_food(&mut self, food: Point) {
        self.food = food;
    }

    #[cfg(test)]
    fn food(&self) -> Point {
        self.food
    }
}

fn random_food_position(settings: &GameSettings, rng: &mut SessionRng) -> Point {
    // No exclusion of snake-occupied or previous cells; the food may land on
    // the body and get eaten in passing.
    Point::new(
        rng.random_range(0..settings.cells_x()) * settings.unit_size,
        rng.random_range(0..settings.cells_y()) * settings.unit_size,
    )
}
