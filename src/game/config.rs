use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use super::action::Direction;
use super::state::Cell;

/// Cells per side of the square board
pub const GRID_SIZE: i32 = 20;
/// Milliseconds between two ticks
pub const TICK_INTERVAL_MS: u64 = 150;
/// Points awarded per food eaten
pub const FOOD_REWARD: u32 = 10;

/// Where a freshly generated food may land
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FoodPlacement {
    /// Uniform over cells not covered by the snake
    #[default]
    FreeCell,
    /// Uniform over the whole board, snake included
    Anywhere,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cells per side of the board
    pub grid_size: i32,
    /// Tick period in milliseconds
    pub tick_interval_ms: u64,
    /// Score increment per food
    pub food_reward: u32,
    /// Snake body at the start of every session, head first
    pub initial_snake: Vec<Cell>,
    /// Food position of the very first session
    pub initial_food: Cell,
    pub initial_direction: Direction,
    pub food_placement: FoodPlacement,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            tick_interval_ms: TICK_INTERVAL_MS,
            food_reward: FOOD_REWARD,
            initial_snake: vec![Cell::new(8, 8), Cell::new(8, 9)],
            initial_food: Cell::new(5, 5),
            initial_direction: Direction::Up,
            food_placement: FoodPlacement::FreeCell,
        }
    }
}

impl GameConfig {
    /// Same board, food allowed to spawn under the snake
    pub fn with_unguarded_food() -> Self {
        Self {
            food_placement: FoodPlacement::Anywhere,
            ..Default::default()
        }
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        (0..self.grid_size).contains(&cell.x) && (0..self.grid_size).contains(&cell.y)
    }

    /// Check that every starting position fits on the board, that the
    /// initial snake is a contiguous chain without overlaps, that the food
    /// starts on a free cell and that the first tick does not collide.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size <= 0 {
            bail!("grid size must be positive, got {}", self.grid_size);
        }
        if self.tick_interval_ms == 0 {
            bail!("tick interval must be non-zero");
        }
        if self.initial_snake.is_empty() {
            bail!("initial snake must have at least one segment");
        }
        for (i, cell) in self.initial_snake.iter().enumerate() {
            if !self.in_bounds(*cell) {
                bail!("initial snake segment {} at {} is off the board", i, cell);
            }
            if self.initial_snake[..i].contains(cell) {
                bail!("initial snake overlaps itself at {}", cell);
            }
        }
        for pair in self.initial_snake.windows(2) {
            let distance = (pair[0].x - pair[1].x).abs() + (pair[0].y - pair[1].y).abs();
            if distance != 1 {
                bail!("initial snake is not contiguous between {} and {}", pair[0], pair[1]);
            }
        }
        if !self.in_bounds(self.initial_food) {
            bail!("initial food at {} is off the board", self.initial_food);
        }
        if self.initial_snake.contains(&self.initial_food) {
            bail!("initial food at {} sits on the snake", self.initial_food);
        }
        let first_step = self.initial_snake[0].step(self.initial_direction);
        if !self.in_bounds(first_step) || self.initial_snake.contains(&first_step) {
            bail!(
                "initial direction {:?} collides on the first tick at {}",
                self.initial_direction,
                first_step
            );
        }
        Ok(())
    }
}
