use super::{
    action::Direction,
    config::{FoodPlacement, GameConfig},
    state::{Cell, CollisionType, Session, Snake},
};
use anyhow::{Context, Result};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// What a single tick did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Paused or already over; nothing changed
    Idle,
    /// Snake moved one cell
    Moved,
    /// Snake moved onto the food and grew
    AteFood,
    /// Session ended this tick
    Collided(CollisionType),
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Snapshot after the tick
    pub session: Session,
    pub event: TickEvent,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    initial_snake: Snake,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Engine whose food sequence is fully determined by `seed`
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self> {
        config.validate().context("invalid game configuration")?;
        let initial_snake = Snake::from_cells(config.initial_snake.clone())
            .context("initial snake has no segments")?;

        Ok(Self {
            config,
            initial_snake,
            rng,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// First session of the run: fixed snake, fixed food, best score zero
    pub fn initial_session(&self) -> Session {
        Session::new(
            self.initial_snake.clone(),
            self.config.initial_food,
            self.config.initial_direction,
            0,
        )
    }

    /// Start a new round, carrying the best score forward
    pub fn reset(&mut self, previous: &Session) -> Session {
        let snake = self.initial_snake.clone();
        let food = self.generate_food(&snake);

        Session::new(
            snake,
            food,
            self.config.initial_direction,
            previous.high_score,
        )
    }

    /// Flip between running and paused. A finished session stays as it is.
    pub fn toggle_pause(&self, session: &Session) -> Session {
        let mut next = session.clone();
        if !next.game_over {
            next.is_paused = !next.is_paused;
        }
        next
    }

    /// Execute one tick in `requested` direction.
    ///
    /// A request for the reverse of the last applied direction keeps the
    /// snake on its current heading.
    pub fn advance(&mut self, session: &Session, requested: Direction) -> StepResult {
        if !session.is_active() {
            return StepResult {
                session: session.clone(),
                event: TickEvent::Idle,
            };
        }

        let direction = if requested.is_opposite(session.direction) {
            session.direction
        } else {
            requested
        };

        let new_head = session.snake.head().step(direction);
        let mut next = session.clone();
        next.direction = direction;

        if let Some(collision_type) = self.check_collision(&session.snake, new_head) {
            next.game_over = true;
            if next.score > next.high_score {
                next.high_score = next.score;
            }

            return StepResult {
                session: next,
                event: TickEvent::Collided(collision_type),
            };
        }

        let ate_food = new_head == session.food;
        next.snake.advance_to(new_head, ate_food);

        if ate_food {
            next.score += self.config.food_reward;
            next.food = self.generate_food(&next.snake);
        }

        StepResult {
            session: next,
            event: if ate_food {
                TickEvent::AteFood
            } else {
                TickEvent::Moved
            },
        }
    }

    /// Wall check, then self check against the whole pre-move body.
    ///
    /// The tail counts as occupied even though it would move away this tick.
    fn check_collision(&self, snake: &Snake, pos: Cell) -> Option<CollisionType> {
        if !self.config.in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if snake.occupies(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Pick the next food cell according to the configured placement
    pub fn generate_food(&mut self, snake: &Snake) -> Cell {
        let cells = (self.config.grid_size * self.config.grid_size) as usize;

        match self.config.food_placement {
            FoodPlacement::Anywhere => self.random_cell(),
            FoodPlacement::FreeCell if snake.len() >= cells => self.random_cell(),
            FoodPlacement::FreeCell => loop {
                let pos = self.random_cell();
                if !snake.occupies(pos) {
                    return pos;
                }
            },
        }
    }

    fn random_cell(&mut self) -> Cell {
        let x = self.rng.gen_range(0..self.config.grid_size);
        let y = self.rng.gen_range(0..self.config.grid_size);
        Cell::new(x, y)
    }
}
