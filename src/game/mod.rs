//! Core game logic for the snake session
//!
//! Nothing in here touches the terminal. Every tick takes a `Session`
//! snapshot and produces the next one.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{FoodPlacement, GameConfig, FOOD_REWARD, GRID_SIZE, TICK_INTERVAL_MS};
pub use engine::{GameEngine, StepResult, TickEvent};
pub use state::{Cell, CollisionType, Session, SessionPhase, Snake};
