//! Keyboard input: raw key mapping and direction bookkeeping

pub mod controller;
pub mod handler;

pub use controller::InputController;
pub use handler::{InputHandler, KeyAction};
