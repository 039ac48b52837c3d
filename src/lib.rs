//! Grid snake - a terminal snake game
//!
//! - `game`: session state machine (movement, collisions, food, scoring)
//! - `input`: key mapping and reversal guard
//! - `render`: ratatui view of a session snapshot
//! - `modes`: the interactive tick/input loop

pub mod game;
pub mod input;
pub mod logging;
pub mod modes;
pub mod render;
