use std::fmt;

use serde::{Deserialize, Serialize};

use super::action::Direction;

/// One discrete position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell one step in `direction`; may fall off the board
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The snake body, head at index 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Cell>,
}

impl Snake {
    /// Build a snake from its segments, head first.
    ///
    /// Returns `None` for an empty body: a snake always has a head.
    pub fn from_cells(body: Vec<Cell>) -> Option<Self> {
        if body.is_empty() {
            None
        } else {
            Some(Self { body })
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn segments(&self) -> &[Cell] {
        &self.body
    }

    /// True if any segment, tail included, sits on `cell`
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Prepend `head`, dropping the tail unless the snake grows
    pub(crate) fn advance_to(&mut self, head: Cell, grow: bool) {
        self.body.insert(0, head);
        if !grow {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Whether the body has no segments
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the board
    Wall,
    /// Head ran into the body
    SelfCollision,
}

impl fmt::Display for CollisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionType::Wall => f.write_str("wall"),
            CollisionType::SelfCollision => f.write_str("self"),
        }
    }
}

/// Where a session sits in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Running,
    Paused,
    /// Terminal until the next reset
    GameOver,
}

/// Complete game state for one round, plus the best score of the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub snake: Snake,
    pub food: Cell,
    /// Direction applied on the most recent tick
    pub direction: Direction,
    pub score: u32,
    pub high_score: u32,
    pub game_over: bool,
    pub is_paused: bool,
}

impl Session {
    pub fn new(snake: Snake, food: Cell, direction: Direction, high_score: u32) -> Self {
        Self {
            snake,
            food,
            direction,
            score: 0,
            high_score,
            game_over: false,
            is_paused: false,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.game_over {
            SessionPhase::GameOver
        } else if self.is_paused {
            SessionPhase::Paused
        } else {
            SessionPhase::Running
        }
    }

    /// Whether a tick would move the snake
    pub fn is_active(&self) -> bool {
        self.phase() == SessionPhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_cell_snake() -> Snake {
        Snake::from_cells(vec![Cell::new(8, 8), Cell::new(8, 9)]).unwrap()
    }

    #[test]
    fn test_cell_step() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.step(Direction::Up), Cell::new(5, 4));
        assert_eq!(cell.step(Direction::Down), Cell::new(5, 6));
        assert_eq!(cell.step(Direction::Left), Cell::new(4, 5));
        assert_eq!(cell.step(Direction::Right), Cell::new(6, 5));
        assert_eq!(Cell::new(0, 0).step(Direction::Left), Cell::new(-1, 0));
    }

    #[test]
    fn test_empty_snake_rejected() {
        assert!(Snake::from_cells(Vec::new()).is_none());
    }

    #[test]
    fn test_snake_accessors() {
        let snake = two_cell_snake();
        assert_eq!(snake.head(), Cell::new(8, 8));
        assert_eq!(snake.tail(), Cell::new(8, 9));
        assert_eq!(snake.len(), 2);
        assert!(!snake.is_empty());
        assert!(snake.occupies(Cell::new(8, 9)));
        assert!(!snake.occupies(Cell::new(9, 9)));
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = two_cell_snake();

        snake.advance_to(Cell::new(8, 7), false);
        assert_eq!(snake.segments(), &[Cell::new(8, 7), Cell::new(8, 8)]);

        snake.advance_to(Cell::new(8, 6), true);
        assert_eq!(
            snake.segments(),
            &[Cell::new(8, 6), Cell::new(8, 7), Cell::new(8, 8)]
        );
    }

    #[test]
    fn test_phase() {
        let mut session = Session::new(two_cell_snake(), Cell::new(5, 5), Direction::Up, 0);
        assert_eq!(session.phase(), SessionPhase::Running);
        assert!(session.is_active());

        session.is_paused = true;
        assert_eq!(session.phase(), SessionPhase::Paused);
        assert!(!session.is_active());

        session.game_over = true;
        assert_eq!(session.phase(), SessionPhase::GameOver);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::new(3, 4).to_string(), "(3, 4)");
        assert_eq!(CollisionType::Wall.to_string(), "wall");
    }
}
