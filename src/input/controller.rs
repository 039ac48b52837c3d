use crate::game::Direction;

/// Holds the direction the next tick should use.
///
/// `committed` follows accepted key presses; `applied` is what the engine
/// actually moved in on the last tick. A turn is refused when it reverses
/// either of them, so a quick double turn between ticks cannot fold the
/// snake back onto its neck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputController {
    committed: Direction,
    applied: Direction,
}

impl InputController {
    pub fn new(direction: Direction) -> Self {
        Self {
            committed: direction,
            applied: direction,
        }
    }

    /// Direction handed to the next `advance`
    pub fn committed(&self) -> Direction {
        self.committed
    }

    /// Commit `requested` unless it reverses the snake. Returns whether the
    /// request was accepted.
    pub fn on_direction_key(&mut self, requested: Direction) -> bool {
        if requested.is_opposite(self.committed) || requested.is_opposite(self.applied) {
            return false;
        }
        self.committed = requested;
        true
    }

    /// Record the direction the engine used on the last tick
    pub fn on_tick(&mut self, applied: Direction) {
        self.applied = applied;
        self.committed = applied;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_perpendicular_turn() {
        let mut controller = InputController::new(Direction::Up);
        assert!(controller.on_direction_key(Direction::Left));
        assert_eq!(controller.committed(), Direction::Left);
    }

    #[test]
    fn test_rejects_reversal() {
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            let mut controller = InputController::new(dir);
            assert!(!controller.on_direction_key(dir.opposite()));
            assert_eq!(controller.committed(), dir);
        }
    }

    #[test]
    fn test_same_direction_is_accepted() {
        let mut controller = InputController::new(Direction::Right);
        assert!(controller.on_direction_key(Direction::Right));
        assert_eq!(controller.committed(), Direction::Right);
    }

    #[test]
    fn test_double_turn_between_ticks() {
        let mut controller = InputController::new(Direction::Up);

        assert!(controller.on_direction_key(Direction::Left));
        // Down is not opposite of Left, but it reverses the last move
        assert!(!controller.on_direction_key(Direction::Down));
        assert_eq!(controller.committed(), Direction::Left);

        controller.on_tick(Direction::Left);
        assert!(controller.on_direction_key(Direction::Down));
        assert_eq!(controller.committed(), Direction::Down);
    }

    #[test]
    fn test_on_tick_resyncs() {
        let mut controller = InputController::new(Direction::Up);
        controller.on_direction_key(Direction::Right);
        controller.on_tick(Direction::Up);
        assert_eq!(controller.committed(), Direction::Up);
        assert!(!controller.on_direction_key(Direction::Down));
    }
}
