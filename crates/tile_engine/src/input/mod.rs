//! Input events consumed by moving bodies
//!
//! The host translates its window events into [`InputEvent`]s: one per
//! directional key press or release. Bodies never look at raw keys.

use crate::foundation::math::Vec2;

/// Movement direction of an input edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards negative y
    Up,
    /// Towards positive y
    Down,
    /// Towards negative x
    Left,
    /// Towards positive x
    Right,
}

impl Direction {
    /// Unit vector pointing in this direction (y grows downwards)
    pub fn unit(self) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, -1.0),
            Self::Down => Vec2::new(0.0, 1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// A directional key edge: pressed (`true`) or released (`false`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputEvent {
    /// Direction the key maps to
    pub direction: Direction,
    /// Press or release
    pub pressed: bool,
}

impl InputEvent {
    /// Key press edge
    pub fn press(direction: Direction) -> Self {
        Self { direction, pressed: true }
    }

    /// Key release edge
    pub fn release(direction: Direction) -> Self {
        Self { direction, pressed: false }
    }

    /// Translate a raw key event into a directional edge
    ///
    /// Returns `None` for keys without a direction and for auto-repeat
    /// presses, which are not edges.
    pub fn from_key(key: KeyCode, pressed: bool, repeat: bool) -> Option<Self> {
        if repeat {
            return None;
        }
        key.direction().map(|direction| Self { direction, pressed })
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

impl KeyCode {
    /// Movement direction bound to this key, if any
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Up | Self::W => Some(Direction::Up),
            Self::Down | Self::S => Some(Direction::Down),
            Self::Left | Self::A => Some(Direction::Left),
            Self::Right | Self::D => Some(Direction::Right),
            Self::Space | Self::Enter | Self::Escape => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_and_wasd_map_to_same_direction() {
        assert_eq!(KeyCode::Up.direction(), KeyCode::W.direction());
        assert_eq!(KeyCode::Left.direction(), Some(Direction::Left));
        assert_eq!(KeyCode::Escape.direction(), None);
    }

    #[test]
    fn test_repeat_and_unbound_keys_produce_no_event() {
        assert_eq!(InputEvent::from_key(KeyCode::Right, true, true), None);
        assert_eq!(InputEvent::from_key(KeyCode::Space, true, false), None);
        assert_eq!(
            InputEvent::from_key(KeyCode::D, false, false),
            Some(InputEvent::release(Direction::Right))
        );
    }

    #[test]
    fn test_units_are_opposite() {
        assert_eq!(Direction::Up.unit(), -Direction::Down.unit());
        assert_eq!(Direction::Left.unit(), -Direction::Right.unit());
    }
}
