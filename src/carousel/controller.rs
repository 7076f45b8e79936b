//! Index state machine behind the banner carousel and the word ticker

use serde::{Deserialize, Serialize};

/// Which way the last transition moved
///
/// Only used to pick the slide-in animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Snapshot of a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideState {
    pub index: usize,
    pub len: usize,
    pub direction: Direction,
}

/// Current slide over a fixed-length sequence
///
/// The index is always in `0..len` and `len` is never zero, so advancing
/// and retreating cannot leave the valid range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselController {
    index: usize,
    len: usize,
    direction: Direction,
}

impl CarouselController {
    /// Create a controller at slide 0, or `None` for an empty sequence
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self {
            index: 0,
            len,
            direction: Direction::Forward,
        })
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> SlideState {
        SlideState {
            index: self.index,
            len: self.len,
            direction: self.direction,
        }
    }

    /// Move to the next slide, wrapping to 0
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.direction = Direction::Forward;
        self.index
    }

    /// Move to the previous slide, wrapping to the last one
    pub fn retreat(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.direction = Direction::Backward;
        self.index
    }

    /// Jump straight to a slide
    ///
    /// Direction is forward when moving to a higher index, backward
    /// otherwise. Out-of-range targets are ignored and return `false`.
    pub fn jump_to(&mut self, target: usize) -> bool {
        if target >= self.len {
            return false;
        }
        self.direction = if target > self.index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.index = target;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_has_no_controller() {
        assert!(CarouselController::new(0).is_none());
    }

    #[test]
    fn test_six_advances_wrap_to_start() {
        let mut carousel = CarouselController::new(6).unwrap();
        for _ in 0..6 {
            carousel.advance();
        }
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.direction(), Direction::Forward);
    }

    #[test]
    fn test_retreat_from_start_wraps_to_end() {
        let mut carousel = CarouselController::new(6).unwrap();
        assert_eq!(carousel.retreat(), 5);
        assert_eq!(carousel.direction(), Direction::Backward);
    }

    #[test]
    fn test_jump_direction() {
        let mut carousel = CarouselController::new(6).unwrap();
        assert!(carousel.jump_to(4));
        assert_eq!(carousel.direction(), Direction::Forward);
        assert!(carousel.jump_to(1));
        assert_eq!(carousel.direction(), Direction::Backward);
        assert!(carousel.jump_to(1));
        assert_eq!(carousel.direction(), Direction::Backward);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut carousel = CarouselController::new(3).unwrap();
        carousel.advance();
        assert!(!carousel.jump_to(3));
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.direction(), Direction::Forward);
    }

    #[test]
    fn test_single_slide() {
        let mut carousel = CarouselController::new(1).unwrap();
        assert_eq!(carousel.advance(), 0);
        assert_eq!(carousel.retreat(), 0);
    }
}
