//! Rotating content: the landing page banner carousel and the join page
//! word ticker
//!
//! [`CarouselController`] is the pure index state machine;
//! [`CarouselTicker`] wraps it with a scoped recurring timer.

pub mod controller;
pub mod ticker;

pub use controller::{CarouselController, Direction, SlideState};
pub use ticker::CarouselTicker;
