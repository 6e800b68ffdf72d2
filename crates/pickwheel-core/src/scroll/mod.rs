//! Snapping scroll system behind every picker wheel
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions (cubic, quintic, exponential)
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `viewport` - Three-slot page geometry
//!
//! ## L3 Molecular Layer
//! - `snap` - Page scroller combining the atoms with gesture handling
//!
//! # Usage
//!
//! ```
//! use std::time::{Duration, Instant};
//! use pickwheel_core::scroll::{SnapScroller, Viewport};
//! use pickwheel_core::ScrollConfig;
//!
//! let mut scroller = SnapScroller::new(20, 3, Viewport::new(90.0, 0.0), ScrollConfig::default());
//!
//! // Drag a bit more than half a page (one page is 30 units here) and let go
//! scroller.drag_by(16.0);
//! let now = Instant::now();
//! scroller.end_gesture(0.0, now);
//!
//! // Drive the settle animation from the frame loop
//! let settled = scroller.update_at(now + Duration::from_secs(1));
//! assert_eq!(settled, Some(4));
//! ```

// L4 Atomic Layer
pub mod easing;
pub mod timing;
pub mod viewport;

// L3 Molecular Layer
pub mod snap;

pub use easing::EasingType;
pub use snap::{ScrollPhase, SnapScroller};
pub use viewport::Viewport;
