// SPDX-License-Identifier: MPL-2.0
//! Timed rotation of status text with a fade bracket around each change.
//!
//! # Components
//!
//! - [`list`] - `RotationList`, the non-empty list of entries
//! - [`rotator`] - `Rotator`, its timing and the `TransitionSurface` it drives
//!
//! # Usage
//!
//! ```ignore
//! let rotator = Rotator::new("message", content::MESSAGES.iter().copied(), timing)?;
//! rotator.start(scheduler, surface);
//! // ...
//! rotator.stop();
//! ```
//!
//! Each tick calls `begin_transition`, then after the transition delay
//! `render(next)` and `end_transition`.

mod list;
mod rotator;

pub use list::RotationList;
pub use rotator::{RotationTiming, Rotator, SharedSurface, TransitionSurface};
