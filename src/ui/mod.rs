// SPDX-License-Identifier: MPL-2.0
//! Presentation layer: iced surfaces for the headless components.
//!
//! - [`caption`] - fading text line a rotator renders into
//! - [`toast`] - the notification card
//! - [`design_tokens`] - shared colors, spacing and type scale

pub mod caption;
pub mod design_tokens;
pub mod toast;
