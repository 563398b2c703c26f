// SPDX-License-Identifier: MPL-2.0
//! Clock subscription for the application.

use super::Message;
use crate::config::FRAME_TICK_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Periodic tick that drives the page clock.
///
/// The rotators never stop while the window is open, so the tick is always on.
pub fn create_tick_subscription() -> Subscription<Message> {
    time::every(Duration::from_millis(FRAME_TICK_MS)).map(Message::Tick)
}
