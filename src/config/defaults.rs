// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Rotation**: message and progress-caption timings
//! - **Notifications**: auto-dismiss delay
//! - **Signup**: simulated request latency
//! - **Runtime**: frame tick used to drive the clock from the window

// ==========================================================================
// Rotation Defaults
// ==========================================================================

/// Interval between two status message changes.
pub const DEFAULT_MESSAGE_INTERVAL_MS: u64 = 3000;

/// Fade delay before a new status message is shown.
pub const DEFAULT_MESSAGE_TRANSITION_MS: u64 = 300;

/// Interval between two progress caption changes.
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 2000;

/// Fade delay before a new progress caption is shown.
pub const DEFAULT_PROGRESS_TRANSITION_MS: u64 = 200;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Delay after which a notification closes on its own.
pub const DEFAULT_AUTO_DISMISS_MS: u64 = 5000;

// ==========================================================================
// Signup Defaults
// ==========================================================================

/// Simulated round trip of the signup request.
pub const DEFAULT_SIGNUP_LATENCY_MS: u64 = 1500;

// ==========================================================================
// Runtime Defaults
// ==========================================================================

/// Period of the window tick that advances the clock.
pub const FRAME_TICK_MS: u64 = 50;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_MESSAGE_TRANSITION_MS > 0);
    assert!(DEFAULT_MESSAGE_TRANSITION_MS < DEFAULT_MESSAGE_INTERVAL_MS);
    assert!(DEFAULT_PROGRESS_TRANSITION_MS > 0);
    assert!(DEFAULT_PROGRESS_TRANSITION_MS < DEFAULT_PROGRESS_INTERVAL_MS);
    assert!(DEFAULT_AUTO_DISMISS_MS > 0);
    assert!(DEFAULT_SIGNUP_LATENCY_MS > 0);
    assert!(FRAME_TICK_MS > 0);
    assert!(FRAME_TICK_MS < DEFAULT_PROGRESS_TRANSITION_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_defaults_match_page_timings() {
        assert_eq!(DEFAULT_MESSAGE_INTERVAL_MS, 3000);
        assert_eq!(DEFAULT_MESSAGE_TRANSITION_MS, 300);
        assert_eq!(DEFAULT_PROGRESS_INTERVAL_MS, 2000);
        assert_eq!(DEFAULT_PROGRESS_TRANSITION_MS, 200);
    }

    #[test]
    fn notification_and_signup_defaults() {
        assert_eq!(DEFAULT_AUTO_DISMISS_MS, 5000);
        assert_eq!(DEFAULT_SIGNUP_LATENCY_MS, 1500);
    }
}
