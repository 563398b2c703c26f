// SPDX-License-Identifier: MPL-2.0
//! `coming_soon` is a "coming soon" landing page built with the Iced GUI framework.
//!
//! The page cycles two independent captions (status messages and progress
//! captions) with a fade between entries, takes email signups through a
//! simulated request, and reports the outcome in an auto-dismissing toast.
//!
//! Every timed behavior runs on a [`scheduler::Scheduler`], so the whole page
//! can be driven headlessly and deterministically with a
//! [`scheduler::VirtualClock`].

#![doc(html_root_url = "https://docs.rs/coming_soon/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod headless;
pub mod landing;
pub mod notifications;
pub mod rotation;
pub mod scheduler;
pub mod signup;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod ui;
