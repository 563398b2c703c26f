// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::Config;
use crate::notifications::NotificationHandle;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Frame tick; advances the page clock by the real time elapsed.
    Tick(Instant),
    EmailChanged(String),
    Submit,
    DismissNotification(NotificationHandle),
}

/// Runtime flags passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub config: Config,
    /// Warning produced while loading the configuration, shown once at startup.
    pub config_warning: Option<String>,
}
