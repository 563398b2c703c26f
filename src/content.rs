// SPDX-License-Identifier: MPL-2.0
//! Built-in page copy.
//!
//! Both rotation lists can be replaced from `settings.toml`; the signup copy
//! is fixed.

/// Status messages shown under the title, in rotation order.
pub const MESSAGES: [&str; 20] = [
    "Something amazing is brewing...",
    "Loading awesome things...",
    "Preparing to blow your mind...",
    "Assembling the dream team...",
    "Cooking up something special...",
    "Almost ready to launch...",
    "Adding the final touches...",
    "Making it perfect for you...",
    "Gathering the best ideas...",
    "Building the future...",
    "Creating something legendary...",
    "Preparing for greatness...",
    "Adding some magic...",
    "Getting everything just right...",
    "Almost there, promise!",
    "Loading infinite possibilities...",
    "Preparing to change the world...",
    "Adding the secret sauce...",
    "Making dreams come true...",
    "Building something epic...",
];

/// Captions shown under the progress bar, in rotation order.
pub const PROGRESS_CAPTIONS: [&str; 8] = [
    "Loading awesome things...",
    "Preparing launch sequence...",
    "Assembling components...",
    "Adding finishing touches...",
    "Almost ready...",
    "Final preparations...",
    "Loading magic...",
    "Preparing for takeoff...",
];

/// Page title.
pub const TITLE: &str = "Coming Soon";

/// Text of the signup control and its notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupCopy {
    pub button_label: String,
    pub pending_label: String,
    pub success_message: String,
    pub validation_message: String,
    pub input_placeholder: String,
}

impl Default for SignupCopy {
    fn default() -> Self {
        Self {
            button_label: "Notify Me".to_string(),
            pending_label: "Subscribing...".to_string(),
            success_message: "Thanks! You'll be the first to know when we launch! 🚀".to_string(),
            validation_message: "Please enter a valid email address".to_string(),
            input_placeholder: "Enter your email".to_string(),
        }
    }
}
