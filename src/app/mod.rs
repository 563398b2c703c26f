// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the landing page and
//! the iced runtime.
//!
//! The `App` struct wires together the rotating captions, the toast slot and
//! the signup form, and translates between UI messages and the page's
//! signals. The page runs on a [`VirtualClock`] that the frame tick advances
//! by the real time elapsed, so every timer in the page is deterministic
//! between two ticks.

pub mod message;
mod subscription;
mod view;

use crate::error::Error;
use crate::landing::{LandingPage, Surfaces};
use crate::notifications::Severity;
use crate::rotation::TransitionSurface;
use crate::scheduler::VirtualClock;
use crate::ui::caption::{Caption, FadeStyle};
use crate::ui::toast::ToastSlot;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Instant;

pub use message::{Flags, Message};

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 650.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 420.0;

/// Root Iced application state.
pub struct App {
    clock: Rc<VirtualClock>,
    page: LandingPage,
    message: Rc<RefCell<Caption>>,
    progress: Rc<RefCell<Caption>>,
    toasts: Rc<RefCell<ToastSlot>>,
    last_tick: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("clock", &self.clock)
            .field("config_errors", &self.page.config_errors())
            .field("last_tick", &self.last_tick)
            .finish_non_exhaustive()
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires an `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the page from the loaded configuration and signals it ready.
    ///
    /// A load warning is shown as an error toast, and so are values the page
    /// rejected; the rest of the configuration still applies.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let clock = Rc::new(VirtualClock::new());
        let message = Caption::shared("", FadeStyle::MESSAGE);
        let progress = Caption::shared("", FadeStyle::PROGRESS);
        let toasts = ToastSlot::shared();
        let surfaces = Surfaces {
            message: message.clone(),
            progress: progress.clone(),
            notifications: toasts.clone(),
        };

        let page = LandingPage::new(&flags.config, clock.clone(), surfaces);
        if let Some(rotator) = page.message_rotator() {
            message.borrow_mut().render(rotator.current_text());
        }
        if let Some(rotator) = page.progress_rotator() {
            progress.borrow_mut().render(rotator.current_text());
        }
        if let Some(warning) = flags.config_warning {
            page.notifier().notify(warning, Severity::Error);
        }
        page.on_ready();

        let app = Self {
            clock,
            page,
            message,
            progress,
            toasts,
            last_tick: None,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        crate::content::TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => self.handle_tick(now),
            Message::EmailChanged(value) => self.page.signup().set_input(value),
            Message::Submit => {
                let input = self.page.signup().input();
                match self.page.on_submit(&input) {
                    Ok(submission) => {
                        tracing::debug!(resolves_at = ?submission.resolves_at, "submission accepted");
                    }
                    Err(err @ (Error::Validation(_) | Error::SubmissionPending)) => {
                        tracing::debug!(error = %err, "submission rejected");
                    }
                    Err(err) => tracing::warn!(error = %err, "submission failed"),
                }
            }
            Message::DismissNotification(handle) => {
                self.page.dismiss_notification(handle);
            }
        }
        Task::none()
    }

    /// Advances the page clock by the wall time since the previous tick.
    fn handle_tick(&mut self, now: Instant) {
        if let Some(last) = self.last_tick {
            let elapsed = now.saturating_duration_since(last);
            self.clock.advance(elapsed);
        }
        self.last_tick = Some(now);
    }

    fn view(&self) -> Element<'_, Message> {
        let message = self.message.borrow();
        let progress = self.progress.borrow();
        let toasts = self.toasts.borrow();
        view::view(view::ViewContext {
            message: &message,
            progress: &progress,
            toasts: &toasts,
            signup: self.page.signup(),
        })
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.page.teardown();
    }
}
