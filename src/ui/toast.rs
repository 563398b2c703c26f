// SPDX-License-Identifier: MPL-2.0
//! Toast widget for the single visible notification.
//!
//! `ToastSlot` is the notifier's presentation side: it mirrors the slot so
//! the view can render it, and [`view`] draws it as a card in the top-right
//! corner with a severity-colored accent and a close button.

use super::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::notifications::{
    DismissReason, Notification, NotificationHandle, NotificationId, NotificationSurface, Severity,
};
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::cell::RefCell;
use std::rc::Rc;

/// Presentation copy of the notifier slot.
#[derive(Debug, Default)]
pub struct ToastSlot {
    current: Option<Notification>,
}

impl ToastSlot {
    #[must_use]
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

impl NotificationSurface for ToastSlot {
    fn show(&mut self, notification: &Notification) {
        self.current = Some(notification.clone());
    }

    fn hide(&mut self, id: NotificationId, reason: DismissReason) {
        if self.current.as_ref().is_some_and(|n| n.id() == id) {
            tracing::debug!(notification = %id, ?reason, "toast removed");
            self.current = None;
        }
    }
}

/// Accent color for a severity level.
#[must_use]
pub fn accent_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => palette::SUCCESS_500,
        Severity::Info => palette::INFO_500,
        Severity::Error => palette::ERROR_500,
    }
}

/// Renders the toast overlay, or an empty layer when nothing is shown.
pub fn view<'a, Message, F>(slot: &ToastSlot, on_dismiss: F) -> Element<'a, Message>
where
    Message: Clone + 'a,
    F: Fn(NotificationHandle) -> Message,
{
    let Some(notification) = slot.current() else {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    };

    let accent = accent_color(notification.severity());

    let message_widget = Text::new(notification.message().to_string())
        .size(typography::BODY)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::WHITE),
        });

    let dismiss_button = button(Text::new("×").size(typography::TITLE_MD))
        .on_press(on_dismiss(NotificationHandle::from(notification.id())))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    let content = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    let card = Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::MD)
        .style(move |theme: &Theme| toast_container_style(theme, accent));

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::LG)
        .into()
}

/// Style function for the toast container.
fn toast_container_style(_theme: &Theme, accent_color: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SURFACE,
            ..accent_color
        })),
        border: iced::Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: Color {
            a: opacity::CAPTION,
            ..palette::WHITE
        },
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Notifier;
    use crate::scheduler::VirtualClock;
    use std::time::Duration;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let style = toast_container_style(&Theme::Dark, palette::SUCCESS_500);

        match style.background {
            Some(iced::Background::Color(color)) => {
                assert_eq!(color.r, palette::SUCCESS_500.r);
                assert_eq!(color.a, opacity::SURFACE);
            }
            _ => panic!("expected a solid background"),
        }
    }

    #[test]
    fn accent_colors_are_distinct_per_severity() {
        assert_ne!(accent_color(Severity::Success), accent_color(Severity::Error));
        assert_ne!(accent_color(Severity::Info), accent_color(Severity::Error));
    }

    #[test]
    fn slot_mirrors_notifier() {
        let clock = Rc::new(VirtualClock::new());
        let slot = ToastSlot::shared();
        let notifier = Notifier::new(clock.clone(), slot.clone(), Duration::from_secs(5));

        notifier.notify("a", Severity::Info);
        notifier.notify("b", Severity::Success);
        assert_eq!(slot.borrow().current().map(Notification::message), Some("b"));

        clock.advance(Duration::from_secs(5));
        assert!(slot.borrow().current().is_none());
    }

    #[test]
    fn stale_hide_keeps_current_toast() {
        let mut slot = ToastSlot::default();
        let visible = Notification::new(Severity::Info, "visible", Duration::ZERO);
        slot.show(&visible);

        slot.hide(NotificationId::new(), DismissReason::Expired);
        assert!(slot.current().is_some());

        slot.hide(visible.id(), DismissReason::Manual);
        assert!(slot.current().is_none());
    }
}
