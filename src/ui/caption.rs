// SPDX-License-Identifier: MPL-2.0
//! Fading text line driven by a rotator.
//!
//! The caption keeps only what the view needs: its text, the opacity it is
//! drawn with and a vertical offset. The fade itself is left to the frame
//! rate; the rotator only flips between the hidden and shown states.

use super::design_tokens::{opacity, sizing};
use crate::rotation::TransitionSurface;
use iced::widget::{container, text};
use iced::{Color, Element, Padding, Theme};
use std::cell::RefCell;
use std::rc::Rc;

/// How a caption looks when shown and when faded out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeStyle {
    pub shown_opacity: f32,
    /// Downward offset while hidden.
    pub slide_offset: f32,
}

impl FadeStyle {
    /// Status message: fully opaque, slides in from below.
    pub const MESSAGE: Self = Self {
        shown_opacity: opacity::OPAQUE,
        slide_offset: sizing::MESSAGE_SLIDE,
    };

    /// Progress caption: slightly dimmed, no slide.
    pub const PROGRESS: Self = Self {
        shown_opacity: opacity::CAPTION,
        slide_offset: 0.0,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    text: String,
    opacity: f32,
    offset: f32,
    style: FadeStyle,
}

impl Caption {
    #[must_use]
    pub fn new(initial: impl Into<String>, style: FadeStyle) -> Self {
        Self {
            text: initial.into(),
            opacity: style.shown_opacity,
            offset: 0.0,
            style,
        }
    }

    #[must_use]
    pub fn shared(initial: impl Into<String>, style: FadeStyle) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new(initial, style)))
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn view<'a, Message: 'a>(&self, size: f32) -> Element<'a, Message> {
        let alpha = self.opacity;
        let line = text(self.text.clone())
            .size(size)
            .style(move |theme: &Theme| text::Style {
                color: Some(Color {
                    a: alpha,
                    ..theme.palette().text
                }),
            });

        container(line)
            .padding(Padding {
                top: self.offset,
                ..Padding::ZERO
            })
            .into()
    }
}

impl TransitionSurface for Caption {
    fn begin_transition(&mut self) {
        self.opacity = opacity::TRANSPARENT;
        self.offset = self.style.slide_offset;
    }

    fn render(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn end_transition(&mut self) {
        self.opacity = self.style.shown_opacity;
        self.offset = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_caption_is_shown() {
        let caption = Caption::new("hello", FadeStyle::PROGRESS);
        assert_eq!(caption.text(), "hello");
        assert_eq!(caption.opacity(), opacity::CAPTION);
        assert_eq!(caption.offset(), 0.0);
    }

    #[test]
    fn transition_hides_then_restores() {
        let mut caption = Caption::new("old", FadeStyle::MESSAGE);

        caption.begin_transition();
        assert_eq!(caption.opacity(), opacity::TRANSPARENT);
        assert_eq!(caption.offset(), sizing::MESSAGE_SLIDE);
        assert_eq!(caption.text(), "old");

        caption.render("new");
        caption.end_transition();
        assert_eq!(caption.text(), "new");
        assert_eq!(caption.opacity(), opacity::OPAQUE);
        assert_eq!(caption.offset(), 0.0);
    }

    #[test]
    fn progress_style_never_slides() {
        let mut caption = Caption::new("x", FadeStyle::PROGRESS);
        caption.begin_transition();
        assert_eq!(caption.offset(), 0.0);
    }
}
