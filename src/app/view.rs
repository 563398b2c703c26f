// SPDX-License-Identifier: MPL-2.0
//! Layout of the landing page.

use super::Message;
use crate::content::{SignupCopy, TITLE};
use crate::signup::SignupForm;
use crate::ui::caption::Caption;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::toast::{self, ToastSlot};
use iced::widget::{button, column, container, row, text, text_input, Stack};
use iced::{alignment, Element, Length};

/// Everything the view reads, borrowed from `App`.
pub struct ViewContext<'a> {
    pub message: &'a Caption,
    pub progress: &'a Caption,
    pub toasts: &'a ToastSlot,
    pub signup: &'a SignupForm,
}

pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let title = text(TITLE).size(typography::DISPLAY);

    let content = column![
        title,
        ctx.message.view(typography::TITLE_MD),
        ctx.progress.view(typography::CAPTION),
        signup_row(ctx.signup),
    ]
    .spacing(spacing::LG)
    .align_x(alignment::Horizontal::Center);

    let page = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(spacing::XL);

    Stack::new()
        .push(page)
        .push(toast::view(ctx.toasts, Message::DismissNotification))
        .into()
}

fn signup_row<'a>(signup: &SignupForm) -> Element<'a, Message> {
    let copy: &SignupCopy = signup.copy();
    let enabled = signup.is_enabled();
    let value = signup.input();

    let input = text_input(&copy.input_placeholder, &value)
        .width(Length::Fixed(sizing::INPUT_WIDTH))
        .padding(spacing::SM);
    let input = if enabled {
        input
            .on_input(Message::EmailChanged)
            .on_submit(Message::Submit)
    } else {
        input
    };

    let submit = button(text(signup.button_label().to_string()).size(typography::BODY))
        .padding(spacing::SM)
        .on_press_maybe(enabled.then_some(Message::Submit));

    row![input, submit]
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .into()
}
