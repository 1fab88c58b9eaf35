//! Search form: input, submit button, result count and loading indicator

use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length, Padding};

use super::theme::{self, DarkTheme};
use crate::app::Message;
use crate::widget::render::result_count_text;

pub fn view<'a>(
    value: &str,
    submit_enabled: bool,
    loading: bool,
    result_count: Option<usize>,
) -> Element<'a, Message> {
    let input = text_input("Search products...", value)
        .on_input(Message::InputChanged)
        .on_submit(Message::Submit)
        .padding(Padding::new(14.0))
        .size(18)
        .style(theme::search_input);

    let submit = button(text("Search").size(15))
        .padding(Padding::from([8.0, 16.0]))
        .style(theme::action_button)
        .on_press_maybe(submit_enabled.then_some(Message::Submit));

    let form = container(
        row![input, submit]
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .padding(Padding::from([6.0, 12.0]))
    .width(Length::Fill)
    .style(theme::surface);

    let count = text(result_count.map(result_count_text).unwrap_or_default())
        .size(13)
        .color(DarkTheme::TEXT_MUTED);

    let loading_indicator = text(if loading { "Searching..." } else { "" })
        .size(13)
        .color(DarkTheme::PRIMARY);

    column![
        form,
        row![count, Space::with_width(Length::Fill), loading_indicator].padding(Padding::from([6.0, 4.0]))
    ]
    .spacing(4)
    .into()
}
