//! Product cards and the "show more" control

use std::collections::HashMap;

use iced::widget::{button, column, container, image, row, scrollable, text, Space};
use iced::{Alignment, Element, Length, Padding};

use super::theme::{self, DarkTheme};
use crate::app::{ImageState, Message};
use crate::widget::ProductCard;

const IMAGE_SIZE: f32 = 96.0;

pub fn view<'a>(
    cards: &'a [ProductCard],
    images: &'a HashMap<String, ImageState>,
    show_more_visible: bool,
) -> Element<'a, Message> {
    let mut items: Vec<Element<'a, Message>> = cards
        .iter()
        .map(|card| view_card(card, images))
        .collect();

    if show_more_visible {
        items.push(
            container(
                button(text("Show more").size(14))
                    .padding(Padding::from([8.0, 20.0]))
                    .style(theme::action_button)
                    .on_press(Message::ShowMore),
            )
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding(8)
            .into(),
        );
    }

    scrollable(column(items).spacing(8))
        .height(Length::Fill)
        .into()
}

fn view_card<'a>(card: &'a ProductCard, images: &'a HashMap<String, ImageState>) -> Element<'a, Message> {
    let loaded = card
        .image_url
        .as_ref()
        .and_then(|url| match images.get(url) {
            Some(ImageState::Loaded(handle)) => Some(handle.clone()),
            _ => None,
        });

    let picture: Element<'a, Message> = match loaded {
        Some(handle) => image(handle).width(IMAGE_SIZE).height(IMAGE_SIZE).into(),
        None => Space::new(IMAGE_SIZE, IMAGE_SIZE).into(),
    };

    let details = column![
        text(&card.title).size(16).color(DarkTheme::TEXT),
        text(&card.description).size(13).color(DarkTheme::TEXT_MUTED),
        text(&card.stars).size(13),
        text(&card.price).size(14).color(DarkTheme::PRICE),
    ]
    .spacing(4);

    container(row![picture, details].spacing(12).align_y(Alignment::Center))
        .padding(Padding::from([10.0, 12.0]))
        .width(Length::Fill)
        .style(theme::card)
        .into()
}
