use iced::widget::{
    button, column, container, image, responsive, row, scrollable, text, Column, Row, Space,
};
use iced::{ContentFit, Element, Length};

use crate::state::data::ImageRecord;
use crate::state::gallery::ResultList;
use crate::Message;

/// Below this width the grid collapses to a single column
const NARROW_BREAKPOINT: f32 = 640.0;
/// Below this width the grid shows two columns, three above it
const MEDIUM_BREAKPOINT: f32 = 1024.0;

/// Height of the picture area of a card
const CARD_IMAGE_HEIGHT: f32 = 220.0;

/// App title plus the search bar
pub fn header(term: &str) -> Element<'_, Message> {
    let input = iced::widget::text_input("Search for images...", term)
        .on_input(Message::SearchTermChanged)
        .on_submit(Message::SearchSubmitted)
        .padding(10);

    let submit = button(text("Search"))
        .on_press(Message::SearchSubmitted)
        .padding(10);

    column![
        text("Images Gallery").size(32),
        row![input, submit].spacing(8),
    ]
    .spacing(12)
    .into()
}

/// Loading indicator shown while a search is in flight
pub fn spinner<'a>() -> Element<'a, Message> {
    container(text("Searching Unsplash...").size(20))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// Placeholder shown when there is nothing to display yet
pub fn welcome<'a>() -> Element<'a, Message> {
    let content = column![
        text("Find your next picture").size(28),
        text("Type a search term above to browse Unsplash photos.").size(16),
    ]
    .spacing(12)
    .align_x(iced::Alignment::Center);

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// The responsive card grid.
///
/// Column count follows the available width: one column on narrow
/// windows, two on medium, three on wide. Rows are padded with spacers
/// so a short last row keeps the same card widths.
pub fn image_grid(list: &ResultList) -> Element<'_, Message> {
    responsive(move |size| {
        let columns = if size.width < NARROW_BREAKPOINT {
            1
        } else if size.width < MEDIUM_BREAKPOINT {
            2
        } else {
            3
        };

        let mut grid = Column::new().spacing(16);
        for chunk in list.records().chunks(columns) {
            let mut cards = Row::new().spacing(16);
            for record in chunk {
                cards = cards.push(
                    container(image_card(record)).width(Length::FillPortion(1)),
                );
            }
            // Keep card widths stable on a short last row
            for _ in chunk.len()..columns {
                cards = cards.push(Space::new(Length::FillPortion(1), Length::Shrink));
            }
            grid = grid.push(cards);
        }

        scrollable(container(grid).padding([0, 8])).into()
    })
    .into()
}

/// One result card: picture, description, save/delete actions
fn image_card(record: &ImageRecord) -> Element<'_, Message> {
    let picture: Element<Message> = match &record.thumbnail {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(CARD_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text("Loading preview...").size(14))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(CARD_IMAGE_HEIGHT))
            .into(),
    };

    let save = if record.saved {
        button(text("Saved").size(14))
            .on_press(Message::SaveImage(record.id.clone()))
            .style(button::success)
    } else {
        button(text("Save").size(14))
            .on_press(Message::SaveImage(record.id.clone()))
            .style(button::primary)
    };

    let delete = button(text("Delete").size(14))
        .on_press(Message::DeleteImage(record.id.clone()))
        .style(button::danger);

    container(
        column![
            picture,
            text(record.label()).size(14),
            row![save, delete].spacing(8),
        ]
        .spacing(8)
        .padding(8),
    )
    .style(container::rounded_box)
    .into()
}
