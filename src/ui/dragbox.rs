// SPDX-License-Identifier: MPL-2.0
//! Iced view of a mounted selection box.
//!
//! The view only reads the box's [`ViewModel`]; every interaction is turned
//! into a [`Message`] for the owning screen to route back into the box.

use crate::application::{DragBox, EntryView, Icons, Texts, ViewModel};
use crate::domain::FileId;
use crate::infrastructure::IcedPreviewPort;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, mouse_area, svg, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The drop zone or its browse button was clicked.
    Browse,
    Remove(FileId),
}

/// Renders `dragbox` from its current view-model.
pub fn view(dragbox: &DragBox<IcedPreviewPort>) -> Element<'_, Message> {
    let vm = dragbox.view_model();
    let icons = dragbox.icons();

    let content: Element<'_, Message> = if vm.empty {
        empty_state(dragbox.texts(), icons, vm.interaction_locked)
    } else if vm.single {
        match vm.entries.first() {
            Some(entry) => single_preview(entry, dragbox.previews(), icons),
            None => empty_state(dragbox.texts(), icons, vm.interaction_locked),
        }
    } else {
        file_list(vm, dragbox.texts(), dragbox.previews(), icons)
    };

    let zone = Container::new(content)
        .width(Length::Fill)
        .height(Length::Shrink)
        .padding(spacing::MD)
        .style(styles::container::dropzone(vm.hovering));

    if vm.interaction_locked || !vm.empty {
        zone.into()
    } else {
        // Clicking anywhere in the empty zone opens the dialog.
        mouse_area(zone).on_press(Message::Browse).into()
    }
}

fn icon<'a>(markup: &str, size: f32) -> Element<'a, Message> {
    svg(svg::Handle::from_memory(markup.as_bytes().to_vec()))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .into()
}

fn browse_button<'a>(texts: &'a Texts, locked: bool) -> Element<'a, Message> {
    button(Text::new(texts.select.as_str()).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::primary)
        .on_press_maybe((!locked).then_some(Message::Browse))
        .into()
}

fn empty_state<'a>(texts: &'a Texts, icons: &Icons, locked: bool) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(icon(&icons.file, sizing::ICON_XL))
        .push(Text::new(texts.drag.as_str()).size(typography::TITLE_SM))
        .push(
            Text::new(texts.or.as_str())
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .push(browse_button(texts, locked));

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DROPZONE_MIN_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Thumbnail or fallback icon for one entry.
fn preview<'a>(
    entry: &EntryView,
    previews: &IcedPreviewPort,
    icons: &Icons,
    size: f32,
) -> Element<'a, Message> {
    match previews.image(entry.handle.id()) {
        Some(handle) if entry.handle.is_visual() => image(handle.clone())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .content_fit(ContentFit::Contain)
            .into(),
        _ => icon(&icons.file, size.min(sizing::ICON_XL)),
    }
}

fn remove_button<'a>(id: FileId, icons: &Icons) -> Element<'a, Message> {
    button(icon(&icons.remove, sizing::ICON_SM))
        .padding(spacing::XXS)
        .style(styles::button::remove)
        .on_press(Message::Remove(id))
        .into()
}

fn caption<'a>(entry: &'a EntryView) -> Column<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(entry.display_name.as_str()).size(typography::BODY))
        .push(
            Text::new(entry.display_size.as_str())
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
}

fn single_preview<'a>(
    entry: &'a EntryView,
    previews: &IcedPreviewPort,
    icons: &Icons,
) -> Element<'a, Message> {
    let footer = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(caption(entry))
        .push(Space::new().width(Length::Fill))
        .push(remove_button(entry.id, icons));

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(preview(entry, previews, icons, sizing::PREVIEW_LG))
        .push(footer)
        .into()
}

fn entry_row<'a>(
    entry: &'a EntryView,
    previews: &IcedPreviewPort,
    icons: &Icons,
) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(preview(entry, previews, icons, sizing::THUMBNAIL))
        .push(caption(entry))
        .push(Space::new().width(Length::Fill))
        .push(remove_button(entry.id, icons));

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::entry)
        .into()
}

fn file_list<'a>(
    vm: &'a ViewModel,
    texts: &'a Texts,
    previews: &IcedPreviewPort,
    icons: &Icons,
) -> Element<'a, Message> {
    let rows = vm
        .entries
        .iter()
        .map(|entry| entry_row(entry, previews, icons));

    let mut column = Column::with_children(rows).spacing(spacing::XS);
    if !vm.interaction_locked {
        let more = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                Text::new(texts.drag.as_str())
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .push(browse_button(texts, false));
        column = column.push(more);
    }
    column.into()
}
