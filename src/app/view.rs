// SPDX-License-Identifier: MPL-2.0
//! Window layout: the mounted selection box above the activity log.

use super::{App, Message};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::dragbox;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let mut activity = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(app.i18n.tr("activity-title")).size(typography::TITLE_SM));

    if app.activity.is_empty() {
        activity = activity.push(
            Text::new(app.i18n.tr("activity-empty"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }
    for line in app.activity.iter().rev() {
        activity = activity.push(Text::new(line.as_str()).size(typography::CAPTION));
    }

    let mut content = Column::new().spacing(spacing::LG);
    if let Some(key) = &app.config_warning {
        content = content.push(
            Text::new(app.i18n.tr(key))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }
    content = content
        .push(dragbox::view(&app.dragbox).map(Message::DragBox))
        .push(activity);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .into()
}
