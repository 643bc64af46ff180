// SPDX-License-Identifier: MPL-2.0
//! Message handlers for [`App`].

use super::{App, Message, ACTIVITY_LIMIT};
use crate::application::port::DropSource;
use crate::application::Notification;
use crate::domain::{File, FileId};
use crate::ui::dragbox;
use iced::{window, Task};

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    let task = match message {
        Message::DragBox(dragbox::Message::Browse) => handle_browse(app),
        Message::DragBox(dragbox::Message::Remove(id)) => {
            handle_remove(app, id);
            Task::none()
        }
        Message::DialogClosed(files) => {
            handle_dialog_closed(app, files);
            Task::none()
        }
        Message::Window(event) => {
            handle_window_event(app, event);
            Task::none()
        }
    };
    drain_notifications(app);
    task
}

fn handle_browse(app: &mut App) -> Task<Message> {
    if app.dialog_open {
        return Task::none();
    }
    let Some(request) = app.dragbox.dialog_request() else {
        tracing::debug!("selection full, dialog suppressed");
        return Task::none();
    };
    app.dialog_open = true;
    Task::perform(app.dialog.present(request), Message::DialogClosed)
}

fn handle_dialog_closed(app: &mut App, files: Vec<File>) {
    app.dialog_open = false;
    if files.is_empty() {
        return;
    }
    app.dragbox.add_files(files);
}

fn handle_remove(app: &mut App, id: FileId) {
    if let Err(err) = app.dragbox.remove(id) {
        tracing::warn!(error = %err, "remove ignored");
    }
}

fn handle_window_event(app: &mut App, event: window::Event) {
    if let Some(signal) = app.drops.translate(event) {
        app.dragbox.handle_drop_signal(signal);
    }
}

/// Moves pending notifications into the activity log.
fn drain_notifications(app: &mut App) {
    while let Ok(notification) = app.notifications.try_recv() {
        let line = describe(app, &notification);
        app.activity.push(line);
    }
    if app.activity.len() > ACTIVITY_LIMIT {
        let excess = app.activity.len() - ACTIVITY_LIMIT;
        app.activity.drain(..excess);
    }
}

fn describe(app: &App, notification: &Notification) -> String {
    match notification {
        Notification::Added { files } => {
            let count = files.len().to_string();
            let names = files
                .iter()
                .map(File::name)
                .collect::<Vec<_>>()
                .join(", ");
            app.i18n.tr_with_args(
                "activity-added",
                &[("count", count.as_str()), ("names", names.as_str())],
            )
        }
        Notification::Removed { file } => app
            .i18n
            .tr_with_args("activity-removed", &[("name", file.name())]),
    }
}
