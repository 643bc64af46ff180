// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only drag-and-drop window events are routed; everything else is handled by
//! the widgets themselves.

use super::Message;
use crate::infrastructure::WindowDropSource;
use iced::{event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window_event) if WindowDropSource::is_drop_event(&window_event) => {
            Some(Message::Window(window_event))
        }
        _ => None,
    })
}
