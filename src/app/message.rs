// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::File;
use crate::ui::dragbox;
use iced::window;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Interaction inside the selection box.
    DragBox(dragbox::Message),
    /// The file dialog closed; empty when cancelled.
    DialogClosed(Vec<File>),
    /// A drag-and-drop window event.
    Window(window::Event),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override (`--lang fr`).
    pub lang: Option<String>,
    /// Optional config directory override (`--config-dir PATH`).
    pub config_dir: Option<String>,
    /// Overrides `[dragbox] max_files`; `0` means unbounded.
    pub max_files: Option<usize>,
    /// Overrides `[dragbox] accept` with a comma-separated list.
    pub accept: Option<String>,
}
