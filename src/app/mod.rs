// SPDX-License-Identifier: MPL-2.0
//! Application root state: one selection box mounted in a window.
//!
//! The `App` wires the box to its Iced adapters (native dialog, window drop
//! events, image previews) and keeps a short activity log fed by the box's
//! notification channel.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::FileDialog;
use crate::application::{DragBox, DragBoxOptions, NotificationReceiver, Texts};
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{IcedPreviewPort, RfdFileDialog, WindowDropSource};
use crate::ui::layout::Layout;
use config::{AcceptSpec, Config};
use iced::{window, Element, Subscription, Task};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 520;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 400;

/// Lines kept in the activity log.
pub const ACTIVITY_LIMIT: usize = 8;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    dragbox: DragBox<IcedPreviewPort>,
    dialog: Box<dyn FileDialog>,
    dialog_open: bool,
    drops: WindowDropSource,
    notifications: NotificationReceiver,
    activity: Vec<String>,
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("target", self.dragbox.target())
            .field("selected", &self.dragbox.len())
            .field("dialog_open", &self.dialog_open)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// # Errors
///
/// Fails when the configured mount slot does not exist or the event loop
/// cannot start.
pub fn run(flags: Flags) -> Result<()> {
    use std::cell::RefCell;

    let app = App::new(flags)?;

    // iced 0.14 requires the boot function to be Fn; hand the state over once.
    let boot_state = RefCell::new(Some(app));
    let boot = move || {
        let app = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        (app, Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()?;
    Ok(())
}

/// Applies command-line overrides on top of the loaded config.
fn apply_flags(config: &mut Config, flags: &Flags) {
    if let Some(max_files) = flags.max_files {
        config.dragbox.max_files = Some(max_files);
    }
    if let Some(accept) = &flags.accept {
        config.dragbox.accept = Some(AcceptSpec::One(accept.clone()));
    }
}

impl App {
    /// Loads config and mounts the selection box.
    fn new(flags: Flags) -> Result<Self> {
        let (mut config, config_warning) = config::load();
        apply_flags(&mut config, &flags);
        let i18n = I18n::new(flags.lang, &config);
        let dialog = RfdFileDialog::new(
            i18n.tr("dragbox-dialog-title"),
            i18n.tr("dragbox-dialog-filter"),
        )
        .with_start_directory(dirs::home_dir());

        let mut app = Self::with_parts(config, i18n, Box::new(dialog))?;
        app.config_warning = config_warning;
        Ok(app)
    }

    /// Mounts the box described by `config` into the window layout.
    pub fn with_parts(config: Config, i18n: I18n, dialog: Box<dyn FileDialog>) -> Result<Self> {
        let fallback = Texts {
            drag: i18n.tr("dragbox-text-drag"),
            or: i18n.tr("dragbox-text-or"),
            select: i18n.tr("dragbox-text-select"),
        };
        let options: DragBoxOptions = config
            .dragbox
            .to_options(fallback)
            .on_add(|files| tracing::info!(count = files.len(), "files added"))
            .on_remove(|file| tracing::info!(file = %file, "file removed"));

        let layout = Layout::single(config::DEFAULT_TARGET);
        let mut dragbox = DragBox::mount(
            &layout,
            config.dragbox.target().into(),
            options,
            IcedPreviewPort::new(),
        )?;
        let notifications = dragbox.subscribe();

        Ok(Self {
            i18n,
            dragbox,
            dialog,
            dialog_open: false,
            drops: WindowDropSource::new(),
            notifications,
            activity: Vec::new(),
            config_warning: None,
        })
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    #[must_use]
    pub fn dragbox(&self) -> &DragBox<IcedPreviewPort> {
        &self.dragbox
    }

    /// Activity lines, oldest first.
    #[must_use]
    pub fn activity(&self) -> &[String] {
        &self.activity
    }

    #[must_use]
    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }
}
