// SPDX-License-Identifier: MPL-2.0
//! `iced_dragbox` is a drag-and-drop file selection box built with the Iced GUI
//! framework.
//!
//! The box collects files from a native dialog or from window drops, enforces
//! an optional file limit, shows a preview per file and notifies listeners of
//! every change. The core ([`application`], [`domain`]) is toolkit-free; the
//! Iced, `rfd` and filesystem adapters live in [`infrastructure`] and [`ui`].
//!
//! ```
//! use iced_dragbox::application::{DragBox, DragBoxOptions};
//! use iced_dragbox::domain::{File, MaxFiles};
//! use iced_dragbox::infrastructure::MemoryPreviewPort;
//! use iced_dragbox::ui::layout::Layout;
//!
//! let mut dragbox = DragBox::mount(
//!     &Layout::single("files"),
//!     "files".into(),
//!     DragBoxOptions::new().max_files(MaxFiles::SINGLE),
//!     MemoryPreviewPort::new(),
//! )
//! .expect("slot exists");
//!
//! dragbox.add_file(File::new("photo.png", 2048, "image/png"));
//! assert_eq!(dragbox.view_model().entries[0].display_size, "2.00 KB");
//! ```

#![doc(html_root_url = "https://docs.rs/iced_dragbox/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

pub use error::{Error, Result};
