// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like `rfd`,
//! Iced's window events and image cache, and system I/O.
//!
//! # Available Adapters
//!
//! - [`dialog`]: Native file picker via `rfd` (implements [`FileDialog`])
//! - [`drag_drop`]: Iced window file-drop events (implements [`DropSource`])
//! - [`preview`]: Iced image handles (implements [`PreviewPort`])
//! - [`memory`]: In-memory adapters for headless use and tests
//! - [`fs`]: Building [`File`](crate::domain::File) values from paths
//!
//! [`FileDialog`]: crate::application::port::FileDialog
//! [`DropSource`]: crate::application::port::DropSource
//! [`PreviewPort`]: crate::application::port::PreviewPort

pub mod dialog;
pub mod drag_drop;
pub mod fs;
pub mod memory;
pub mod preview;

// Re-export main types for convenience
pub use dialog::RfdFileDialog;
pub use drag_drop::WindowDropSource;
pub use memory::{MemoryFileDialog, MemoryPreviewPort, PreviewLedger};
pub use preview::IcedPreviewPort;
