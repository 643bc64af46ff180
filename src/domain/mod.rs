// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core selection types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`file`]: Selected file values ([`File`](file::File), [`FileId`](file::FileId))
//! - [`accept`]: Mime-type accept filter ([`AcceptFilter`](accept::AcceptFilter))
//! - [`limits`]: Selection bounds ([`MaxFiles`](limits::MaxFiles))
//! - [`size`]: Human-readable byte sizes ([`display_size`](size::display_size))

pub mod accept;
pub mod file;
pub mod limits;
pub mod size;

pub use accept::{AcceptFilter, AcceptPattern};
pub use file::{File, FileId};
pub use limits::MaxFiles;
pub use size::display_size;
