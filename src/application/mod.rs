// SPDX-License-Identifier: MPL-2.0
//! Application layer - the file-selection core.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`policy`]: Constraint policy deciding what part of a batch is admitted
//! - [`collection`]: The ordered selection
//! - [`preview`]: Preview handle lifecycle
//! - [`view_model`]: Render synchronization
//! - [`notify`]: Hooks and subscriber notifications
//! - [`dragbox`]: The component tying them together
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer consumes [`ViewModel`]s and calls [`DragBox`] methods
//!
//! # Example
//!
//! ```ignore
//! use iced_dragbox::application::{DragBox, DragBoxOptions};
//! use iced_dragbox::domain::{File, MaxFiles};
//!
//! let mut dragbox = DragBox::mount(&layout, "files".into(), DragBoxOptions::new()
//!     .max_files(MaxFiles::SINGLE), preview_port)?;
//! dragbox.add_file(File::new("avatar.png", 2048, "image/png"));
//! assert!(dragbox.view_model().single);
//! ```

pub mod collection;
pub mod dragbox;
pub mod notify;
pub mod options;
pub mod policy;
pub mod port;
pub mod preview;
pub mod view_model;

pub use collection::{Entry, FileCollection};
pub use dragbox::{DragBox, Phase};
pub use notify::{Notification, NotificationHub, NotificationReceiver};
pub use options::{DragBoxOptions, Icons, Texts};
pub use policy::{admit, Admission};
pub use preview::PreviewResourceManager;
pub use view_model::{EntryView, ViewModel};
