// SPDX-License-Identifier: MPL-2.0
//! User interface: the selection box view, host layout and shared styling.

pub mod design_tokens;
pub mod dragbox;
pub mod layout;
pub mod styles;
