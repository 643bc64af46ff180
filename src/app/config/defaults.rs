// SPDX-License-Identifier: MPL-2.0
//! Default values for the `[dragbox]` section.

/// Name of the layout slot the box mounts into.
pub const DEFAULT_TARGET: &str = "files";

/// `0` means no upper bound on the selection.
pub const DEFAULT_MAX_FILES: usize = 0;

pub const DEFAULT_ENFORCE_ACCEPT: bool = false;
