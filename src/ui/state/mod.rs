// SPDX-License-Identifier: MPL-2.0
//! State types shared by the viewer component and the shell.

pub mod viewport;
pub mod zoom;

pub use viewport::{ScrollOffset, ScrollRange, ViewportState};
pub use zoom::{ZoomMode, ZoomState};
