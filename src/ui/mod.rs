// SPDX-License-Identifier: MPL-2.0
//! User interface modules: viewer component, toolbar, and shared state.

pub mod state;
pub mod toolbar;
pub mod viewer;
