// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for the page state machine.

/// The two states of the page. `Gallery` is initial; `select` moves to
/// `Detail`, `back` returns to `Gallery`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Gallery,
    Detail,
}
