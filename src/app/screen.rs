// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the session moves through. The gate is left once and never
/// re-entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Gate,
    Gallery,
}
