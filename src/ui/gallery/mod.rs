// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: captured motion images plus the capture trigger.
//!
//! The list is fetched when the screen is activated and on Refresh. Capture
//! requests are fire-and-forget; the user refreshes to see the new image.

pub mod component;
mod empty_state;
pub mod status;
pub mod thumbnail;
mod view;

pub use component::{Message, Phase, State, Tile, UpdateContext};
pub use view::ViewContext;
