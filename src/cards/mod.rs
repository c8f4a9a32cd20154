//! Card catalog and hands.
//!
//! ## Key Types
//!
//! - `CardLabel`: The closed set of card kinds
//! - `Card`: An immutable card value
//! - `Hand`: Ordered per-player card collection

pub mod hand;
pub mod label;

pub use hand::Hand;
pub use label::{Card, CardLabel};
