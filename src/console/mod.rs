//! # Console Front-End
//!
//! The text menu through which a user manages the inventory.
//!
//! - [`session`] - The menu loop: prompts, confirmation, dispatch to the client
//! - [`input`] - Parsing of typed values; blank input means "keep current value"
//! - [`render`] - Menu text and product lines (price with two decimals)

pub mod input;
pub mod render;
pub mod session;

pub use session::Session;
