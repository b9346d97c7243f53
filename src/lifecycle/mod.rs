//! # System Lifecycle
//!
//! Start-up and shutdown of the inventory.
//!
//! ## Start-up
//!
//! [`InventorySystem::new`] creates the product actor with an empty store, spawns its
//! event loop, and keeps the [`ProductClient`](crate::clients::ProductClient) that the
//! console talks through. There is no global store: whoever owns the system owns the
//! inventory.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor logs final state** - The store size at shutdown
//! 4. **Await completion** - Wait for the actor task to finish
//!
//! Nothing is persisted; the inventory is gone once the actor exits.
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes structured logging, see the [`tracing`] module.

pub mod inventory_system;
pub mod tracing;

pub use self::inventory_system::*;
pub use self::tracing::*;
