//! # Inventory Control
//!
//! > **An interactive console for keeping a product inventory in memory.**
//!
//! Products are keyed by a caller-chosen numeric ID and can be added, viewed, updated
//! (including moving a product to a new ID), deleted after confirmation, and listed.
//! Nothing is persisted: the inventory lives as long as the process.
//!
//! ## 🏗️ Design
//!
//! The store is a plain synchronous map with a strict contract
//! ([`ResourceStore`](framework::ResourceStore)). It is owned by a single actor task,
//! so every operation runs as a critical section over the whole inventory, and the
//! console talks to it only through a cloneable client.
//!
//! ### Partial updates
//! A [`ProductUpdate`](model::ProductUpdate) holds an `Option` per field. `None` keeps
//! the current value; `Some(0)` sets the quantity to zero. Zero is never read as
//! "unchanged".
//!
//! ### Confirmation-gated deletion
//! The store does no I/O. The console asks the user first and then calls
//! `delete_if_confirmed(id, confirmed)`, which reports one of three outcomes:
//! removed, canceled, or not found.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: The generic keyed store, the actor that owns it, and the client.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity),
//!   [`ResourceStore`](framework::ResourceStore), [`ResourceActor`](framework::ResourceActor).
//!
//! ### 2. The Domain ([`model`], [`product_actor`])
//! - **Role**: [`Product`](model::Product) and its update DTO, the entity contract, and
//!   [`ProductError`](product_actor::ProductError).
//!
//! ### 3. The Interface ([`clients`])
//! - **Role**: [`ProductClient`](clients::ProductClient), the typed async API used by the
//!   console.
//!
//! ### 4. The Front-End ([`console`])
//! - **Role**: Menu loop, input parsing, output formatting.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! - **Role**: Spawning and shutting down the actor, tracing, environment settings.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the console
//! cargo run
//!
//! # With store logs on stderr
//! RUST_LOG=info cargo run 2>inventory.log
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod console;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
