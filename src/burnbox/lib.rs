//! # Burnbox Architecture
//!
//! Burnbox is an **ephemeral document store**. A document is some text plus
//! optional consumption limits: a maximum number of views, an expiry time, or
//! both. Once a limit is reached the document is deleted for good; it can also
//! be deleted on request.
//!
//! Like any UI-agnostic library, the core knows nothing about terminals or
//! HTTP. The `burnbox` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Raw strings → Limits / DocId, dispatch to commands       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per operation, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Lifecycle Engine (lifecycle.rs)                            │
//! │  - create / read / delete, view accounting, retirement      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DocumentStore trait: get / put / delete by identifier    │
//! │  - FileStore (production), MemoryStore (testing)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Cached State
//!
//! The lifecycle engine holds no document state between calls. Everything
//! lives in the store, which is injected at construction. Time and identifier
//! generation are injected too ([`clock::Clock`], [`id::IdGenerator`]), so
//! tests can drive expiry and collisions deterministically.
//!
//! ## Concurrency
//!
//! A read is a read-modify-write of the record. By default the engine
//! serializes those per identifier (see [`guard`]), so a document with one view
//! left is served to exactly one of several concurrent readers in this
//! process.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`lifecycle`]: The lifecycle engine
//! - [`model`]: `DocumentRecord`, `Limits`, `DocumentView`
//! - [`id`]: Identifier type and generators
//! - [`clock`]: Time source
//! - [`guard`]: Per-identifier serialization
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod guard;
pub mod id;
pub mod lifecycle;
pub mod model;
pub mod store;
