//! # larder
//!
//! A personal cookbook and recipe organizer for the command line. Recipes
//! are links to pages you cook from; cookbooks are named collections of
//! them. Everything lives in two human-readable JSON files so the data
//! stays greppable and easy to back up.
//!
//! ## Architecture
//!
//! The crate is layered so every piece stays independently testable:
//!
//! 1. **CLI / menu** (the `larder` binary): argument parsing and the
//!    interactive menu. Formats output; owns no domain logic.
//! 2. **Manager** ([`manager::CookbookManager`]): the typed domain
//!    façade. One instance per invocation, holding one store per entity
//!    kind. All domain rules live here.
//! 3. **Store** ([`store::RecordStore`]): untyped JSON record
//!    persistence. [`store::fs::JsonFileStore`] backs production,
//!    [`store::memory::InMemoryStore`] backs tests.
//!
//! Layers only ever call downward. The manager is generic over the store
//! trait, so unit tests exercise full domain behavior without touching
//! the filesystem.

pub mod error;
pub mod manager;
pub mod model;
pub mod store;
