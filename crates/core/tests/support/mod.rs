//! Shared test helpers for `tasktime-core` integration tests.
//!
//! In-memory fakes of the ports plus record builders, so the behaviour tests
//! can focus on state transitions instead of boilerplate.

#![allow(dead_code)]

pub mod api;
pub mod fixtures;
pub mod token_store;

pub use api::FakeApi;
pub use fixtures::{entry, task, ts};
pub use token_store::MemoryTokenStore;
