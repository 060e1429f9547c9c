//! Session state and request orchestration for the charter pricing desk.
//!
//! This crate provides:
//! - `state`: the two operator sessions (price calculator, fleet optimizer)
//! - `selection`: the airport / category / model consistency rules
//! - `editor`: lazily parsed JSON buffers for optimizer scenarios
//! - `pricing`, `optimizer`, `export`: the request state machines
//! - `components`: display-only view models derived from responses

pub mod components;
pub mod editor;
pub mod error;
pub mod export;
pub mod optimizer;
pub mod pricing;
pub mod request_state;
pub mod scenario;
pub mod selection;
pub mod state;
