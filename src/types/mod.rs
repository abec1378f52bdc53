//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - common: notifications and the blocking confirmation surface
//! - network: wifi wire types, selector widget state, flow state machines
//! - settings: the generic settings document

pub mod common;
pub mod network;
pub mod settings;

pub use common::*;
pub use network::*;
pub use settings::*;
