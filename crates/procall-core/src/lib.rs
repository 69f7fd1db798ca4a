//! procall core - shared abstractions for stored routine calls
//!
//! This crate provides the types every other procall crate depends on:
//!
//! - `CallConnection` / `CallableStatement` - Traits a database driver implements
//! - `Releasable` / `ScopedRelease` - Exactly-once release of driver resources
//! - `Value` / `SqlType` - Parameter values and their type codes
//! - `CallOptions` - Call building and logging options
//! - Identifier validation for names inlined into call text

mod config;
mod connection;
mod error;
pub mod identifier;
mod release;
mod types;

pub use config::*;
pub use connection::*;
pub use error::*;
pub use release::*;
pub use types::*;
