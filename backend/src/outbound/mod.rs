//! Outbound adapters implementing the driven repository ports.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM.
//! - **memory**: mutex-guarded in-process store, used when no database is
//!   configured and in tests.
//!
//! Adapters only translate between storage representations and domain
//! records. They contain no business logic.

pub mod memory;
pub mod persistence;
