//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the question and category repository ports
//! backed by PostgreSQL through `diesel-async` and `bb8` pooling.
//!
//! - Adapters only translate between Diesel rows and domain records.
//! - Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//!   private to this module.
//! - Driver errors are mapped into the port error types.
//!
//! # Example
//!
//! ```ignore
//! use trivia_api::outbound::persistence::{DbPool, DieselQuestionRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/trivia")).await?;
//! let questions = DieselQuestionRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_category_repository;
mod diesel_question_repository;
mod models;
mod pool;
mod schema;

pub use diesel_category_repository::DieselCategoryRepository;
pub use diesel_question_repository::DieselQuestionRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
