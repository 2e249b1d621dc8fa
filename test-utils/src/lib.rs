//! Test support for the hotel backend.
//!
//! `TestBuilder` opens an in-memory SQLite database with the tables a test asks for,
//! and `factory` inserts records with defaults that individual tests can override.
//!
//! ```rust,ignore
//! use entity::prelude::Cliente;
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_clients() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_table(Cliente).build().await?;
//!
//!     let cliente = factory::create_cliente(test.db()).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
