use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Collects the tables a test needs, then opens a database containing them.
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(Habitacion)
///     .with_table(Reserva)
///     .build()
///     .await?;
/// let db = test.db();
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a CREATE TABLE statement generated from a SeaORM entity.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        self.tables
            .push(Schema::new(DbBackend::Sqlite).create_table_from_entity(entity));
        self
    }

    /// Queues every hotel table: users plus the five record collections.
    ///
    /// None of the tables reference each other, so order does not matter.
    pub fn with_hotel_tables(self) -> Self {
        self.with_table(Usuario)
            .with_table(Cliente)
            .with_table(Empleado)
            .with_table(Habitacion)
            .with_table(Reserva)
            .with_table(Servicio)
    }

    /// Opens the in-memory database and creates the queued tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database ready with every queued table
    /// - `Err(TestError::Database)` - Connecting or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::connect().await?;

        context.create_tables(&self.tables).await?;

        Ok(context)
    }
}
