use sea_orm::DatabaseConnection;

use crate::server::{
    data::reserva::ReservaRepository,
    error::AppError,
    model::reserva::{CreateReservaParams, Reserva},
};

pub struct ReservaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every record in the collection, unfiltered and unpaginated
    pub async fn get_all(&self) -> Result<Vec<Reserva>, AppError> {
        let repo = ReservaRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Stores a new record as given
    pub async fn create(&self, params: CreateReservaParams) -> Result<Reserva, AppError> {
        let repo = ReservaRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Deletes a record by identifier
    /// Returns false if no record had that identifier
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let repo = ReservaRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }
}
