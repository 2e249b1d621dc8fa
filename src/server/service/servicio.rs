use sea_orm::DatabaseConnection;

use crate::server::{
    data::servicio::ServicioRepository,
    error::AppError,
    model::servicio::{CreateServicioParams, Servicio},
};

pub struct ServicioService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServicioService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every record in the collection, unfiltered and unpaginated
    pub async fn get_all(&self) -> Result<Vec<Servicio>, AppError> {
        let repo = ServicioRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Stores a new record as given
    pub async fn create(&self, params: CreateServicioParams) -> Result<Servicio, AppError> {
        let repo = ServicioRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Deletes a record by identifier
    /// Returns false if no record had that identifier
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let repo = ServicioRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }
}
