use sea_orm::DatabaseConnection;

use crate::server::{
    data::cliente::ClienteRepository,
    error::AppError,
    model::cliente::{CreateClienteParams, Cliente},
};

pub struct ClienteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClienteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every record in the collection, unfiltered and unpaginated
    pub async fn get_all(&self) -> Result<Vec<Cliente>, AppError> {
        let repo = ClienteRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Stores a new record as given
    pub async fn create(&self, params: CreateClienteParams) -> Result<Cliente, AppError> {
        let repo = ClienteRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Deletes a record by identifier
    /// Returns false if no record had that identifier
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let repo = ClienteRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }
}
