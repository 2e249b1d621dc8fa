use sea_orm::DatabaseConnection;

use crate::server::{
    data::habitacion::HabitacionRepository,
    error::AppError,
    model::habitacion::{CreateHabitacionParams, Habitacion},
};

pub struct HabitacionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HabitacionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every record in the collection, unfiltered and unpaginated
    pub async fn get_all(&self) -> Result<Vec<Habitacion>, AppError> {
        let repo = HabitacionRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Stores a new record as given
    pub async fn create(&self, params: CreateHabitacionParams) -> Result<Habitacion, AppError> {
        let repo = HabitacionRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Deletes a record by identifier
    /// Returns false if no record had that identifier
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let repo = HabitacionRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }
}
