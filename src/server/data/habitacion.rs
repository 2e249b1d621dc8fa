use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{
    model::habitacion::{CreateHabitacionParams, Habitacion},
    util::id::new_record_id,
};

pub struct HabitacionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HabitacionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every room in the store's default order.
    pub async fn get_all(&self) -> Result<Vec<Habitacion>, DbErr> {
        let entities = entity::prelude::Habitacion::find().all(self.db).await?;

        Ok(entities.into_iter().map(Habitacion::from_entity).collect())
    }

    /// Inserts a new room with a freshly assigned identifier.
    pub async fn create(&self, params: CreateHabitacionParams) -> Result<Habitacion, DbErr> {
        let entity = entity::habitacion::ActiveModel {
            id: ActiveValue::Set(new_record_id()),
            numero: ActiveValue::Set(params.numero),
            tipo: ActiveValue::Set(params.tipo),
            precio: ActiveValue::Set(params.precio),
        }
        .insert(self.db)
        .await?;

        Ok(Habitacion::from_entity(entity))
    }

    /// Deletes a room by identifier.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No row had that identifier
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Habitacion::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
