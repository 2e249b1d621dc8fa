use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{
    model::servicio::{CreateServicioParams, Servicio},
    util::id::new_record_id,
};

pub struct ServicioRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServicioRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every service in the store's default order.
    pub async fn get_all(&self) -> Result<Vec<Servicio>, DbErr> {
        let entities = entity::prelude::Servicio::find().all(self.db).await?;

        Ok(entities.into_iter().map(Servicio::from_entity).collect())
    }

    /// Inserts a new service with a freshly assigned identifier.
    pub async fn create(&self, params: CreateServicioParams) -> Result<Servicio, DbErr> {
        let entity = entity::servicio::ActiveModel {
            id: ActiveValue::Set(new_record_id()),
            nombre_s: ActiveValue::Set(params.nombre_s),
            habitacion: ActiveValue::Set(params.habitacion),
            costo: ActiveValue::Set(params.costo),
        }
        .insert(self.db)
        .await?;

        Ok(Servicio::from_entity(entity))
    }

    /// Deletes a service by identifier.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No row had that identifier
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Servicio::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
