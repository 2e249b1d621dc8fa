use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{
    model::reserva::{CreateReservaParams, Reserva},
    util::id::new_record_id,
};

pub struct ReservaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every reservation in the store's default order.
    pub async fn get_all(&self) -> Result<Vec<Reserva>, DbErr> {
        let entities = entity::prelude::Reserva::find().all(self.db).await?;

        Ok(entities.into_iter().map(Reserva::from_entity).collect())
    }

    /// Inserts a new reservation with a freshly assigned identifier.
    pub async fn create(&self, params: CreateReservaParams) -> Result<Reserva, DbErr> {
        let entity = entity::reserva::ActiveModel {
            id: ActiveValue::Set(new_record_id()),
            cliente: ActiveValue::Set(params.cliente),
            habitacion: ActiveValue::Set(params.habitacion),
            fecha_entrada: ActiveValue::Set(params.fecha_entrada),
            fecha_salida: ActiveValue::Set(params.fecha_salida),
        }
        .insert(self.db)
        .await?;

        Ok(Reserva::from_entity(entity))
    }

    /// Deletes a reservation by identifier.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No row had that identifier
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Reserva::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
