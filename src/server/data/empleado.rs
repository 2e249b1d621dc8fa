use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{
    model::empleado::{CreateEmpleadoParams, Empleado},
    util::id::new_record_id,
};

pub struct EmpleadoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmpleadoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every employee in the store's default order.
    pub async fn get_all(&self) -> Result<Vec<Empleado>, DbErr> {
        let entities = entity::prelude::Empleado::find().all(self.db).await?;

        Ok(entities.into_iter().map(Empleado::from_entity).collect())
    }

    /// Inserts a new employee with a freshly assigned identifier.
    pub async fn create(&self, params: CreateEmpleadoParams) -> Result<Empleado, DbErr> {
        let entity = entity::empleado::ActiveModel {
            id: ActiveValue::Set(new_record_id()),
            nombre: ActiveValue::Set(params.nombre),
            puesto: ActiveValue::Set(params.puesto),
            telefono: ActiveValue::Set(params.telefono),
        }
        .insert(self.db)
        .await?;

        Ok(Empleado::from_entity(entity))
    }

    /// Deletes a employee by identifier.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No row had that identifier
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Empleado::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
