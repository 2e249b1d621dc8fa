use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{
    model::cliente::{CreateClienteParams, Cliente},
    util::id::new_record_id,
};

pub struct ClienteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClienteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every client in the store's default order.
    pub async fn get_all(&self) -> Result<Vec<Cliente>, DbErr> {
        let entities = entity::prelude::Cliente::find().all(self.db).await?;

        Ok(entities.into_iter().map(Cliente::from_entity).collect())
    }

    /// Inserts a new client with a freshly assigned identifier.
    pub async fn create(&self, params: CreateClienteParams) -> Result<Cliente, DbErr> {
        let entity = entity::cliente::ActiveModel {
            id: ActiveValue::Set(new_record_id()),
            nombre: ActiveValue::Set(params.nombre),
            email: ActiveValue::Set(params.email),
            telefono: ActiveValue::Set(params.telefono),
        }
        .insert(self.db)
        .await?;

        Ok(Cliente::from_entity(entity))
    }

    /// Deletes a client by identifier.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No row had that identifier
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Cliente::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
