use sea_orm::entity::prelude::*;

/// Room reservation.
///
/// `cliente` and `habitacion` are free text and are not checked against the client
/// or room tables. Overlapping stays for the same room are allowed.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reserva")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub cliente: String,
    pub habitacion: String,
    pub fecha_entrada: Date,
    pub fecha_salida: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
