use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateClienteDto {
    pub nombre: String,
    pub email: String,
    pub telefono: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClienteDto {
    pub id: String,
    pub nombre: String,
    pub email: String,
    pub telefono: String,
}
