use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateHabitacionDto {
    pub numero: i32,
    pub tipo: String,
    pub precio: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HabitacionDto {
    pub id: String,
    pub numero: i32,
    pub tipo: String,
    pub precio: f64,
}
