use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reservation body. Dates use the `YYYY-MM-DD` format of HTML date inputs.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateReservaDto {
    pub cliente: String,
    pub habitacion: String,
    pub fecha_entrada: NaiveDate,
    pub fecha_salida: NaiveDate,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservaDto {
    pub id: String,
    pub cliente: String,
    pub habitacion: String,
    pub fecha_entrada: NaiveDate,
    pub fecha_salida: NaiveDate,
}
