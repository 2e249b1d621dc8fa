use super::*;

/// Tests creating a service for a room number that has no room record.
///
/// Expected: Ok with the service stored as given
#[tokio::test]
async fn creates_service_without_room_check() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Servicio)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = ServicioRepository::new(db);
    let servicio = repo
        .create(CreateServicioParams {
            nombre_s: "Desayuno".to_string(),
            habitacion: 999,
            costo: 12.5,
        })
        .await?;

    let servicios = repo.get_all().await?;
    assert_eq!(servicios.len(), 1);
    assert_eq!(servicios[0].id, servicio.id);
    assert_eq!(servicios[0].nombre_s, "Desayuno");
    assert_eq!(servicios[0].habitacion, 999);
    assert_eq!(servicios[0].costo, 12.5);

    Ok(())
}
