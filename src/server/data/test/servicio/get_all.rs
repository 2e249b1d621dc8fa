use super::*;

#[tokio::test]
async fn returns_empty_when_no_services() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Servicio)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let servicios = ServicioRepository::new(db).get_all().await?;

    assert!(servicios.is_empty());

    Ok(())
}

/// Tests that a created service is listed until it is deleted.
///
/// Expected: listed with its fields after create, absent after delete
#[tokio::test]
async fn lists_service_until_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Servicio)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = ServicioRepository::new(db);
    let servicio = repo
        .create(CreateServicioParams {
            nombre_s: "Lavandería".to_string(),
            habitacion: 204,
            costo: 8.0,
        })
        .await?;
    let other = factory::servicio::ServicioFactory::new(db)
        .nombre_s("Spa")
        .build()
        .await?;

    let servicios = repo.get_all().await?;
    assert_eq!(servicios.len(), 2);
    assert!(servicios.contains(&servicio));

    repo.delete(&servicio.id).await?;

    let servicios = repo.get_all().await?;
    assert_eq!(servicios.len(), 1);
    assert_eq!(servicios[0].id, other.id);
    assert_eq!(servicios[0].nombre_s, "Spa");

    Ok(())
}
