use super::*;

#[tokio::test]
async fn deletes_service() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Servicio)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let servicio = factory::create_servicio(db).await?;

    let repo = ServicioRepository::new(db);

    assert!(repo.delete(&servicio.id).await?);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn unknown_id_leaves_services_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Servicio)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let servicio = factory::create_servicio(db).await?;

    let repo = ServicioRepository::new(db);

    assert!(!repo.delete("000000000000000000000000").await?);
    let servicios = repo.get_all().await?;
    assert_eq!(servicios.len(), 1);
    assert_eq!(servicios[0].id, servicio.id);

    Ok(())
}
