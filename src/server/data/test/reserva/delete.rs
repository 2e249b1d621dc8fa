use super::*;

/// Tests deleting an existing reservation.
///
/// Expected: Ok(true) and the reservation no longer listed
#[tokio::test]
async fn deletes_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reserva)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let reserva = factory::create_reserva(db).await?;

    let repo = ReservaRepository::new(db);

    assert!(repo.delete(&reserva.id).await?);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests deleting an identifier that was never assigned.
///
/// Expected: Ok(false) with the stored reservations unchanged
#[tokio::test]
async fn unknown_id_leaves_reservations_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reserva)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let reserva = factory::reserva::ReservaFactory::new(db)
        .fechas(date(2025, 5, 1), date(2025, 5, 3))
        .build()
        .await?;

    let repo = ReservaRepository::new(db);

    assert!(!repo.delete("nope").await?);

    let reservas = repo.get_all().await?;
    assert_eq!(reservas.len(), 1);
    assert_eq!(reservas[0].id, reserva.id);
    assert_eq!(reservas[0].fecha_entrada, date(2025, 5, 1));

    Ok(())
}
