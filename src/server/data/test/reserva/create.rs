use super::*;

/// Tests creating a reservation keeps its dates.
///
/// Expected: Ok with the dates stored unchanged
#[tokio::test]
async fn creates_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reserva)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = ReservaRepository::new(db);
    let reserva = repo
        .create(CreateReservaParams {
            cliente: "Ana".to_string(),
            habitacion: "101".to_string(),
            fecha_entrada: date(2025, 3, 1),
            fecha_salida: date(2025, 3, 4),
        })
        .await?;

    let reservas = repo.get_all().await?;
    assert_eq!(reservas.len(), 1);
    assert_eq!(reservas[0].id, reserva.id);
    assert_eq!(reservas[0].fecha_entrada, date(2025, 3, 1));
    assert_eq!(reservas[0].fecha_salida, date(2025, 3, 4));

    Ok(())
}

/// Tests that the room and client are not checked against other collections.
///
/// No client or room tables exist in this test database at all.
///
/// Expected: Ok with the reservation stored
#[tokio::test]
async fn accepts_unknown_client_and_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reserva)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let reserva = ReservaRepository::new(db)
        .create(CreateReservaParams {
            cliente: "Nadie".to_string(),
            habitacion: "sin número".to_string(),
            fecha_entrada: date(2025, 3, 1),
            fecha_salida: date(2025, 3, 2),
        })
        .await?;

    assert_eq!(reserva.habitacion, "sin número");

    Ok(())
}

/// Tests overlapping reservations for the same room.
///
/// Expected: Ok with both reservations stored
#[tokio::test]
async fn accepts_overlapping_stays() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reserva)
        .build()
        .await
        .unwrap();
    let db = test.db();

    factory::reserva::ReservaFactory::new(db)
        .habitacion("101")
        .fechas(date(2025, 3, 1), date(2025, 3, 5))
        .build()
        .await?;

    let repo = ReservaRepository::new(db);
    repo.create(CreateReservaParams {
        cliente: "Luis".to_string(),
        habitacion: "101".to_string(),
        fecha_entrada: date(2025, 3, 3),
        fecha_salida: date(2025, 3, 6),
    })
    .await?;

    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}
