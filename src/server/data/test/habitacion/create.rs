use super::*;

/// Tests creating a room and listing it back.
///
/// Expected: Ok with the room listed with the same fields plus an identifier
#[tokio::test]
async fn created_room_is_listed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Habitacion)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = HabitacionRepository::new(db);
    let created = repo
        .create(CreateHabitacionParams {
            numero: 101,
            tipo: "suite".to_string(),
            precio: 150.0,
        })
        .await?;

    let habitaciones = repo.get_all().await?;

    assert_eq!(habitaciones, vec![created.clone()]);
    assert_eq!(created.numero, 101);
    assert_eq!(created.tipo, "suite");
    assert_eq!(created.precio, 150.0);

    Ok(())
}

/// Tests that room numbers need not be unique.
///
/// Expected: Ok with both rooms stored
#[tokio::test]
async fn allows_duplicate_numbers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Habitacion)
        .build()
        .await
        .unwrap();
    let db = test.db();

    factory::habitacion::HabitacionFactory::new(db)
        .numero(101)
        .build()
        .await?;

    let repo = HabitacionRepository::new(db);
    repo.create(CreateHabitacionParams {
        numero: 101,
        tipo: "doble".to_string(),
        precio: 90.5,
    })
    .await?;

    let habitaciones = repo.get_all().await?;
    assert_eq!(habitaciones.len(), 2);
    assert!(habitaciones.iter().all(|h| h.numero == 101));

    Ok(())
}
