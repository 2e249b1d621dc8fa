use super::*;

#[tokio::test]
async fn returns_rooms_with_stored_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Habitacion)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let suite = factory::habitacion::HabitacionFactory::new(db)
        .numero(301)
        .tipo("suite")
        .precio(220.0)
        .build()
        .await?;

    let habitaciones = HabitacionRepository::new(db).get_all().await?;

    assert_eq!(habitaciones.len(), 1);
    assert_eq!(habitaciones[0].id, suite.id);
    assert_eq!(habitaciones[0].numero, 301);
    assert_eq!(habitaciones[0].tipo, "suite");
    assert_eq!(habitaciones[0].precio, 220.0);

    Ok(())
}
