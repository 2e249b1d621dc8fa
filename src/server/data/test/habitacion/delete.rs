use super::*;

/// Tests that deleting twice succeeds both times, removing the room once.
///
/// Expected: Ok(true) then Ok(false), room gone after the first call
#[tokio::test]
async fn second_delete_is_a_no_op() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Habitacion)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let habitacion = factory::create_habitacion(db).await?;

    let repo = HabitacionRepository::new(db);

    assert!(repo.delete(&habitacion.id).await?);
    assert!(repo.get_all().await?.is_empty());
    assert!(!repo.delete(&habitacion.id).await?);

    Ok(())
}
