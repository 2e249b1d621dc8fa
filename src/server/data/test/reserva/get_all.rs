use super::*;

#[tokio::test]
async fn lists_every_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reserva)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let first = factory::create_reserva(db).await?;
    let second = factory::reserva::ReservaFactory::new(db)
        .cliente("Luis")
        .build()
        .await?;

    let reservas = ReservaRepository::new(db).get_all().await?;

    assert_eq!(reservas.len(), 2);
    assert!(reservas.iter().any(|r| r.id == first.id && r.cliente == "Ana"));
    assert!(reservas.iter().any(|r| r.id == second.id && r.cliente == "Luis"));

    Ok(())
}
