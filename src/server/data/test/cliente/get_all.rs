use super::*;

/// Tests listing an empty collection.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_clients() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Cliente)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let clientes = ClienteRepository::new(db).get_all().await?;

    assert!(clientes.is_empty());

    Ok(())
}

/// Tests listing returns every stored client.
///
/// Expected: Ok with all clients
#[tokio::test]
async fn returns_all_clients() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Cliente)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let first = factory::create_cliente(db).await?;
    let second = factory::create_cliente(db).await?;

    let clientes = ClienteRepository::new(db).get_all().await?;

    assert_eq!(clientes.len(), 2);
    assert!(clientes.iter().any(|c| c.id == first.id));
    assert!(clientes.iter().any(|c| c.id == second.id));

    Ok(())
}
