use super::*;

/// Tests creating a client.
///
/// Expected: Ok with the client stored under a fresh 24 character identifier
#[tokio::test]
async fn creates_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Cliente)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let cliente = ClienteRepository::new(db)
        .create(CreateClienteParams {
            nombre: "Ana".to_string(),
            email: "a@x.com".to_string(),
            telefono: "555-1234".to_string(),
        })
        .await?;

    assert_eq!(cliente.id.len(), 24);
    assert_eq!(cliente.nombre, "Ana");
    assert_eq!(cliente.telefono, "555-1234");

    let db_cliente = entity::prelude::Cliente::find_by_id(cliente.id.clone())
        .one(db)
        .await?;
    assert!(db_cliente.is_some());

    Ok(())
}

/// Tests that identical clients are stored as separate records.
///
/// Expected: Ok with two distinct identifiers
#[tokio::test]
async fn stores_duplicates_separately() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Cliente)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = ClienteRepository::new(db);
    let params = CreateClienteParams {
        nombre: "Ana".to_string(),
        email: "a@x.com".to_string(),
        telefono: "555-1234".to_string(),
    };
    let first = repo.create(params.clone()).await?;
    let second = repo.create(params).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
