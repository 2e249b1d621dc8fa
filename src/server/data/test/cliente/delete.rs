use super::*;

/// Tests deleting an existing client.
///
/// Expected: Ok(true) and the client no longer listed
#[tokio::test]
async fn deletes_existing_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Cliente)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let cliente = factory::create_cliente(db).await?;
    let other = factory::create_cliente(db).await?;

    let repo = ClienteRepository::new(db);
    let deleted = repo.delete(&cliente.id).await?;

    assert!(deleted);
    let remaining = repo.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, other.id);

    Ok(())
}

/// Tests deleting an identifier that does not exist.
///
/// Expected: Ok(false) and the collection unchanged
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Cliente)
        .build()
        .await
        .unwrap();
    let db = test.db();

    factory::create_cliente(db).await?;

    let repo = ClienteRepository::new(db);
    let deleted = repo.delete("not-an-id").await?;

    assert!(!deleted);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
