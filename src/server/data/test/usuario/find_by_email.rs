use super::*;

/// Tests finding a user by exact email.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Usuario)
        .build()
        .await
        .unwrap();
    let db = test.db();

    factory::create_usuario(db).await?;
    let ana = factory::usuario::UsuarioFactory::new(db)
        .nombre("Ana")
        .email("a@x.com")
        .build()
        .await?;

    let found = UsuarioRepository::new(db).find_by_email("a@x.com").await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, ana.id);
    assert_eq!(found.nombre, "Ana");

    Ok(())
}

/// Tests the email match is exact, not case-insensitive or partial.
///
/// Expected: Ok(None) for near misses
#[tokio::test]
async fn requires_exact_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Usuario)
        .build()
        .await
        .unwrap();
    let db = test.db();

    factory::usuario::UsuarioFactory::new(db)
        .email("a@x.com")
        .build()
        .await?;

    let repo = UsuarioRepository::new(db);

    assert!(repo.find_by_email("A@X.COM").await?.is_none());
    assert!(repo.find_by_email("a@x").await?.is_none());
    assert!(repo.find_by_email("").await?.is_none());

    Ok(())
}
