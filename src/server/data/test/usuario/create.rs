use super::*;

/// Tests creating a user stores the given hash under a fresh identifier.
///
/// Expected: Ok with the user persisted exactly as given
#[tokio::test]
async fn creates_user_with_assigned_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Usuario)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = UsuarioRepository::new(db);
    let usuario = repo
        .create(CreateUsuarioParams {
            nombre: "Ana".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "$2b$10$hash".to_string(),
        })
        .await?;

    assert_eq!(usuario.id.len(), 24);
    assert_eq!(usuario.nombre, "Ana");
    assert_eq!(usuario.password_hash, "$2b$10$hash");

    let db_usuario = entity::prelude::Usuario::find_by_id(usuario.id.clone())
        .one(db)
        .await?;
    assert!(db_usuario.is_some());
    assert_eq!(db_usuario.unwrap().email, "a@x.com");

    Ok(())
}

/// Tests that two users may share an email.
///
/// Expected: Ok with both users stored
#[tokio::test]
async fn allows_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Usuario)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = UsuarioRepository::new(db);
    for nombre in ["Ana", "Otra"] {
        repo.create(CreateUsuarioParams {
            nombre: nombre.to_string(),
            email: "a@x.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;
    }

    let count = entity::prelude::Usuario::find().all(db).await?.len();
    assert_eq!(count, 2);

    Ok(())
}
