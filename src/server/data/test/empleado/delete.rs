use super::*;

#[tokio::test]
async fn deletes_only_the_given_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Empleado)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let empleado = factory::create_empleado(db).await?;
    let other = factory::empleado::EmpleadoFactory::new(db)
        .puesto("Limpieza")
        .build()
        .await?;

    let repo = EmpleadoRepository::new(db);
    assert!(repo.delete(&empleado.id).await?);

    let remaining = repo.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, other.id);

    Ok(())
}
