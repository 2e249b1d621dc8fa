use super::*;

#[tokio::test]
async fn returns_empty_when_no_employees() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Empleado)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let empleados = EmpleadoRepository::new(db).get_all().await?;

    assert!(empleados.is_empty());

    Ok(())
}

/// Tests that a created employee is listed until it is deleted.
///
/// Expected: listed with its fields after create, absent after delete
#[tokio::test]
async fn lists_employee_until_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Empleado)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = EmpleadoRepository::new(db);
    let empleado = repo
        .create(CreateEmpleadoParams {
            nombre: "Marta".to_string(),
            puesto: "Recepción".to_string(),
            telefono: "555-1111".to_string(),
        })
        .await?;
    let other = factory::create_empleado(db).await?;

    let empleados = repo.get_all().await?;
    assert_eq!(empleados.len(), 2);
    assert!(empleados.contains(&empleado));

    repo.delete(&empleado.id).await?;

    let empleados = repo.get_all().await?;
    assert!(!empleados.iter().any(|e| e.id == empleado.id));
    assert_eq!(empleados[0].id, other.id);

    Ok(())
}
