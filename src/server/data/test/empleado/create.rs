use super::*;

#[tokio::test]
async fn creates_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Empleado)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = EmpleadoRepository::new(db);
    let empleado = repo
        .create(CreateEmpleadoParams {
            nombre: "Luis".to_string(),
            puesto: "Conserje".to_string(),
            telefono: "555-9876".to_string(),
        })
        .await?;

    let empleados = repo.get_all().await?;
    assert_eq!(empleados, vec![empleado]);
    assert_eq!(empleados[0].puesto, "Conserje");

    Ok(())
}
