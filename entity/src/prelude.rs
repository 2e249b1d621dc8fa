pub use super::cliente::Entity as Cliente;
pub use super::empleado::Entity as Empleado;
pub use super::habitacion::Entity as Habitacion;
pub use super::reserva::Entity as Reserva;
pub use super::servicio::Entity as Servicio;
pub use super::usuario::Entity as Usuario;
