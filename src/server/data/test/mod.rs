mod cliente;
mod empleado;
mod habitacion;
mod reserva;
mod servicio;
mod usuario;
