//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let cliente = factory::create_cliente(&db).await?;
//! let habitacion = factory::habitacion::HabitacionFactory::new(&db)
//!     .numero(101)
//!     .tipo("suite")
//!     .build()
//!     .await?;
//! ```

pub mod cliente;
pub mod empleado;
pub mod habitacion;
pub mod helpers;
pub mod reserva;
pub mod servicio;
pub mod usuario;

pub use cliente::create_cliente;
pub use empleado::create_empleado;
pub use habitacion::create_habitacion;
pub use reserva::create_reserva;
pub use servicio::create_servicio;
pub use usuario::create_usuario;
