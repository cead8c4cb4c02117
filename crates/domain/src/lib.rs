//! Domain layer for EcoRoute
//!
//! Contains the value objects and entities shared by every other crate:
//! coordinates, opaque route candidates, emissions estimates and the
//! selected eco-route. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
