//! Domain layer: analytics records, dependency relations and the pure
//! services that transform them. Nothing here performs I/O.
pub mod domain;
pub mod services;
