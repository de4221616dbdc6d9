pub mod descarga;
pub mod envelope;
pub mod persona;
