//! Manufacturer Repository Adapters

pub mod postgres;

pub use postgres::PostgresManufacturerRepository;
