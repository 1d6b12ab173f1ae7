//! Car Repository Adapters

pub mod postgres;

pub use postgres::PostgresCarRepository;
