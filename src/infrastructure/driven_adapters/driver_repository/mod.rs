//! Driver Repository Adapters

pub mod postgres;

pub use postgres::PostgresDriverRepository;
