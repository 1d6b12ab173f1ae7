//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Configuration
//! - The in-process session store

pub mod car_repository;
pub mod config;
pub mod database;
pub mod driver_repository;
pub mod manufacturer_repository;
pub mod session_store;

pub use car_repository::PostgresCarRepository;
pub use config::AppConfig;
pub use driver_repository::PostgresDriverRepository;
pub use manufacturer_repository::PostgresManufacturerRepository;
pub use session_store::SessionManager;
