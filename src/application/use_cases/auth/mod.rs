//! Authentication Use Cases

pub mod login_driver;

pub use login_driver::LoginDriverUseCase;
