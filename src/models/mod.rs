pub mod secrets;

pub use secrets::Secrets;
