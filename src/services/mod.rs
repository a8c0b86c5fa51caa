pub mod dotenv;
pub mod injector;

pub use dotenv::load_dotenv;
pub use injector::inject;
