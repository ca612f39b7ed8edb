pub mod config;
pub mod error;
pub mod home;
pub mod schema;
pub mod store;

pub use config::KairosConfig;
pub use error::{Result, StoreError};
pub use home::{KairosHome, default_base_dir};
pub use store::Store;
