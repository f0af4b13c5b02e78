pub mod config;
pub mod error;

// Court domain modules (canonical locations for all domain types)
pub mod case;
pub mod case_party;
pub mod hearing;
pub mod judge;
pub mod party;

pub use config::*;
pub use error::*;

// Re-export all domain types
pub use case::*;
pub use case_party::*;
pub use hearing::*;
pub use judge::*;
pub use party::*;
