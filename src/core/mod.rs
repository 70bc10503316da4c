pub mod errors;
pub mod seed;
pub mod services;
pub mod traits;
