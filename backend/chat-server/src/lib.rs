pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;


pub use crate::routes::build_router;
pub use crate::state::build_app_state;
