pub mod router;
pub mod types;
pub mod handlers {
    pub mod analytics;
    pub mod health;
    pub mod predict;
    pub mod restaurants;
    pub mod reviews;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
