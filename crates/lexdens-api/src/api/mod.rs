//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{
  COMPLEXITY_INFO, WELCOME_MESSAGE, get_complexity, get_index, health_check, not_found,
};
pub use routes::{create_router, run_server};
pub use state::AppState;
