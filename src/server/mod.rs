//! HTTP surface.
//!
//! | Route                | Handler              |
//! |----------------------|----------------------|
//! | `GET /`              | practice page        |
//! | `GET /api/question`  | random question      |
//! | `POST /api/evaluate` | correct + score      |

mod handlers;
mod request_log;
mod router;
mod state;

pub use handlers::{evaluate_handler, index_handler, question_handler, ErrorResponse};
pub use request_log::request_log_middleware;
pub use router::create_router;
pub use state::AppState;
