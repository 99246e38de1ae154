//! Method-call instrumentation.
//!
//! Operations are wrapped explicitly instead of being decorated:
//!
//! ```ignore
//! let op = CountingMiddleware::new(
//!     HistoryMiddleware::new(inner, Arc::clone(&store), STORE_METHOD),
//!     Arc::clone(&store),
//!     STORE_METHOD,
//! );
//! ```
//!
//! With counting outermost, a call increments the counter, appends its input,
//! runs the inner operation and finally appends its output.

mod counting;
mod history;
mod operation;

pub use counting::CountingMiddleware;
pub use history::HistoryMiddleware;
pub use operation::Operation;
