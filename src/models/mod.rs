//! GitHub API model types.

mod commit;
mod rate_limit;
mod repository;
mod stats;

pub use commit::*;
pub use rate_limit::*;
pub use repository::*;
pub use stats::*;
