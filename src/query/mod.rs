//! Query parameter model
//!
//! Everything a list request sends besides the endpoint itself: the
//! pagination window ([`QuerySpec`]), structured filters
//! ([`FilterQuery`]) and relation expansion ([`Expand`]).

mod expand;
mod filter;
mod spec;

pub use expand::Expand;
pub use filter::FilterQuery;
pub use spec::{QuerySpec, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
