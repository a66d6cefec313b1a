//! Callbacks, closures and recursion.
//!
//! Traversal helpers work on plain slices. The recursive functions work on
//! the dynamic value model from `kata-value`, re-exported here.
mod callback;
mod closure;
mod recursion;

pub use callback::{each, map};
pub use closure::{cache_function, limit_function_call_count, CallLimit, Cached};
pub use recursion::{check_matching_leaves, flatten, reverse_str};

pub use kata_value::{error, Array, Atomic, CacheKey, Error, Map, Result, Value};
