// Wrappers that bundle a callback with state it keeps across calls. Calls
// take `&mut self`, so updating the state and dispatching to the callback
// happen as one exclusive step.
mod cache;
mod call_limit;

pub use cache::{cache_function, Cached};
pub use call_limit::{limit_function_call_count, CallLimit};
