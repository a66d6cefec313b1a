mod array;
mod atomic;
mod cache_key;
pub mod error;
mod map;
mod value;

pub use array::Array;
pub use atomic::Atomic;
pub use cache_key::CacheKey;
pub use error::{Error, Result};
pub use map::Map;
pub use value::Value;
