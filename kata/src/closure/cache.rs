use ahash::{HashMap, HashMapExt};

use kata_value::{CacheKey, Value};

/// A wrapper that remembers the result of its callback per argument list.
///
/// Create one with [`cache_function`]. Arguments are turned into a
/// [`CacheKey`]; the callback runs at most once per distinct key. The memo
/// table only grows.
pub struct Cached<F, R> {
    callback: F,
    memo: HashMap<CacheKey, R>,
}

/// Wrap `callback` with a private memo table.
///
/// Two wrappers over the same callback do not share results.
pub fn cache_function<F, R>(callback: F) -> Cached<F, R> {
    Cached {
        callback,
        memo: HashMap::new(),
    }
}

impl<F, R> Cached<F, R>
where
    R: Clone,
{
    /// Return the stored result for `arguments`, invoking the callback
    /// only if there is none yet.
    pub fn call(&mut self, arguments: &[Value]) -> R
    where
        F: FnMut(&[Value]) -> R,
    {
        let key = CacheKey::new(arguments);
        if let Some(result) = self.memo.get(&key) {
            tracing::trace!(%key, "cache hit");
            return result.clone();
        }
        tracing::trace!(%key, "cache miss");
        let result = (self.callback)(arguments);
        self.memo.insert(key, result.clone());
        result
    }

    /// Like [`Cached::call`] for a fallible callback.
    ///
    /// Only successful results are stored. An error is handed back to the
    /// caller and the next call with the same arguments tries again.
    pub fn try_call<E>(&mut self, arguments: &[Value]) -> Result<R, E>
    where
        F: FnMut(&[Value]) -> Result<R, E>,
    {
        let key = CacheKey::new(arguments);
        if let Some(result) = self.memo.get(&key) {
            tracing::trace!(%key, "cache hit");
            return Ok(result.clone());
        }
        tracing::trace!(%key, "cache miss");
        let result = (self.callback)(arguments)?;
        self.memo.insert(key, result.clone());
        Ok(result)
    }
}

impl<F, R> Cached<F, R> {
    /// The number of stored results.
    pub fn len(&self) -> usize {
        self.memo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_does_not_call() {
        let mut calls = 0;
        let mut cached = cache_function(|arguments: &[Value]| {
            calls += 1;
            arguments.len()
        });
        assert_eq!(cached.call(&[1.into(), 2.into()]), 2);
        assert_eq!(cached.call(&[1.into(), 2.into()]), 2);
        assert_eq!(cached.len(), 1);
        drop(cached);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_empty_arguments_are_a_key() {
        let mut calls = 0;
        let mut cached = cache_function(|_: &[Value]| {
            calls += 1;
            "result"
        });
        assert!(cached.is_empty());
        cached.call(&[]);
        cached.call(&[]);
        assert_eq!(cached.len(), 1);
        drop(cached);
        assert_eq!(calls, 1);
    }
}
