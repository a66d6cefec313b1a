/// A wrapper that forwards to its callback a limited number of times.
///
/// Create one with [`limit_function_call_count`].
#[derive(Debug, Clone)]
pub struct CallLimit<F> {
    callback: F,
    limit: usize,
    calls: usize,
}

/// Wrap `callback` so that it is invoked at most `limit` times.
///
/// Each wrapper has its own counter; wrapping the same callback twice
/// gives two independent limits.
pub fn limit_function_call_count<F>(callback: F, limit: usize) -> CallLimit<F> {
    CallLimit {
        callback,
        limit,
        calls: 0,
    }
}

impl<F> CallLimit<F> {
    /// Invoke the callback with `arguments` if the limit has not been
    /// reached yet.
    ///
    /// Returns `None` without invoking the callback once it has been
    /// invoked `limit` times. Pass several arguments as a tuple.
    pub fn call<A, R>(&mut self, arguments: A) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        if self.calls >= self.limit {
            return None;
        }
        self.calls += 1;
        if self.calls == self.limit {
            tracing::debug!(limit = self.limit, "call limit reached");
        }
        Some((self.callback)(arguments))
    }
}
