//! Lazily computed, memoized values

use std::fmt;
use std::sync::OnceLock;

type Producer<T, E> = Box<dyn Fn() -> Result<T, E> + Send + Sync>;

/// A value computed on first access.
///
/// The producer runs at most once; its outcome, error included, is kept and
/// returned by every later access.
pub struct Deferred<T, E> {
    producer: Producer<T, E>,
    value: OnceLock<Result<T, E>>,
}

impl<T, E> Deferred<T, E> {
    pub fn new<F>(producer: F) -> Self
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        Self {
            producer: Box::new(producer),
            value: OnceLock::new(),
        }
    }

    /// Evaluates the producer if needed and borrows the memoized outcome
    pub fn get(&self) -> Result<&T, &E> {
        self.value.get_or_init(|| (self.producer)()).as_ref()
    }

    pub fn is_evaluated(&self) -> bool {
        self.value.get().is_some()
    }

    /// Consumes the wrapper, evaluating it if nothing has yet
    pub fn into_result(self) -> Result<T, E> {
        match self.value.into_inner() {
            Some(outcome) => outcome,
            None => (self.producer)(),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Deferred<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("value", &self.value.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(calls: &Arc<AtomicUsize>, outcome: Result<u32, String>) -> Deferred<u32, String> {
        let calls = Arc::clone(calls);
        Deferred::new(move || {
            calls.fetch_add(1, Ordering::SeqCst);
            outcome.clone()
        })
    }

    #[test]
    fn producer_is_not_run_until_accessed() {
        let calls = Arc::new(AtomicUsize::new(0));

        let deferred = counting(&calls, Ok(7));

        assert!(!deferred.is_evaluated());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn value_is_memoized() {
        let calls = Arc::new(AtomicUsize::new(0));
        let deferred = counting(&calls, Ok(7));

        assert_eq!(deferred.get(), Ok(&7));
        assert_eq!(deferred.get(), Ok(&7));
        assert!(deferred.is_evaluated());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn errors_are_memoized() {
        let calls = Arc::new(AtomicUsize::new(0));
        let deferred = counting(&calls, Err("offline".to_string()));

        assert_eq!(deferred.get(), Err(&"offline".to_string()));
        assert_eq!(deferred.get(), Err(&"offline".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn into_result_reuses_evaluated_outcome() {
        let calls = Arc::new(AtomicUsize::new(0));
        let deferred = counting(&calls, Ok(7));

        deferred.get().unwrap();

        assert_eq!(deferred.into_result(), Ok(7));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn into_result_evaluates_untouched_value() {
        let calls = Arc::new(AtomicUsize::new(0));
        let deferred = counting(&calls, Ok(7));

        assert_eq!(deferred.into_result(), Ok(7));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
