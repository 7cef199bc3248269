//! Side-effecting stages: observer hooks and throttling.

use std::time::{Duration, Instant};

use crate::flow::Flow;

impl<I: Iterator> Flow<I> {
    /// Invoke `func` on each element immediately before yielding it,
    /// discarding the result.
    ///
    /// # Example
    /// ```
    /// use rivulet::flow;
    ///
    /// let mut seen = Vec::new();
    /// let out = flow(0..3).side_effect(|x| seen.push(*x)).to_vec();
    /// assert_eq!(out, vec![0, 1, 2]);
    /// assert_eq!(seen, vec![0, 1, 2]);
    /// ```
    pub fn side_effect<F>(self, func: F) -> Flow<SideEffect<I, F, fn(), fn()>>
    where
        F: FnMut(&I::Item),
    {
        Flow {
            iter: SideEffect {
                iter: self.iter,
                func,
                before: None,
                after: None,
            },
        }
    }

    /// [`side_effect`](Flow::side_effect) with lifecycle hooks.
    ///
    /// `before` runs exactly once ahead of the first pull. `after` runs
    /// exactly once when the sequence is exhausted *or* abandoned --
    /// dropping the stage mid-iteration (early termination, a panicking
    /// callback, a downstream that stops pulling) still fires it.
    pub fn side_effect_with<F, B, A>(self, func: F, before: B, after: A) -> Flow<SideEffect<I, F, B, A>>
    where
        F: FnMut(&I::Item),
        B: FnOnce(),
        A: FnOnce(),
    {
        Flow {
            iter: SideEffect {
                iter: self.iter,
                func,
                before: Some(before),
                after: Some(after),
            },
        }
    }

    /// Bound throughput to roughly `per_second` values per second.
    ///
    /// Each value is yielded immediately; before the *next* pull proceeds,
    /// the calling thread sleeps for whatever remains of the interval
    /// after downstream processing time is accounted for. If downstream
    /// work already exceeds the interval, no sleep happens.
    ///
    /// # Panics
    /// Panics if `per_second` is not a finite positive number.
    pub fn rate_limit(self, per_second: f64) -> Flow<RateLimit<I>> {
        assert!(
            per_second.is_finite() && per_second > 0.0,
            "rate_limit() requires a finite positive rate"
        );
        Flow {
            iter: RateLimit {
                iter: self.iter,
                interval: Duration::from_secs_f64(1.0 / per_second),
                last_yield: None,
            },
        }
    }
}

/// Observer adapter for [`Flow::side_effect`] and
/// [`Flow::side_effect_with`].
///
/// The `after` hook lives in an `Option` so that whichever of exhaustion
/// or drop happens first takes it; the other path finds it empty.
pub struct SideEffect<I, F, B, A>
where
    A: FnOnce(),
{
    iter: I,
    func: F,
    before: Option<B>,
    after: Option<A>,
}

impl<I, F, B, A> Iterator for SideEffect<I, F, B, A>
where
    I: Iterator,
    F: FnMut(&I::Item),
    B: FnOnce(),
    A: FnOnce(),
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(before) = self.before.take() {
            before();
        }
        match self.iter.next() {
            Some(item) => {
                (self.func)(&item);
                Some(item)
            }
            None => {
                if let Some(after) = self.after.take() {
                    after();
                }
                None
            }
        }
    }
}

impl<I, F, B, A> Drop for SideEffect<I, F, B, A>
where
    A: FnOnce(),
{
    fn drop(&mut self) {
        if let Some(after) = self.after.take() {
            after();
        }
    }
}

/// Thread-sleeping throttle adapter for [`Flow::rate_limit`].
pub struct RateLimit<I> {
    iter: I,
    interval: Duration,
    last_yield: Option<Instant>,
}

impl<I: Iterator> Iterator for RateLimit<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(last) = self.last_yield {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                std::thread::sleep(self.interval - elapsed);
            }
        }
        let item = self.iter.next();
        self.last_yield = Some(Instant::now());
        item
    }
}
