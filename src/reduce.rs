//! Terminal reducers: the stages that actually drain a pipeline.
//!
//! Everything here consumes the [`Flow`] and pulls it to completion (or up
//! to a bound). Reducers that can come up empty-handed either take a
//! default ([`first_or`](Flow::first_or), [`last_or`](Flow::last_or)) or
//! return an error.

use anyhow::{Result, anyhow};
use std::iter::Sum;

use crate::flow::Flow;

impl<I: Iterator> Flow<I> {
    /// Drain the pipeline into any [`FromIterator`] container.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashSet;
    /// use rivulet::flow;
    ///
    /// let s: HashSet<i32> = flow([1, 2, 2, 3]).collect();
    /// assert_eq!(s.len(), 3);
    /// ```
    pub fn collect<C: FromIterator<I::Item>>(self) -> C {
        self.iter.collect()
    }

    /// Drain the pipeline into a `Vec`.
    pub fn to_vec(self) -> Vec<I::Item> {
        self.iter.collect()
    }

    /// Number of elements in the sequence.
    pub fn count(self) -> usize {
        self.iter.count()
    }

    /// Sum of all elements.
    ///
    /// # Example
    /// ```
    /// use rivulet::flow;
    ///
    /// assert_eq!(flow([1, 2, 3]).sum::<i32>(), 6);
    /// ```
    pub fn sum<S: Sum<I::Item>>(self) -> S {
        self.iter.sum()
    }

    /// Smallest element, or `None` on an empty sequence.
    pub fn min(self) -> Option<I::Item>
    where
        I::Item: Ord,
    {
        self.iter.min()
    }

    /// Largest element, or `None` on an empty sequence.
    pub fn max(self) -> Option<I::Item>
    where
        I::Item: Ord,
    {
        self.iter.max()
    }

    /// First element of the sequence.
    ///
    /// # Errors
    /// Returns an error if the sequence is empty; use
    /// [`first_or`](Flow::first_or) to supply a default instead.
    pub fn first(mut self) -> Result<I::Item> {
        self.iter
            .next()
            .ok_or_else(|| anyhow!("first() on an empty sequence"))
    }

    /// First element, or `default` if the sequence is empty.
    pub fn first_or(mut self, default: I::Item) -> I::Item {
        self.iter.next().unwrap_or(default)
    }

    /// Last element of the sequence. Drains the upstream.
    ///
    /// # Errors
    /// Returns an error if the sequence is empty; use
    /// [`last_or`](Flow::last_or) to supply a default instead.
    pub fn last(self) -> Result<I::Item> {
        self.iter
            .last()
            .ok_or_else(|| anyhow!("last() on an empty sequence"))
    }

    /// Last element, or `default` if the sequence is empty.
    pub fn last_or(self, default: I::Item) -> I::Item {
        self.iter.last().unwrap_or(default)
    }

    /// Element at position `index` (0-based), consuming everything up to
    /// it.
    ///
    /// # Errors
    /// Returns an error if the sequence has `index` or fewer elements.
    pub fn at(mut self, index: usize) -> Result<I::Item> {
        self.iter
            .nth(index)
            .ok_or_else(|| anyhow!("index {index} out of range"))
    }

    /// Up to the first `n` elements, materialized.
    ///
    /// # Example
    /// ```
    /// use rivulet::flow;
    ///
    /// assert_eq!(flow(0..20).head(3), vec![0, 1, 2]);
    /// assert_eq!(flow(0..2).head(10), vec![0, 1]);
    /// ```
    pub fn head(self, n: usize) -> Vec<I::Item> {
        self.take(n).to_vec()
    }

    /// Up to the last `n` elements, materialized.
    ///
    /// Runs a width-`n` window with an `Option` sentinel over the whole
    /// sequence and keeps only the final window, stripping the padded
    /// slots -- memory stays O(n) no matter how long the sequence is.
    ///
    /// # Example
    /// ```
    /// use rivulet::flow;
    ///
    /// assert_eq!(flow(0..20).tail(3), vec![17, 18, 19]);
    /// assert_eq!(flow(0..2).tail(10), vec![0, 1]);
    /// ```
    pub fn tail(self, n: usize) -> Vec<I::Item>
    where
        I::Item: Clone,
    {
        let mut last_window = None;
        for w in self.map(Some).window(n, 1, None) {
            last_window = Some(w);
        }
        last_window
            .map(|w| w.into_iter().flatten().collect())
            .unwrap_or_default()
    }

    /// Combine elements left-to-right with a binary function.
    ///
    /// # Errors
    /// Returns an error on an empty sequence -- there is no value to seed
    /// the accumulator with; use [`fold`](Flow::fold) for a seeded,
    /// infallible version.
    ///
    /// # Example
    /// ```
    /// use rivulet::flow;
    ///
    /// assert_eq!(flow(0..5).reduce(|a, b| a + b).unwrap(), 10);
    /// ```
    pub fn reduce<F>(mut self, f: F) -> Result<I::Item>
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        let seed = self
            .iter
            .next()
            .ok_or_else(|| anyhow!("reduce() on an empty sequence"))?;
        Ok(self.iter.fold(seed, f))
    }

    /// Fold elements left-to-right starting from `init`.
    ///
    /// Never errors: an empty sequence folds to `init`.
    ///
    /// # Example
    /// ```
    /// use rivulet::flow;
    ///
    /// let s = flow(0..5).fold(String::new(), |acc, x| acc + &x.to_string());
    /// assert_eq!(s, "01234");
    /// ```
    pub fn fold<A, F>(self, init: A, f: F) -> A
    where
        F: FnMut(A, I::Item) -> A,
    {
        self.iter.fold(init, f)
    }
}
