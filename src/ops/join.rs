//! Hash joins against a side input.
//!
//! Both joins build a multi-map index from the right-hand side up front
//! (the side input must be finite), then stream the left side lazily; the
//! left side may be unbounded. Rows matching more than one right-hand
//! entry expand cartesian-style within their key group.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use crate::flow::Flow;

impl<I: Iterator> Flow<I> {
    /// Left outer join: pair every element with each matching right-hand
    /// entry, or with `None` when nothing matches.
    ///
    /// Matching uses equality between `key` applied to self and
    /// `other_key` applied to `other`. The right side is fully drained
    /// into the join index before the first left element is pulled.
    ///
    /// # Example
    /// ```
    /// use rivulet::flow;
    ///
    /// let out = flow(0..6).join_left((0..6).step_by(2), |x| *x, |y| *y).to_vec();
    /// assert_eq!(out, vec![
    ///     (0, Some(0)), (1, None), (2, Some(2)),
    ///     (3, None), (4, Some(4)), (5, None),
    /// ]);
    /// ```
    pub fn join_left<U, K, J, FK, GK>(
        self,
        other: J,
        key: FK,
        other_key: GK,
    ) -> Flow<JoinLeft<I, U, K, FK>>
    where
        I::Item: Clone,
        U: Clone,
        K: Eq + Hash,
        J: IntoIterator<Item = U>,
        FK: FnMut(&I::Item) -> K,
        GK: FnMut(&U) -> K,
    {
        Flow {
            iter: JoinLeft {
                iter: self.iter,
                index: build_index(other, other_key),
                key,
                pending: VecDeque::new(),
            },
        }
    }

    /// Inner join: like [`join_left`](Flow::join_left), but elements with
    /// no match are omitted entirely.
    ///
    /// # Example
    /// ```
    /// use rivulet::flow;
    ///
    /// let out = flow(0..6).join_inner((0..6).step_by(2), |x| *x, |y| *y).to_vec();
    /// assert_eq!(out, vec![(0, 0), (2, 2), (4, 4)]);
    /// ```
    pub fn join_inner<U, K, J, FK, GK>(
        self,
        other: J,
        key: FK,
        other_key: GK,
    ) -> Flow<JoinInner<I, U, K, FK>>
    where
        I::Item: Clone,
        U: Clone,
        K: Eq + Hash,
        J: IntoIterator<Item = U>,
        FK: FnMut(&I::Item) -> K,
        GK: FnMut(&U) -> K,
    {
        Flow {
            iter: JoinInner {
                iter: self.iter,
                index: build_index(other, other_key),
                key,
                pending: VecDeque::new(),
            },
        }
    }
}

/// Drain a side input into a key -> entries multi-map.
fn build_index<U, K, J, GK>(other: J, other_key: GK) -> HashMap<K, Vec<U>>
where
    K: Eq + Hash,
    J: IntoIterator<Item = U>,
    GK: FnMut(&U) -> K,
{
    let mut other_key = other_key;
    let mut index: HashMap<K, Vec<U>> = HashMap::new();
    for entry in other {
        index.entry(other_key(&entry)).or_default().push(entry);
    }
    index
}

/// Streaming left-outer-join adapter for [`Flow::join_left`].
pub struct JoinLeft<I: Iterator, U, K, FK> {
    iter: I,
    index: HashMap<K, Vec<U>>,
    key: FK,
    /// Expanded rows for the current left element.
    pending: VecDeque<(I::Item, Option<U>)>,
}

impl<I, U, K, FK> Iterator for JoinLeft<I, U, K, FK>
where
    I: Iterator,
    I::Item: Clone,
    U: Clone,
    K: Eq + Hash,
    FK: FnMut(&I::Item) -> K,
{
    type Item = (I::Item, Option<U>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(row) = self.pending.pop_front() {
                return Some(row);
            }
            let entry = self.iter.next()?;
            match self.index.get(&(self.key)(&entry)) {
                Some(matches) => {
                    for m in matches {
                        self.pending.push_back((entry.clone(), Some(m.clone())));
                    }
                }
                None => return Some((entry, None)),
            }
        }
    }
}

/// Streaming inner-join adapter for [`Flow::join_inner`].
pub struct JoinInner<I: Iterator, U, K, FK> {
    iter: I,
    index: HashMap<K, Vec<U>>,
    key: FK,
    pending: VecDeque<(I::Item, U)>,
}

impl<I, U, K, FK> Iterator for JoinInner<I, U, K, FK>
where
    I: Iterator,
    I::Item: Clone,
    U: Clone,
    K: Eq + Hash,
    FK: FnMut(&I::Item) -> K,
{
    type Item = (I::Item, U);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(row) = self.pending.pop_front() {
                return Some(row);
            }
            let entry = self.iter.next()?;
            if let Some(matches) = self.index.get(&(self.key)(&entry)) {
                for m in matches {
                    self.pending.push_back((entry.clone(), m.clone()));
                }
            }
        }
    }
}
