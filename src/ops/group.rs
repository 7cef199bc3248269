//! Grouping and uniqueness stages.

use std::collections::HashSet;
use std::hash::Hash;

use crate::flow::Flow;

impl<I: Iterator> Flow<I> {
    /// Group elements by a key, sorting first so every distinct key
    /// appears exactly once.
    ///
    /// Fully materializes the upstream (O(n log n)); groups are yielded in
    /// ascending key order, each as `(key, sub-sequence)`. For pre-grouped
    /// input that must not be buffered, see
    /// [`group_adjacent`](Flow::group_adjacent).
    ///
    /// # Example
    /// ```
    /// use rivulet::flow;
    ///
    /// let groups: Vec<(i32, Vec<i32>)> = flow([2, 4, 2, 4])
    ///     .group_by(|x| *x)
    ///     .map(|(k, members)| (k, members.to_vec()))
    ///     .to_vec();
    /// assert_eq!(groups, vec![(2, vec![2, 2]), (4, vec![4, 4])]);
    /// ```
    pub fn group_by<K, F>(self, key: F) -> Flow<GroupAdjacent<std::vec::IntoIter<I::Item>, K, F>>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        let mut key = key;
        let mut items: Vec<I::Item> = self.iter.collect();
        items.sort_by_key(&mut key);
        Flow {
            iter: GroupAdjacent {
                iter: items.into_iter(),
                key,
                pending: None,
            },
        }
    }

    /// Group consecutive elements that share a key, without sorting.
    ///
    /// O(1) grouping state: only the current group is buffered. The caller
    /// must guarantee the input is already grouped by key; if it is not,
    /// the same key reappears as separate groups -- the stage does not
    /// detect or signal this.
    ///
    /// # Example
    /// ```
    /// use rivulet::flow;
    ///
    /// let keys: Vec<i32> = flow([2, 2, 5, 5])
    ///     .group_adjacent(|x| *x)
    ///     .map(|(k, _members)| k)
    ///     .to_vec();
    /// assert_eq!(keys, vec![2, 5]);
    /// ```
    pub fn group_adjacent<K, F>(self, key: F) -> Flow<GroupAdjacent<I, K, F>>
    where
        K: PartialEq,
        F: FnMut(&I::Item) -> K,
    {
        Flow {
            iter: GroupAdjacent {
                iter: self.iter,
                key,
                pending: None,
            },
        }
    }

    /// Yield each element the first time it appears, dropping later
    /// duplicates.
    ///
    /// The seen-set grows linearly with the number of distinct elements.
    ///
    /// # Example
    /// ```
    /// use rivulet::flow;
    ///
    /// assert_eq!(flow([2, 3, 2, 3]).unique().to_vec(), vec![2, 3]);
    /// ```
    pub fn unique(self) -> Flow<Unique<I, I::Item, fn(&I::Item) -> I::Item>>
    where
        I::Item: Clone + Eq + Hash,
    {
        self.unique_by(Clone::clone as fn(&I::Item) -> I::Item)
    }

    /// Yield elements that are unique by a key function.
    ///
    /// # Example
    /// ```
    /// use rivulet::flow;
    ///
    /// let out = flow([2i32, -3, -2, 3]).unique_by(|x| x.abs()).to_vec();
    /// assert_eq!(out, vec![2, -3]);
    /// ```
    pub fn unique_by<K, F>(self, key: F) -> Flow<Unique<I, K, F>>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
    {
        Flow {
            iter: Unique {
                iter: self.iter,
                key,
                seen: HashSet::new(),
            },
        }
    }
}

/// Adjacent-run grouping adapter for [`Flow::group_by`] and
/// [`Flow::group_adjacent`].
///
/// Each group's members are buffered while the outer sequence advances,
/// then handed out as their own [`Flow`], so a group can be consumed
/// before or after pulling the next one.
pub struct GroupAdjacent<I: Iterator, K, F> {
    iter: I,
    key: F,
    /// First element of the next group, pulled while closing the current one.
    pending: Option<(K, I::Item)>,
}

impl<I, K, F> Iterator for GroupAdjacent<I, K, F>
where
    I: Iterator,
    K: PartialEq,
    F: FnMut(&I::Item) -> K,
{
    type Item = (K, Flow<std::vec::IntoIter<I::Item>>);

    fn next(&mut self) -> Option<Self::Item> {
        let (group_key, first) = match self.pending.take() {
            Some(carried) => carried,
            None => {
                let item = self.iter.next()?;
                let k = (self.key)(&item);
                (k, item)
            }
        };
        let mut members = vec![first];
        for item in self.iter.by_ref() {
            let k = (self.key)(&item);
            if k == group_key {
                members.push(item);
            } else {
                self.pending = Some((k, item));
                break;
            }
        }
        Some((group_key, crate::flow::flow(members)))
    }
}

/// Incremental seen-set adapter for [`Flow::unique`] and
/// [`Flow::unique_by`].
pub struct Unique<I, K, F> {
    iter: I,
    key: F,
    seen: HashSet<K>,
}

impl<I, K, F> Iterator for Unique<I, K, F>
where
    I: Iterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let item = self.iter.next()?;
            if self.seen.insert((self.key)(&item)) {
                return Some(item);
            }
        }
    }
}
