//! Reordering stages: sort and shuffle.
//!
//! Both fully materialize the upstream before yielding anything; they are
//! the explicitly order-changing stages of the pipeline.

use crate::flow::Flow;
use crate::utils::{SplitMix64, entropy_seed};

impl<I: Iterator> Flow<I> {
    /// Sort ascending by the elements' own ordering.
    ///
    /// Fully materializes the upstream; the sort is stable.
    ///
    /// # Example
    /// ```
    /// use rivulet::flow;
    ///
    /// assert_eq!(flow([3, 6, 1]).sort().to_vec(), vec![1, 3, 6]);
    /// ```
    pub fn sort(self) -> Flow<std::vec::IntoIter<I::Item>>
    where
        I::Item: Ord,
    {
        let mut items: Vec<I::Item> = self.iter.collect();
        items.sort();
        Flow {
            iter: items.into_iter(),
        }
    }

    /// Sort descending. Stable: equal elements keep their input order.
    pub fn sort_desc(self) -> Flow<std::vec::IntoIter<I::Item>>
    where
        I::Item: Ord,
    {
        let mut items: Vec<I::Item> = self.iter.collect();
        items.sort_by(|a, b| b.cmp(a));
        Flow {
            iter: items.into_iter(),
        }
    }

    /// Sort ascending by a key function. Stable.
    ///
    /// # Example
    /// ```
    /// use rivulet::flow;
    ///
    /// assert_eq!(flow([3i32, -6, 1]).sort_by_key(|x| x.abs()).to_vec(), vec![1, 3, -6]);
    /// ```
    pub fn sort_by_key<K, F>(self, key: F) -> Flow<std::vec::IntoIter<I::Item>>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        let mut items: Vec<I::Item> = self.iter.collect();
        items.sort_by_key(key);
        Flow {
            iter: items.into_iter(),
        }
    }

    /// Sort descending by a key function. Stable.
    pub fn sort_by_key_desc<K, F>(self, key: F) -> Flow<std::vec::IntoIter<I::Item>>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        let mut key = key;
        let mut items: Vec<I::Item> = self.iter.collect();
        items.sort_by(|a, b| {
            let kb = key(b);
            let ka = key(a);
            kb.cmp(&ka)
        });
        Flow {
            iter: items.into_iter(),
        }
    }

    /// Yield a uniformly random permutation of the sequence.
    ///
    /// Fully materializes the upstream, then runs an unbiased
    /// Fisher-Yates shuffle with a fresh entropy seed.
    pub fn shuffle(self) -> Flow<std::vec::IntoIter<I::Item>> {
        self.shuffle_seeded(entropy_seed())
    }

    /// [`shuffle`](Flow::shuffle) with an explicit seed, producing the
    /// same permutation on every run.
    ///
    /// # Example
    /// ```
    /// use rivulet::flow;
    ///
    /// let a = flow(0..10).shuffle_seeded(7).to_vec();
    /// let b = flow(0..10).shuffle_seeded(7).to_vec();
    /// assert_eq!(a, b);
    /// ```
    pub fn shuffle_seeded(self, seed: u64) -> Flow<std::vec::IntoIter<I::Item>> {
        let mut items: Vec<I::Item> = self.iter.collect();
        let mut rng = SplitMix64::new(seed);
        for i in (1..items.len()).rev() {
            let j = rng.next_index(i + 1);
            items.swap(i, j);
        }
        Flow {
            iter: items.into_iter(),
        }
    }
}
