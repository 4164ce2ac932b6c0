//! Randomly indexable binary heap ordered by a caller-supplied predicate.
//!
//! Elements live in a dense `Vec` laid out as an implicit binary tree: the
//! children of `i` are `2i + 1` and `2i + 2`, its parent is `(i - 1) / 2`.
//!
//! Two orderings coexist:
//!
//! - **bulk order**: [`PriorityQueue::from_vec`] and
//!   [`PriorityQueue::set_ordering`] fully sort the storage under the predicate.
//! - **heap order**: every incremental mutation ([`insert`], [`remove_at`],
//!   [`set`], range operations) only restores the heap property, i.e. no child
//!   ever precedes its parent.
//!
//! [`insert`]: PriorityQueue::insert
//! [`remove_at`]: PriorityQueue::remove_at
//! [`set`]: PriorityQueue::set

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, Range};
use std::sync::Arc;

/// `precedes(a, b)` is `true` when `a` has strictly higher priority than `b`.
///
/// The predicate must be a strict weak order, like `<` and unlike `<=`: never
/// `precedes(a, a)`, and elements that precede neither way are ties. Bulk
/// sorting turns it into an [`Ordering`], and std's sort may panic on a
/// comparator that is not a total order.
pub type Precedes<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// A binary heap that also behaves as a plain indexable sequence.
///
/// # Example
///
/// ```
/// use aoc2025::heap::PriorityQueue;
///
/// let mut queue = PriorityQueue::new(|a: &u32, b: &u32| a < b);
/// queue.insert(10);
/// queue.insert(1);
/// queue.insert(5);
///
/// assert_eq!(queue.peek(), Some(&1));
/// assert_eq!(queue.remove_at(0), Some(1));
/// assert_eq!(queue.remove_at(0), Some(5));
/// assert_eq!(queue.remove_at(0), Some(10));
/// assert_eq!(queue.remove_at(0), None);
/// ```
#[derive(Clone)]
pub struct PriorityQueue<T> {
    elements: Vec<T>,
    precedes: Option<Precedes<T>>,
}

/// A queue without an ordering never reorders: every comparison is `false`.
impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            precedes: None,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("elements", &self.elements)
            .field("ordered", &self.precedes.is_some())
            .finish()
    }
}

impl<T: Ord + 'static> PriorityQueue<T> {
    /// Smallest element first.
    pub fn min() -> Self {
        Self::new(|a: &T, b: &T| a < b)
    }

    /// Largest element first.
    pub fn max() -> Self {
        Self::new(|a: &T, b: &T| a > b)
    }
}

impl<T> PriorityQueue<T> {
    /// Creates an empty queue ordered by `precedes`.
    pub fn new<F>(precedes: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self::with_capacity(0, precedes)
    }

    /// Creates an empty queue with room for `capacity` elements.
    pub fn with_capacity<F>(capacity: usize, precedes: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self {
            elements: Vec::with_capacity(capacity),
            precedes: Some(Arc::new(precedes)),
        }
    }

    /// Takes ownership of `elements` and sorts them under `precedes`.
    ///
    /// O(n log n). A sorted sequence trivially satisfies the heap property.
    pub fn from_vec<F>(elements: Vec<T>, precedes: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        let mut queue = Self {
            elements,
            precedes: Some(Arc::new(precedes)),
        };
        queue.sort_all();
        queue
    }

    /// Collects `iter` and sorts it under `precedes`.
    pub fn from_iter_by<I, F>(iter: I, precedes: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self::from_vec(iter.into_iter().collect(), precedes)
    }

    /// Replaces the ordering and re-sorts every element under it.
    ///
    /// This is the bulk path: afterwards the storage is fully sorted, which is
    /// stronger than the heap property maintained by incremental mutation.
    pub fn set_ordering<F>(&mut self, precedes: F)
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.precedes = Some(Arc::new(precedes));
        self.sort_all();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.elements.reserve(additional);
    }

    /// Returns the highest-priority element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the element at heap position `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the elements at heap positions `range`, or `None` if the range
    /// is out of bounds.
    pub fn get_range(&self, range: Range<usize>) -> Option<&[T]> {
        self.elements.get(range)
    }

    /// The backing storage in heap order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Appends `element` and swims it towards the root. O(log n).
    pub fn insert(&mut self, element: T) {
        self.elements.push(element);
        self.swim(self.elements.len() - 1);
    }

    /// Removes and returns the highest-priority element.
    pub fn pop(&mut self) -> Option<T> {
        self.remove_at(0)
    }

    /// Removes the element at heap position `index`.
    ///
    /// The last element takes the vacated slot and is sunk, then swum, since it
    /// may belong either below or above its new position. Returns `None`
    /// without touching the queue if `index` is out of bounds. O(log n).
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.elements.len() {
            return None;
        }

        let removed = self.elements.swap_remove(index);
        if index < self.elements.len() {
            let index = self.sink(index);
            self.swim(index);
        }
        Some(removed)
    }

    /// Replaces the element at heap position `index`, returning the old one.
    ///
    /// The new value swims if it precedes its parent and sinks otherwise; the
    /// direction is decided against the current neighbours, not against the
    /// old occupant. Returns `None` without touching the queue if `index` is
    /// out of bounds (the new value is dropped).
    pub fn set(&mut self, index: usize, element: T) -> Option<T> {
        let slot = self.elements.get_mut(index)?;
        let old = std::mem::replace(slot, element);

        if index > 0 && self.precedes_at(index, parent(index)) {
            self.swim(index);
        } else {
            self.sink(index);
        }
        Some(old)
    }

    /// Removes every heap position in `range`, one [`remove_at`] at a time.
    ///
    /// Positions are visited from the top of the range down so each one is
    /// still in bounds when it is removed; exactly `range.len()` elements are
    /// removed. Because each removal refills its slot from the end of the heap,
    /// the removed values are not necessarily the ones that occupied `range`
    /// beforehand. An out-of-bounds range is a no-op. O(Δ log n).
    ///
    /// [`remove_at`]: PriorityQueue::remove_at
    pub fn remove_range(&mut self, range: Range<usize>) -> Vec<T> {
        if range.start > range.end || range.end > self.elements.len() {
            return Vec::new();
        }
        range.rev().filter_map(|index| self.remove_at(index)).collect()
    }

    /// Inserts each element in turn. O(m log n), not a bulk heapify.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        let elements = elements.into_iter();
        self.elements.reserve(elements.size_hint().0);
        for element in elements {
            self.insert(element);
        }
    }

    /// [`remove_range`] followed by [`insert_all`]; returns the removed values.
    ///
    /// [`remove_range`]: PriorityQueue::remove_range
    /// [`insert_all`]: PriorityQueue::insert_all
    pub fn replace_range<I: IntoIterator<Item = T>>(
        &mut self,
        range: Range<usize>,
        elements: I,
    ) -> Vec<T> {
        let removed = self.remove_range(range);
        self.insert_all(elements);
        removed
    }

    /// Returns `true` if no child precedes its parent.
    pub fn is_heap(&self) -> bool {
        (1..self.elements.len()).all(|child| !self.precedes_at(child, parent(child)))
    }

    fn sort_all(&mut self) {
        let Some(precedes) = &self.precedes else {
            return;
        };
        self.elements.sort_by(|a, b| {
            if precedes(a, b) {
                Ordering::Less
            } else if precedes(b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
    }

    #[inline]
    fn precedes_at(&self, lhs: usize, rhs: usize) -> bool {
        self.precedes
            .as_ref()
            .is_some_and(|precedes| precedes(&self.elements[lhs], &self.elements[rhs]))
    }

    /// Moves the element at `pos` up while it precedes its parent.
    fn swim(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = parent(pos);
            if !self.precedes_at(pos, parent) {
                break;
            }
            self.elements.swap(pos, parent);
            pos = parent;
        }
        pos
    }

    /// Moves the element at `pos` down while one of its children precedes it.
    ///
    /// Swaps with the higher-priority child, the left one when they tie.
    fn sink(&mut self, mut pos: usize) -> usize {
        let len = self.elements.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let child = if right < len && self.precedes_at(right, left) {
                right
            } else {
                left
            };

            if !self.precedes_at(child, pos) {
                break;
            }
            self.elements.swap(pos, child);
            pos = child;
        }
        pos
    }
}

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

impl<T> Index<usize> for PriorityQueue<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is out of bounds, like slice indexing. Use
    /// [`PriorityQueue::get`] for the non-panicking form.
    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a, T> IntoIterator for &'a PriorityQueue<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> IntoIterator for PriorityQueue<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Yields elements in heap order, not priority order.
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T>(queue: &mut PriorityQueue<T>) -> Vec<T> {
        std::iter::from_fn(|| queue.pop()).collect()
    }

    #[test]
    fn new_is_empty() {
        let queue: PriorityQueue<u32> = PriorityQueue::min();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert!(queue.peek().is_none());
    }

    #[test]
    fn min_heap_order() {
        let mut queue = PriorityQueue::min();
        for priority in [10, 1, 5, 3, 8, 1] {
            queue.insert(priority);
            assert!(queue.is_heap());
        }

        assert_eq!(drain(&mut queue), vec![1, 1, 3, 5, 8, 10]);
    }

    #[test]
    fn max_heap_order() {
        let mut queue = PriorityQueue::max();
        queue.extend([4, 9, 2, 7]);

        assert_eq!(queue.peek(), Some(&9));
        assert_eq!(drain(&mut queue), vec![9, 7, 4, 2]);
    }

    #[test]
    fn remove_at_out_of_bounds_is_noop() {
        let mut queue = PriorityQueue::min();
        queue.insert_all([3, 1, 2]);
        let before = queue.as_slice().to_vec();

        assert_eq!(queue.remove_at(5), None);
        assert_eq!(queue.remove_at(3), None);
        assert_eq!(queue.as_slice(), before.as_slice());
    }

    #[test]
    fn remove_at_last_position() {
        let mut queue = PriorityQueue::from_vec(vec![1, 2, 3], |a: &i32, b: &i32| a < b);

        assert_eq!(queue.remove_at(2), Some(3));
        assert_eq!(queue.as_slice(), &[1, 2]);
    }

    #[test]
    fn remove_at_interior_restores_heap() {
        // 1 / (20, 2) / (21, 22, 3, 4): the last element (4) lands under 20
        // and has to swim above it.
        let mut queue = PriorityQueue::min();
        queue.insert_all([1, 20, 2, 21, 22, 3, 4]);
        assert_eq!(queue.as_slice(), &[1, 20, 2, 21, 22, 3, 4]);

        assert_eq!(queue.remove_at(3), Some(21));
        assert!(queue.is_heap());
        assert_eq!(queue.as_slice(), &[1, 4, 2, 20, 22, 3]);
    }

    #[test]
    fn set_sinks_lower_priority() {
        let mut queue = PriorityQueue::min();
        queue.insert_all([1, 2, 3, 4, 5]);

        assert_eq!(queue.set(0, 10), Some(1));
        assert!(queue.is_heap());
        assert_eq!(queue.peek(), Some(&2));
    }

    #[test]
    fn set_swims_higher_priority() {
        let mut queue = PriorityQueue::min();
        queue.insert_all([1, 2, 3, 4, 5]);

        assert_eq!(queue.set(4, 0), Some(5));
        assert!(queue.is_heap());
        assert_eq!(queue.peek(), Some(&0));
    }

    #[test]
    fn set_out_of_bounds_is_noop() {
        let mut queue = PriorityQueue::min();
        queue.insert_all([1, 2]);

        assert_eq!(queue.set(2, 0), None);
        assert_eq!(queue.as_slice(), &[1, 2]);
    }

    #[test]
    fn sink_prefers_higher_priority_child() {
        let mut queue = PriorityQueue::min();
        queue.insert_all([0, 5, 2]);

        queue.set(0, 9);
        assert_eq!(queue.as_slice(), &[2, 5, 9]);
    }

    #[test]
    fn from_vec_is_fully_sorted() {
        let queue = PriorityQueue::from_vec(vec![5, 3, 9, 1, 7], |a: &i32, b: &i32| a < b);
        assert_eq!(queue.as_slice(), &[1, 3, 5, 7, 9]);
    }

    #[test]
    fn bulk_sort_keeps_ties_in_input_order() {
        let queue = PriorityQueue::from_vec(
            vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')],
            |a: &(u8, char), b: &(u8, char)| a.0 < b.0,
        );
        assert_eq!(queue.as_slice(), &[(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn set_ordering_resorts() {
        let mut queue = PriorityQueue::min();
        queue.insert_all([4, 1, 3, 2]);

        queue.set_ordering(|a: &i32, b: &i32| a > b);
        assert_eq!(queue.as_slice(), &[4, 3, 2, 1]);

        queue.insert(5);
        assert_eq!(queue.peek(), Some(&5));
    }

    #[test]
    fn remove_range_removes_exact_count() {
        let mut queue = PriorityQueue::min();
        queue.insert_all(0..10);

        let removed = queue.remove_range(2..6);
        assert_eq!(removed.len(), 4);
        assert_eq!(queue.len(), 6);
        assert!(queue.is_heap());

        let mut all: Vec<_> = removed.into_iter().chain(queue.into_vec()).collect();
        all.sort_unstable();
        assert_eq!(all, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn remove_range_whole_queue() {
        let mut queue = PriorityQueue::min();
        queue.insert_all([3, 1, 2, 4]);

        assert_eq!(queue.remove_range(0..4).len(), 4);
        assert!(queue.is_empty());
    }

    #[test]
    fn remove_range_out_of_bounds_is_noop() {
        let mut queue = PriorityQueue::min();
        queue.insert_all([3, 1, 2]);

        assert!(queue.remove_range(1..5).is_empty());
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn replace_range_keeps_heap() {
        let mut queue = PriorityQueue::min();
        queue.insert_all([5, 6, 7, 8]);

        let removed = queue.replace_range(0..2, [1, 9]);
        assert_eq!(removed.len(), 2);
        assert_eq!(queue.len(), 4);
        assert!(queue.is_heap());
        assert_eq!(queue.peek(), Some(&1));
    }

    #[test]
    fn get_range_slices() {
        let queue = PriorityQueue::from_vec(vec![3, 1, 2], |a: &i32, b: &i32| a < b);

        assert_eq!(queue.get_range(1..3), Some(&[2, 3][..]));
        assert_eq!(queue.get_range(2..4), None);
        assert_eq!(queue[0], 1);
        assert_eq!(queue.get(3), None);
    }

    #[test]
    fn unordered_queue_never_reorders() {
        let mut queue = PriorityQueue::default();
        queue.insert_all([3, 1, 2]);

        assert_eq!(queue.as_slice(), &[3, 1, 2]);
        assert_eq!(queue.pop(), Some(3));
    }

    #[test]
    fn clone_is_independent() {
        let mut queue = PriorityQueue::min();
        queue.insert_all([2, 1]);

        let mut copy = queue.clone();
        copy.pop();

        assert_eq!(queue.len(), 2);
        assert_eq!(copy.len(), 1);
        assert_eq!(copy.peek(), Some(&2));
    }

    #[test]
    fn struct_elements_by_key() {
        #[derive(Debug, PartialEq)]
        struct Node {
            cost: u32,
            name: &'static str,
        }

        let mut queue = PriorityQueue::new(|a: &Node, b: &Node| a.cost < b.cost);
        queue.insert(Node { cost: 7, name: "far" });
        queue.insert(Node { cost: 2, name: "near" });

        assert_eq!(queue.pop().map(|n| n.name), Some("near"));
        assert_eq!(queue.pop().map(|n| n.name), Some("far"));
    }
}
