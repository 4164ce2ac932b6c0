//! Small helpers shared by day solutions.

use std::hash::Hash;
use std::ops::RangeInclusive;

use itertools::{Itertools, Product};
use rustc_hash::FxHashMap;

use crate::error::DayError;

/// Caches `f` by argument. Results are cloned out of the cache.
pub fn memoize<A, R, F>(mut f: F) -> impl FnMut(A) -> R
where
    A: Hash + Eq + Clone,
    R: Clone,
    F: FnMut(A) -> R,
{
    let mut cache: FxHashMap<A, R> = FxHashMap::default();
    move |arg: A| {
        if let Some(hit) = cache.get(&arg) {
            return hit.clone();
        }
        let result = f(arg.clone());
        cache.insert(arg, result.clone());
        result
    }
}

/// Like [`memoize`], for functions that recurse: `f` receives a handle that
/// routes recursive calls back through the cache.
///
/// ```
/// use aoc2025::util::memoize_rec;
///
/// let mut fib = memoize_rec(|fib: &mut dyn FnMut(u64) -> u64, n: u64| {
///     if n < 2 { n } else { fib(n - 1) + fib(n - 2) }
/// });
/// assert_eq!(fib(90), 2_880_067_194_370_816_120);
/// ```
pub fn memoize_rec<A, R, F>(f: F) -> impl FnMut(A) -> R
where
    A: Hash + Eq + Clone,
    R: Clone,
    F: Fn(&mut dyn FnMut(A) -> R, A) -> R,
{
    fn call<A, R, F>(f: &F, cache: &mut FxHashMap<A, R>, arg: A) -> R
    where
        A: Hash + Eq + Clone,
        R: Clone,
        F: Fn(&mut dyn FnMut(A) -> R, A) -> R,
    {
        if let Some(hit) = cache.get(&arg) {
            return hit.clone();
        }
        let result = f(&mut |next: A| call(f, cache, next), arg.clone());
        cache.insert(arg, result.clone());
        result
    }

    let mut cache = FxHashMap::default();
    move |arg: A| call(&f, &mut cache, arg)
}

pub trait RangeExt: Sized {
    /// The overlap of two ranges, if any.
    fn intersection(&self, other: &Self) -> Option<Self>;
}

impl<T: Ord + Copy> RangeExt for RangeInclusive<T> {
    fn intersection(&self, other: &Self) -> Option<Self> {
        let start = *self.start().max(other.start());
        let end = *self.end().min(other.end());
        (start <= end).then(|| start..=end)
    }
}

pub trait OptionExt<T> {
    /// Turns a missing value into [`DayError::Missing`].
    fn required(self, what: &'static str) -> Result<T, DayError>;
}

impl<T> OptionExt<T> for Option<T> {
    fn required(self, what: &'static str) -> Result<T, DayError> {
        self.ok_or(DayError::Missing(what))
    }
}

/// `(row, column)` for every cell of a possibly ragged grid.
pub fn grid_indices<R, T>(rows: &[R]) -> impl Iterator<Item = (usize, usize)> + '_
where
    R: AsRef<[T]>,
{
    rows.iter()
        .enumerate()
        .flat_map(|(y, row)| (0..row.as_ref().len()).map(move |x| (y, x)))
}

/// Every pair `(a, b)` with `a` from `lhs` and `b` from `rhs`.
pub fn cartesian<L, R>(lhs: L, rhs: R) -> Product<L::IntoIter, R::IntoIter>
where
    L: IntoIterator,
    R: IntoIterator,
    R::IntoIter: Clone,
    L::Item: Clone,
{
    lhs.into_iter().cartesian_product(rhs)
}
