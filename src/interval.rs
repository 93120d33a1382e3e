use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display},
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Add, Range, RangeInclusive, Sub},
};

mod sealed {
    pub trait Sealed {}
}

/// The boundary semantics of an [`Interval`], selected at the type level.
///
/// This trait is sealed and implemented only by [`Closed`] and [`HalfOpen`].
pub trait Boundary: sealed::Sealed + Debug + Clone + Copy + Default + 'static {
    /// True when the upper bound is part of the interval.
    const INCLUSIVE: bool;

    /// Returns true when `a` lies before the upper bound `b` under these
    /// boundary semantics (`a <= b` when inclusive, `a < b` otherwise).
    fn below<T>(a: &T, b: &T) -> bool
    where
        T: Ord + ?Sized;
}

/// Closed intervals `[low, high]` that include both endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Closed;

impl sealed::Sealed for Closed {}
impl Boundary for Closed {
    const INCLUSIVE: bool = true;

    #[inline]
    fn below<T>(a: &T, b: &T) -> bool
    where
        T: Ord + ?Sized,
    {
        a <= b
    }
}

/// Half-open intervals `[low, high)` that exclude the upper endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HalfOpen;

impl sealed::Sealed for HalfOpen {}
impl Boundary for HalfOpen {
    const INCLUSIVE: bool = false;

    #[inline]
    fn below<T>(a: &T, b: &T) -> bool
    where
        T: Ord + ?Sized,
    {
        a < b
    }
}

/// An immutable, totally-ordered interval of `T`.
///
/// The bounds are normalised at construction so that `low <= high` always
/// holds. An [`Interval`] is ordered by the lower bound, and tie-broken with
/// the upper bound.
///
/// The boundary mode `B` only affects point containment, overlap and
/// [`Interval::size()`]; equality and ordering depend on the bounds alone.
#[derive(Clone, Copy)]
pub struct Interval<T, B = HalfOpen> {
    low: T,
    high: T,
    boundary: PhantomData<B>,
}

impl<T, B> Interval<T, B>
where
    T: Ord,
{
    /// Construct a new [`Interval`] spanning `a` and `b`, swapping the bounds
    /// if `b < a`.
    pub fn new(a: T, b: T) -> Self {
        let (low, high) = if b < a { (b, a) } else { (a, b) };
        Self {
            low,
            high,
            boundary: PhantomData,
        }
    }
}

impl<T, B> Interval<T, B> {
    /// The lower bound.
    pub fn low(&self) -> &T {
        &self.low
    }

    /// The upper bound.
    pub fn high(&self) -> &T {
        &self.high
    }

    /// Explode this [`Interval`] into the `(low, high)` bounds it contains.
    pub fn into_inner(self) -> (T, T) {
        (self.low, self.high)
    }
}

impl<T, B> Interval<T, B>
where
    T: Ord,
    B: Boundary,
{
    /// Returns true if `point` falls within this interval.
    pub fn contains_point(&self, point: &T) -> bool {
        self.low <= *point && B::below(point, &self.high)
    }

    /// Returns true if `other` is a subset of this interval.
    ///
    /// This is a comparison of bounds and does not depend on `B`.
    pub fn contains(&self, other: &Self) -> bool {
        self.contains_range(&other.low, &other.high)
    }

    /// Returns true if the bounds `[low, high]` are a subset of this interval.
    pub fn contains_range(&self, low: &T, high: &T) -> bool {
        *low >= self.low && *high <= self.high
    }

    /// Returns true if this interval is a subset of `other`.
    pub fn contained_by(&self, other: &Self) -> bool {
        other.contains(self)
    }

    /// Returns true if this interval and `other` share at least one point.
    ///
    /// For [`HalfOpen`] intervals, touching bounds (`self.high == other.low`)
    /// do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.overlaps_range(&other.low, &other.high)
    }

    /// Returns true if this interval overlaps the bounds `low` and `high`.
    pub fn overlaps_range(&self, low: &T, high: &T) -> bool {
        B::below(&self.low, high) && B::below(low, &self.high)
    }
}

impl<T, B> Interval<T, B>
where
    T: Ord + Clone,
{
    /// Return the smallest [`Interval`] covering both `self` and `other`.
    pub fn join(&self, other: &Self) -> Self {
        self.join_range(other.low.clone(), other.high.clone())
    }

    /// Return the smallest [`Interval`] covering both `self` and the bounds
    /// `low` and `high`.
    pub fn join_range(&self, low: T, high: T) -> Self {
        let other = Self::new(low, high);
        Self {
            low: self.low.clone().min(other.low),
            high: self.high.clone().max(other.high),
            boundary: PhantomData,
        }
    }
}

impl<T, B> Interval<T, B>
where
    T: Clone + Sub<Output = T> + Add<Output = T> + From<u8>,
    B: Boundary,
{
    /// The number of discrete points within this interval.
    ///
    /// A [`Closed`] interval counts both bounds.
    pub fn size(&self) -> T {
        let span = self.high.clone() - self.low.clone();
        if B::INCLUSIVE {
            span + T::from(1)
        } else {
            span
        }
    }
}

impl<T, B> PartialEq for Interval<T, B>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.low == other.low && self.high == other.high
    }
}

impl<T, B> Eq for Interval<T, B> where T: Eq {}

impl<T, B> PartialOrd for Interval<T, B>
where
    T: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, B> Ord for Interval<T, B>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        // To provide ordering of an interval, the lower bound is used as the
        // primary ordering value, falling back to the upper bound when the
        // lower bounds are equal.
        match self.low.cmp(&other.low) {
            Ordering::Equal => self.high.cmp(&other.high),
            v => v,
        }
    }
}

impl<T, B> Hash for Interval<T, B>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.low.hash(state);
        self.high.hash(state);
    }
}

impl<T, B> Debug for Interval<T, B>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interval")
            .field("low", &self.low)
            .field("high", &self.high)
            .finish()
    }
}

impl<T, B> Display for Interval<T, B>
where
    T: Display,
    B: Boundary,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = if B::INCLUSIVE { ']' } else { ')' };
        write!(f, "[{}, {}{}", self.low, self.high, close)
    }
}

impl<T, B> From<(T, T)> for Interval<T, B>
where
    T: Ord,
{
    fn from((a, b): (T, T)) -> Self {
        Self::new(a, b)
    }
}

impl<T> From<Range<T>> for Interval<T, HalfOpen>
where
    T: Ord,
{
    fn from(value: Range<T>) -> Self {
        Self::new(value.start, value.end)
    }
}

impl<T> From<RangeInclusive<T>> for Interval<T, Closed>
where
    T: Ord,
{
    fn from(value: RangeInclusive<T>) -> Self {
        let (a, b) = value.into_inner();
        Self::new(a, b)
    }
}
