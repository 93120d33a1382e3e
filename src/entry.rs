use crate::{
    interval::{Boundary, HalfOpen, Interval},
    map::IntervalMap,
};

/// A view into a single interval slot of an [`IntervalMap`], which is either
/// vacant or occupied.
///
/// Obtained from [`IntervalMap::entry()`].
#[derive(Debug)]
pub enum Entry<'a, T, V, B = HalfOpen> {
    /// No value is stored for the interval.
    Vacant(VacantEntry<'a, T, V, B>),
    /// A value is stored for the interval.
    Occupied(OccupiedEntry<'a, T, V, B>),
}

/// A vacant [`Entry`].
#[derive(Debug)]
pub struct VacantEntry<'a, T, V, B = HalfOpen> {
    interval: Interval<T, B>,
    map: &'a mut IntervalMap<T, V, B>,
}

/// An occupied [`Entry`].
#[derive(Debug)]
pub struct OccupiedEntry<'a, T, V, B = HalfOpen> {
    interval: Interval<T, B>,
    map: &'a mut IntervalMap<T, V, B>,
}

/// Unwrap a lookup the entry state proves must succeed.
fn present<V, E>(v: Result<V, E>) -> V {
    match v {
        Ok(v) => v,
        Err(_) => unreachable!("entry interval missing from map"),
    }
}

impl<'a, T, V, B> VacantEntry<'a, T, V, B>
where
    T: Ord + Clone,
    B: Boundary,
{
    /// The interval a value would be inserted for.
    pub fn interval(&self) -> &Interval<T, B> {
        &self.interval
    }

    /// Take ownership of the interval.
    pub fn into_interval(self) -> Interval<T, B> {
        self.interval
    }

    /// Store `value` for this entry's interval, returning a mutable reference
    /// to it.
    pub fn insert(self, value: V) -> &'a mut V {
        self.map.insert(self.interval.clone(), value);
        present(self.map.get_mut(&self.interval))
    }
}

impl<'a, T, V, B> OccupiedEntry<'a, T, V, B>
where
    T: Ord + Clone,
    B: Boundary,
{
    /// The interval of this entry.
    pub fn interval(&self) -> &Interval<T, B> {
        &self.interval
    }

    /// The value stored for this entry.
    pub fn get(&self) -> &V {
        present(self.map.get(&self.interval))
    }

    /// A mutable reference to the value stored for this entry.
    pub fn get_mut(&mut self) -> &mut V {
        present(self.map.get_mut(&self.interval))
    }

    /// Convert the entry into a mutable reference to its value, bound to the
    /// lifetime of the map borrow.
    pub fn into_mut(self) -> &'a mut V {
        present(self.map.get_mut(&self.interval))
    }

    /// Replace the stored value with `value`, returning the old value.
    pub fn insert(&mut self, value: V) -> V {
        std::mem::replace(self.get_mut(), value)
    }

    /// Remove the entry from the map, returning its value.
    pub fn remove(self) -> V {
        present(self.map.remove(&self.interval))
    }
}

impl<'a, T, V, B> Entry<'a, T, V, B>
where
    T: Ord + Clone,
    B: Boundary,
{
    pub(crate) fn new(interval: Interval<T, B>, map: &'a mut IntervalMap<T, V, B>) -> Self {
        if map.has_interval(&interval) {
            Self::Occupied(OccupiedEntry { interval, map })
        } else {
            Self::Vacant(VacantEntry { interval, map })
        }
    }

    /// The interval of this entry.
    ///
    /// ```
    /// use interval_avl::{Interval, IntervalMap};
    ///
    /// let mut m = IntervalMap::<u32, &str>::new();
    /// assert_eq!(m.entry(Interval::new(0, 10)).interval(), &Interval::new(0, 10));
    /// ```
    pub fn interval(&self) -> &Interval<T, B> {
        match self {
            Self::Vacant(v) => v.interval(),
            Self::Occupied(v) => v.interval(),
        }
    }

    /// Insert `default` if the entry is vacant, and return a mutable reference
    /// to the stored value.
    ///
    /// ```
    /// use interval_avl::{Interval, IntervalMap};
    ///
    /// let mut m = IntervalMap::<u32, u32>::new();
    ///
    /// m.entry(Interval::new(0, 10)).or_insert(42);
    /// *m.entry(Interval::new(0, 10)).or_insert(100) += 1;
    ///
    /// assert_eq!(m.get(&Interval::new(0, 10)), Ok(&43));
    /// ```
    pub fn or_insert(self, default: V) -> &'a mut V {
        self.or_insert_with(|| default)
    }

    /// Insert the result of `default` if the entry is vacant, and return a
    /// mutable reference to the stored value.
    ///
    /// `default` is not called for an occupied entry.
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        self.or_insert_with_key(|_| default())
    }

    /// Insert the result of `default`, given the entry's interval, if the
    /// entry is vacant.
    ///
    /// ```
    /// use interval_avl::{Interval, IntervalMap};
    ///
    /// let mut m = IntervalMap::<u32, u32>::new();
    ///
    /// m.entry(Interval::new(4, 10)).or_insert_with_key(|i| i.high() - i.low());
    /// assert_eq!(m.get(&Interval::new(4, 10)), Ok(&6));
    /// ```
    pub fn or_insert_with_key<F: FnOnce(&Interval<T, B>) -> V>(self, default: F) -> &'a mut V {
        match self {
            Self::Occupied(v) => v.into_mut(),
            Self::Vacant(v) => {
                let value = default(v.interval());
                v.insert(value)
            }
        }
    }

    /// Apply `f` to the stored value if the entry is occupied.
    ///
    /// ```
    /// use interval_avl::{Interval, IntervalMap};
    ///
    /// let mut m = IntervalMap::<u32, u32>::new();
    /// let i = Interval::new(0, 10);
    ///
    /// m.entry(i).and_modify(|v| *v += 1).or_insert(42);
    /// m.entry(i).and_modify(|v| *v += 1).or_insert(42);
    ///
    /// assert_eq!(m.get(&i), Ok(&43));
    /// ```
    pub fn and_modify<F: FnOnce(&mut V)>(mut self, f: F) -> Self {
        if let Self::Occupied(v) = &mut self {
            f(v.get_mut());
        }
        self
    }

    /// Store `value` for this entry's interval, replacing any existing value,
    /// and return the now occupied entry.
    pub fn insert_entry(self, value: V) -> OccupiedEntry<'a, T, V, B> {
        match self {
            Self::Occupied(mut v) => {
                v.insert(value);
                v
            }
            Self::Vacant(VacantEntry { interval, map }) => {
                map.insert(interval.clone(), value);
                OccupiedEntry { interval, map }
            }
        }
    }
}

impl<'a, T, V, B> Entry<'a, T, V, B>
where
    T: Ord + Clone,
    B: Boundary,
    V: Default,
{
    /// Insert [`V::default()`](Default::default) if the entry is vacant, and
    /// return a mutable reference to the stored value.
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(V::default)
    }
}
