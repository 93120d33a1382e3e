//! [`serde`] support, enabled by the `serde` feature.
//!
//! An [`Interval`] is represented as a `{ low, high }` struct and is
//! normalised when deserialised. Trees and maps are represented as sequences
//! in ascending interval order, and are rebuilt by insertion.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    interval::{Boundary, Interval},
    map::IntervalMap,
    tree::IntervalTree,
};

#[derive(Serialize)]
struct Bounds<'a, T> {
    low: &'a T,
    high: &'a T,
}

#[derive(Deserialize)]
#[serde(rename = "Bounds")]
struct OwnedBounds<T> {
    low: T,
    high: T,
}

impl<T, B> Serialize for Interval<T, B>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Bounds {
            low: self.low(),
            high: self.high(),
        }
        .serialize(serializer)
    }
}

impl<'de, T, B> Deserialize<'de> for Interval<T, B>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let OwnedBounds { low, high } = OwnedBounds::deserialize(deserializer)?;
        Ok(Self::new(low, high))
    }
}

impl<T, B> Serialize for IntervalTree<T, B>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self)
    }
}

impl<'de, T, B> Deserialize<'de> for IntervalTree<T, B>
where
    T: Deserialize<'de> + Ord + Clone,
    B: Boundary,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Interval<T, B>>::deserialize(deserializer).map(Self::from)
    }
}

impl<T, V, B> Serialize for IntervalMap<T, V, B>
where
    T: Serialize,
    V: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self)
    }
}

impl<'de, T, V, B> Deserialize<'de> for IntervalMap<T, V, B>
where
    T: Deserialize<'de> + Ord + Clone,
    V: Deserialize<'de>,
    B: Boundary,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<(Interval<T, B>, V)>::deserialize(deserializer).map(Self::from)
    }
}
