//! Additive stat collections.
//!
//! A [`StatBag`] is the single currency of this crate: gear, reforges, pets and
//! skills each produce one, and the aggregator sums them. Absent kinds read as
//! zero and a stored zero is never kept, so emptiness and equality checks are
//! exact.

use std::collections::BTreeMap;
use std::iter::Sum;

use super::kind::StatKind;

/// Mapping from [`StatKind`] to magnitude.
///
/// # Invariants
///
/// - No entry ever holds exactly `0.0`; [`StatBag::set`] and [`StatBag::add`]
///   remove entries that land on zero.
/// - [`StatBag::combine`] and [`StatBag::scale`] return new bags and never
///   mutate their inputs.
///
/// # Example
/// ```
/// # use progression_core::{StatBag, StatKind};
/// let sword = StatBag::new().with(StatKind::Damage, 20.0).with(StatKind::Strength, 5.0);
/// let reforge = StatBag::new().with(StatKind::Strength, 3.0);
///
/// let total = sword.combine(&reforge);
/// assert_eq!(total.get(StatKind::Strength), 8.0);
/// assert_eq!(total.get(StatKind::Defense), 0.0);
/// assert!(total.scale(0.0).is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StatBag {
    entries: BTreeMap<StatKind, f64>,
}

impl StatBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the magnitude for `kind`, `0.0` when absent.
    #[inline]
    pub fn get(&self, kind: StatKind) -> f64 {
        self.entries.get(&kind).copied().unwrap_or(0.0)
    }

    /// Overwrites the magnitude for `kind`. Setting zero removes the entry.
    pub fn set(&mut self, kind: StatKind, value: f64) {
        if value == 0.0 {
            self.entries.remove(&kind);
        } else {
            self.entries.insert(kind, value);
        }
    }

    /// Adds `value` to the magnitude for `kind`.
    pub fn add(&mut self, kind: StatKind, value: f64) {
        let next = self.get(kind) + value;
        self.set(kind, next);
    }

    /// Builder-style [`StatBag::add`].
    pub fn with(mut self, kind: StatKind, value: f64) -> Self {
        self.add(kind, value);
        self
    }

    /// Adds every entry of `other` into `self`.
    pub fn merge(&mut self, other: &StatBag) {
        for (kind, value) in other.iter() {
            self.add(kind, value);
        }
    }

    /// Element-wise sum, returned as a new bag.
    pub fn combine(&self, other: &StatBag) -> StatBag {
        let mut result = self.clone();
        result.merge(other);
        result
    }

    /// Element-wise product with `factor`, returned as a new bag.
    pub fn scale(&self, factor: f64) -> StatBag {
        self.entries
            .iter()
            .map(|(kind, value)| (*kind, value * factor))
            .collect()
    }

    /// True when every kind reads as zero.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of non-zero entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates non-zero entries in [`StatKind`] order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, f64)> + '_ {
        self.entries.iter().map(|(kind, value)| (*kind, *value))
    }

    /// Compares two bags allowing `epsilon` of drift per kind.
    ///
    /// Floating-point sums are only associative up to rounding, so callers
    /// comparing bags built in different orders should use this instead of
    /// `==`.
    pub fn approx_eq(&self, other: &StatBag, epsilon: f64) -> bool {
        self.entries
            .keys()
            .chain(other.entries.keys())
            .all(|kind| (self.get(*kind) - other.get(*kind)).abs() <= epsilon)
    }

    /// Display lines for every entry (`Strength: +5`).
    pub fn describe(&self) -> Vec<String> {
        self.iter()
            .map(|(kind, value)| kind.format_line(value))
            .collect()
    }
}

impl FromIterator<(StatKind, f64)> for StatBag {
    fn from_iter<T: IntoIterator<Item = (StatKind, f64)>>(iter: T) -> Self {
        let mut bag = StatBag::new();
        bag.extend(iter);
        bag
    }
}

impl Extend<(StatKind, f64)> for StatBag {
    fn extend<T: IntoIterator<Item = (StatKind, f64)>>(&mut self, iter: T) {
        for (kind, value) in iter {
            self.add(kind, value);
        }
    }
}

impl Sum for StatBag {
    fn sum<I: Iterator<Item = StatBag>>(iter: I) -> Self {
        iter.fold(StatBag::new(), |mut acc, bag| {
            acc.merge(&bag);
            acc
        })
    }
}

impl<'a> Sum<&'a StatBag> for StatBag {
    fn sum<I: Iterator<Item = &'a StatBag>>(iter: I) -> Self {
        iter.fold(StatBag::new(), |mut acc, bag| {
            acc.merge(bag);
            acc
        })
    }
}
