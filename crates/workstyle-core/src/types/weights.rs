//! Weight and percentage vectors over framework dimensions.
//!
//! A `WeightVector<F>` is a dense, fixed-key numeric mapping with one slot
//! per dimension of framework `F`. A `Percentages<F>` is the normalized
//! integer distribution produced from one; its values always sum to 100.
//!
//! Both serialize as a dimension-label -> value map. Deserialization
//! enforces key exhaustiveness: every dimension of the framework must be
//! present, while unknown keys are logged and skipped rather than rejected.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CoreError, CoreResult};
use crate::types::framework::Framework;

/// Values below this magnitude are treated as zero signal.
pub(crate) const ZERO_EPSILON: f64 = 1e-9;

/// A fixed-key numeric mapping over the dimensions of framework `F`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector<F: Framework> {
    values: Vec<f64>,
    _framework: PhantomData<F>,
}

impl<F: Framework> WeightVector<F> {
    /// All-zero vector.
    pub fn zero() -> Self {
        Self {
            values: vec![0.0; F::count()],
            _framework: PhantomData,
        }
    }

    /// Vector with every dimension set to `value`.
    pub fn splat(value: f64) -> Self {
        Self {
            values: vec![value; F::count()],
            _framework: PhantomData,
        }
    }

    /// Build from a full value slice in dimension declaration order.
    pub fn from_values(values: Vec<f64>) -> CoreResult<Self> {
        if values.len() != F::count() {
            return Err(CoreError::ValidationError {
                field: "values".into(),
                message: format!(
                    "{} expects {} values, got {}",
                    F::NAME,
                    F::count(),
                    values.len()
                ),
            });
        }
        Ok(Self {
            values,
            _framework: PhantomData,
        })
    }

    /// Build from sparse (dimension, value) pairs; unnamed dimensions are 0.
    pub fn from_pairs(pairs: &[(F, f64)]) -> Self {
        let mut out = Self::zero();
        for &(dim, value) in pairs {
            out.set(dim, value);
        }
        out
    }

    pub fn get(&self, dim: F) -> f64 {
        self.values[dim.index()]
    }

    pub fn set(&mut self, dim: F, value: f64) {
        self.values[dim.index()] = value;
    }

    /// Add `delta` to one dimension.
    pub fn add(&mut self, dim: F, delta: f64) {
        self.values[dim.index()] += delta;
    }

    /// Add `other * factor` element-wise.
    pub fn add_scaled(&mut self, other: &Self, factor: f64) {
        for (slot, value) in self.values.iter_mut().zip(other.values.iter()) {
            *slot += value * factor;
        }
    }

    /// Element-wise `self = self * scale + offset`.
    pub fn rescale(&mut self, scale: &Self, offset: &Self) {
        for i in 0..self.values.len() {
            self.values[i] = self.values[i] * scale.values[i] + offset.values[i];
        }
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// True when every component is negligible.
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| v.abs() < ZERO_EPSILON)
    }

    /// Copy with every component rounded to 2 decimal places.
    pub fn rounded2(&self) -> Self {
        Self {
            values: self
                .values
                .iter()
                .map(|v| (v * 100.0).round() / 100.0)
                .collect(),
            _framework: PhantomData,
        }
    }

    /// Iterate (dimension, value) in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (F, f64)> + '_ {
        F::DIMENSIONS
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// Raw values in dimension declaration order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl<F: Framework> Default for WeightVector<F> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<F: Framework> Serialize for WeightVector<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (dim, value) in self.iter() {
            map.serialize_entry(dim.label(), &value)?;
        }
        map.end()
    }
}

impl<'de, F: Framework> Deserialize<'de> for WeightVector<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WeightVisitor<F>(PhantomData<F>);

        impl<'de, F: Framework> Visitor<'de> for WeightVisitor<F> {
            type Value = WeightVector<F>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a map of {} dimension weights", F::NAME)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut out = WeightVector::<F>::zero();
                let mut seen = vec![false; F::count()];
                while let Some((key, value)) = access.next_entry::<String, f64>()? {
                    match F::from_label(&key) {
                        Some(dim) => {
                            out.set(dim, value);
                            seen[dim.index()] = true;
                        }
                        None => {
                            tracing::warn!(
                                framework = F::NAME,
                                key = %key,
                                "ignoring unknown dimension key in weight map"
                            );
                        }
                    }
                }
                if let Some(missing) = F::DIMENSIONS.iter().find(|dim| !seen[dim.index()]) {
                    return Err(de::Error::custom(CoreError::MissingDimension {
                        framework: F::NAME,
                        label: missing.label().to_string(),
                    }));
                }
                Ok(out)
            }
        }

        deserializer.deserialize_map(WeightVisitor(PhantomData))
    }
}

/// An integer percentage distribution over the dimensions of `F`.
///
/// Invariant: values always sum to exactly 100. Instances are only produced
/// by the engine's normalizer or by validated deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Percentages<F: Framework> {
    values: Vec<u8>,
    _framework: PhantomData<F>,
}

impl<F: Framework> Percentages<F> {
    /// Build from a full value slice in declaration order.
    ///
    /// Fails unless the slice covers every dimension and sums to 100.
    pub fn new(values: Vec<u8>) -> CoreResult<Self> {
        if values.len() != F::count() {
            return Err(CoreError::ValidationError {
                field: "percentages".into(),
                message: format!(
                    "{} expects {} values, got {}",
                    F::NAME,
                    F::count(),
                    values.len()
                ),
            });
        }
        let total: u32 = values.iter().map(|&v| u32::from(v)).sum();
        if total != 100 {
            return Err(CoreError::ValidationError {
                field: "percentages".into(),
                message: format!("{} distribution sums to {total}, expected 100", F::NAME),
            });
        }
        Ok(Self {
            values,
            _framework: PhantomData,
        })
    }

    pub fn get(&self, dim: F) -> u8 {
        self.values[dim.index()]
    }

    /// The highest-percentage dimension.
    ///
    /// Exact ties resolve to the earliest dimension in declaration order,
    /// which is the framework's fixed tie-break priority.
    pub fn dominant(&self) -> F {
        let mut best = F::DIMENSIONS[0];
        for &dim in F::DIMENSIONS {
            if self.get(dim) > self.get(best) {
                best = dim;
            }
        }
        best
    }

    /// The highest-percentage dimension other than `dominant()`, using the
    /// same tie-break.
    pub fn runner_up(&self) -> F {
        let dominant = self.dominant();
        let mut best: Option<F> = None;
        for &dim in F::DIMENSIONS {
            if dim == dominant {
                continue;
            }
            match best {
                Some(current) if self.get(dim) <= self.get(current) => {}
                _ => best = Some(dim),
            }
        }
        // Every framework has at least 4 dimensions.
        best.unwrap_or(dominant)
    }

    /// Iterate (dimension, percent) in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (F, u8)> + '_ {
        F::DIMENSIONS
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }
}

impl<F: Framework> Serialize for Percentages<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (dim, value) in self.iter() {
            map.serialize_entry(dim.label(), &value)?;
        }
        map.end()
    }
}

impl<'de, F: Framework> Deserialize<'de> for Percentages<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PercentVisitor<F>(PhantomData<F>);

        impl<'de, F: Framework> Visitor<'de> for PercentVisitor<F> {
            type Value = Percentages<F>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a map of {} dimension percentages", F::NAME)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut values = vec![0u8; F::count()];
                let mut seen = vec![false; F::count()];
                while let Some((key, value)) = access.next_entry::<String, u8>()? {
                    match F::from_label(&key) {
                        Some(dim) => {
                            values[dim.index()] = value;
                            seen[dim.index()] = true;
                        }
                        None => {
                            tracing::warn!(
                                framework = F::NAME,
                                key = %key,
                                "ignoring unknown dimension key in percentage map"
                            );
                        }
                    }
                }
                if let Some(missing) = F::DIMENSIONS.iter().find(|dim| !seen[dim.index()]) {
                    return Err(de::Error::custom(CoreError::MissingDimension {
                        framework: F::NAME,
                        label: missing.label().to_string(),
                    }));
                }
                Percentages::new(values).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(PercentVisitor(PhantomData))
    }
}
