//! Normalizer: raw sums to integer percentage distributions.
//!
//! Uses largest-remainder rounding so the distribution sums to exactly 100
//! under all inputs, rather than per-key `round()` which drifts. Negative
//! raw components are clamped to zero first (signed contributions can pull
//! a dimension below zero; a negative share is meaningless), and non-finite
//! components are logged and treated as zero so a malformed weight can never
//! poison the shares. A zero raw sum falls back to the uniform distribution
//! with the integer remainder assigned to the first dimension in
//! declaration order.

use workstyle_core::{Framework, Percentages, WeightVector};

/// Convert a raw weight vector into an integer percentage distribution.
pub fn normalize<F: Framework>(raw: &WeightVector<F>) -> Percentages<F> {
    let clamped: Vec<f64> = raw
        .iter()
        .map(|(dim, v)| {
            if !v.is_finite() {
                tracing::warn!(
                    framework = F::NAME,
                    dim = ?dim,
                    value = v,
                    "non-finite raw component, treating as zero"
                );
                0.0
            } else {
                v.max(0.0)
            }
        })
        .collect();
    let total: f64 = clamped.iter().sum();

    if total <= f64::EPSILON {
        return uniform::<F>();
    }

    let shares: Vec<f64> = clamped.iter().map(|v| 100.0 * v / total).collect();
    let mut values: Vec<u8> = shares.iter().map(|s| s.floor() as u8).collect();
    let assigned: u32 = values.iter().map(|&v| u32::from(v)).sum();
    let mut remainder = 100u32.saturating_sub(assigned) as usize;

    // Hand the leftover points to the largest fractional parts, ties broken
    // by fixed key order.
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        let frac_a = shares[a] - shares[a].floor();
        let frac_b = shares[b] - shares[b].floor();
        frac_b.partial_cmp(&frac_a).unwrap_or(std::cmp::Ordering::Equal).then(a.cmp(&b))
    });
    for &idx in &order {
        if remainder == 0 {
            break;
        }
        values[idx] += 1;
        remainder -= 1;
    }

    Percentages::new(values).expect("largest-remainder distribution sums to 100")
}

/// The uniform fallback distribution for a flat signal.
fn uniform<F: Framework>() -> Percentages<F> {
    let count = F::count();
    let base = (100 / count) as u8;
    let mut values = vec![base; count];
    values[0] += (100 - usize::from(base) * count) as u8;
    Percentages::new(values).expect("uniform distribution sums to 100")
}

#[cfg(test)]
mod tests {
    use super::*;
    use workstyle_core::{BigFive, CareerAnchor, Disc, Riasec};

    fn total<F: Framework>(p: &Percentages<F>) -> u32 {
        p.values().iter().map(|&v| u32::from(v)).sum()
    }

    #[test]
    fn test_simple_distribution() {
        let raw = WeightVector::<Disc>::from_values(vec![4.0, 2.0, 2.0, 2.0]).unwrap();
        let p = normalize(&raw);
        assert_eq!(p.values(), &[40, 20, 20, 20]);
    }

    #[test]
    fn test_sum_is_exactly_100_with_thirds() {
        let raw = WeightVector::<Disc>::from_values(vec![1.0, 1.0, 1.0, 0.0]).unwrap();
        let p = normalize(&raw);
        assert_eq!(total(&p), 100);
        // 33.33 each; the single leftover point goes to the first key.
        assert_eq!(p.values(), &[34, 33, 33, 0]);
    }

    #[test]
    fn test_zero_sum_uniform_fallback() {
        let p = normalize(&WeightVector::<Disc>::zero());
        assert_eq!(p.values(), &[25, 25, 25, 25]);

        let p = normalize(&WeightVector::<Riasec>::zero());
        assert_eq!(p.values(), &[20, 16, 16, 16, 16, 16]);
        assert_eq!(total(&p), 100);

        let p = normalize(&WeightVector::<BigFive>::zero());
        assert_eq!(p.values(), &[20, 20, 20, 20, 20]);

        let p = normalize(&WeightVector::<CareerAnchor>::zero());
        assert_eq!(p.values()[0], 16);
        assert_eq!(total(&p), 100);
    }

    #[test]
    fn test_negative_components_clamp_to_zero() {
        let raw = WeightVector::<Disc>::from_values(vec![3.0, -2.0, 1.0, 0.0]).unwrap();
        let p = normalize(&raw);
        assert_eq!(p.values(), &[75, 0, 25, 0]);
    }

    #[test]
    fn test_all_negative_falls_back_to_uniform() {
        let raw = WeightVector::<Disc>::from_values(vec![-1.0, -2.0, -3.0, -4.0]).unwrap();
        let p = normalize(&raw);
        assert_eq!(p.values(), &[25, 25, 25, 25]);
    }

    #[test]
    fn test_single_dimension_takes_all() {
        let raw = WeightVector::<Disc>::from_pairs(&[(Disc::Dominance, 64.0)]);
        let p = normalize(&raw);
        assert_eq!(p.values(), &[100, 0, 0, 0]);
    }

    #[test]
    fn test_non_finite_components_treated_as_zero() {
        let raw =
            WeightVector::<Disc>::from_values(vec![f64::INFINITY, 3.0, 1.0, f64::NAN]).unwrap();
        let p = normalize(&raw);
        assert_eq!(p.values(), &[0, 75, 25, 0]);
    }

    #[test]
    fn test_all_non_finite_falls_back_to_uniform() {
        let raw = WeightVector::<Disc>::splat(f64::NAN);
        let p = normalize(&raw);
        assert_eq!(p.values(), &[25, 25, 25, 25]);
    }

    #[test]
    fn test_remainder_tie_breaks_by_key_order() {
        // Four equal raw values over 6 keys: 16.66 each, remainder 4 goes
        // to the first four keys.
        let raw = WeightVector::<Riasec>::splat(1.0);
        let p = normalize(&raw);
        assert_eq!(p.values(), &[17, 17, 17, 17, 16, 16]);
    }
}
