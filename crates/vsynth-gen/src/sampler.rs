// VSynth - Synthetic vSphere Inventory Generator
//
// Copyright (c) 2025 VSynth contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Weighted and ranged random sampling.
//!
//! Every categorical draw in the generator (OS type, host model, storage
//! array, purpose, cluster size category) goes through [`pick`], and every
//! bounded numeric attribute through [`int_range`] / [`float_range`].
//!
//! The sampler has no error path: malformed distributions (empty catalogs,
//! all-zero weights) are configuration errors rejected by the resolver
//! before sampling begins, so [`pick`] treats a non-empty catalog as a
//! precondition.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use vsynth_config::{ClusterSizeBand, HostModel, OsProfile, PurposeWeight, StorageArray};

/// A catalog entry with a selection weight.
///
/// Weights need not be pre-normalized; [`pick`] normalizes internally.
pub trait Weighted {
    /// This entry's selection weight.
    fn weight(&self) -> f64;
}

impl Weighted for HostModel {
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl Weighted for OsProfile {
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl Weighted for PurposeWeight {
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl Weighted for StorageArray {
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl Weighted for ClusterSizeBand {
    fn weight(&self) -> f64 {
        self.weight
    }
}

/// Draw one catalog entry with probability proportional to its weight.
///
/// # Panics
///
/// Panics if `items` is empty. Catalogs reach the sampler only after the
/// resolver has validated them.
pub fn pick<'a, T: Weighted, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    let total: f64 = items.iter().map(Weighted::weight).sum();
    let mut remaining = rng.gen::<f64>() * total;
    let mut selected = &items[0];
    for item in items {
        selected = item;
        remaining -= item.weight();
        if remaining <= 0.0 {
            break;
        }
    }
    selected
}

/// Draw one element uniformly.
///
/// # Panics
///
/// Panics if `items` is empty.
pub fn choose<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Uniform integer in `[min, max]`, tolerating swapped bounds.
pub fn int_range<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32) -> u32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(lo..=hi)
}

/// Uniform float in `[min, max]`.
pub fn float_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.gen_range(min..=max)
}

/// A pseudo-MAC address under the reserved VMware OUI `00:50:56`.
pub fn mac_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "00:50:56:{:02x}:{:02x}:{:02x}",
        rng.gen_range(0..=255u32),
        rng.gen_range(0..=255u32),
        rng.gen_range(0..=255u32)
    )
}

/// Uniform date in `[start, end]`.
pub fn random_date<R: Rng + ?Sized>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let days = (end - start).num_days().max(0);
    start + Duration::days(rng.gen_range(0..=days))
}

/// Round to two decimal places, for human-plausible telemetry figures.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct Entry {
        name: &'static str,
        weight: f64,
    }

    impl Weighted for Entry {
        fn weight(&self) -> f64 {
            self.weight
        }
    }

    #[test]
    fn pick_honors_sole_nonzero_weight() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = [
            Entry {
                name: "never",
                weight: 0.0,
            },
            Entry {
                name: "always",
                weight: 3.0,
            },
        ];
        for _ in 0..200 {
            assert_eq!(pick(&mut rng, &items).name, "always");
        }
    }

    #[test]
    fn pick_does_not_require_normalized_weights() {
        let mut rng = StdRng::seed_from_u64(11);
        let items = [
            Entry {
                name: "a",
                weight: 30.0,
            },
            Entry {
                name: "b",
                weight: 10.0,
            },
        ];
        let a_hits = (0..2000)
            .filter(|_| pick(&mut rng, &items).name == "a")
            .count();
        // Expect roughly 75%; allow a wide band since this is a smoke check.
        assert!((1300..1700).contains(&a_hits), "a_hits = {a_hits}");
    }

    #[test]
    fn choose_covers_all_elements() {
        let mut rng = StdRng::seed_from_u64(3);
        let items = [1, 2, 3];
        let mut seen = [false; 3];
        for _ in 0..100 {
            seen[*choose(&mut rng, &items) as usize - 1] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn mac_addresses_carry_vmware_prefix() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            let mac = mac_address(&mut rng);
            assert!(mac.starts_with("00:50:56:"));
            assert_eq!(mac.len(), 17);
        }
    }

    #[test]
    fn random_date_with_equal_bounds() {
        let mut rng = StdRng::seed_from_u64(9);
        let day = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        assert_eq!(random_date(&mut rng, day, day), day);
    }

    #[test]
    fn round2_truncates_to_cents() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(99.996), 100.0);
        assert_eq!(round2(250.0), 250.0);
    }

    proptest! {
        #[test]
        fn int_range_stays_inclusive(seed in any::<u64>(), a in 0u32..10_000, b in 0u32..10_000) {
            let mut rng = StdRng::seed_from_u64(seed);
            let v = int_range(&mut rng, a, b);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(v >= lo && v <= hi);
        }

        #[test]
        fn float_range_stays_inclusive(seed in any::<u64>(), span in 0.0f64..1_000.0) {
            let mut rng = StdRng::seed_from_u64(seed);
            let v = float_range(&mut rng, 10.0, 10.0 + span);
            prop_assert!(v >= 10.0 && v <= 10.0 + span);
        }

        #[test]
        fn pick_returns_member(seed in any::<u64>(), w1 in 0.1f64..10.0, w2 in 0.1f64..10.0) {
            let mut rng = StdRng::seed_from_u64(seed);
            let items = [Entry { name: "x", weight: w1 }, Entry { name: "y", weight: w2 }];
            let name = pick(&mut rng, &items).name;
            prop_assert!(name == "x" || name == "y");
        }
    }
}
