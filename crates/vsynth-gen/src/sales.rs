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

//! Standalone sample-sales dataset.
//!
//! Unrelated to the inventory topology: a small customer-sales table over
//! the last 30 days, kept for demo pipelines that want a second,
//! simpler-shaped dataset.

use crate::sampler::{choose, float_range, int_range, random_date, round2};
use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use vsynth_core::{Tabular, Value};

/// Default number of sales records.
pub const DEFAULT_SALES_RECORDS: usize = 150;

/// Product categories sales are drawn from.
pub const PRODUCT_CATEGORIES: [&str; 6] = [
    "Electronics",
    "Clothing",
    "Home & Garden",
    "Sports",
    "Books",
    "Toys",
];

/// One customer sales transaction.
#[derive(Debug, Clone)]
pub struct SalesRecord {
    pub customer_id: u32,
    pub transaction_date: NaiveDate,
    pub product_category: String,
    pub sales_amount: f64,
    pub quantity: u32,
    pub is_repeat_customer: bool,
}

impl Tabular for SalesRecord {
    const TABLE: &'static str = "SampleSales";

    fn schema() -> &'static [&'static str] {
        &[
            "customer_id",
            "transaction_date",
            "product_category",
            "sales_amount",
            "quantity",
            "is_repeat_customer",
        ]
    }

    fn to_row(&self) -> Vec<Value> {
        vec![
            self.customer_id.into(),
            self.transaction_date.format("%Y-%m-%d").to_string().into(),
            self.product_category.clone().into(),
            self.sales_amount.into(),
            self.quantity.into(),
            self.is_repeat_customer.into(),
        ]
    }
}

/// Generate `records` sales transactions over the last 30 days, sorted by
/// transaction date.
pub fn generate_sales<R: Rng>(rng: &mut R, records: usize) -> Vec<SalesRecord> {
    let end = Utc::now().date_naive();
    let start = end - Duration::days(30);

    let mut sales: Vec<SalesRecord> = (0..records)
        .map(|_| SalesRecord {
            customer_id: int_range(rng, 1000, 9999),
            transaction_date: random_date(rng, start, end),
            product_category: choose(rng, &PRODUCT_CATEGORIES).to_string(),
            sales_amount: round2(float_range(rng, 10.0, 500.0)),
            quantity: int_range(rng, 1, 9),
            is_repeat_customer: rng.gen_bool(0.5),
        })
        .collect();
    sales.sort_by_key(|record| record.transaction_date);
    sales
}
