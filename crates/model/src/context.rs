// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! The caller-supplied context a resolution call evaluates against.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tarifa_core::correctness::{FAILED, check_valid_string};
use ustr::Ustr;

/// The reserved context key carrying the mandatory currency.
///
/// It is never treated as a rule constraint; it filters candidate money
/// amounts by currency before any rule matching happens.
pub const CURRENCY_CODE_KEY: &str = "currency_code";

/// Represents the caller-supplied resolution context: the mandatory currency,
/// arbitrary rule-attribute entries, and the evaluation instant.
///
/// Context keys outside the snapshot's rule-type vocabulary are retained here
/// but ignored by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingContext {
    /// The code of the currency every selection is filtered by.
    pub currency_code: Ustr,
    /// The rule-attribute entries, in insertion order.
    pub attributes: IndexMap<Ustr, Ustr>,
    /// The instant price-list validity windows are evaluated at.
    pub now: DateTime<Utc>,
}

impl PricingContext {
    /// Creates a new [`PricingContext`] instance with correctness checking,
    /// with `now` defaulting to the current wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns an error if `currency_code` is an empty or whitespace-only string.
    pub fn new_checked<T: AsRef<str>>(currency_code: T) -> anyhow::Result<Self> {
        check_valid_string(currency_code.as_ref(), stringify!(currency_code))?;
        Ok(Self {
            currency_code: Ustr::from(currency_code.as_ref()),
            attributes: IndexMap::new(),
            now: Utc::now(),
        })
    }

    /// Creates a new [`PricingContext`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `currency_code` is not a valid string.
    pub fn new<T: AsRef<str>>(currency_code: T) -> Self {
        Self::new_checked(currency_code).expect(FAILED)
    }

    /// Creates a new [`PricingContext`] instance from a raw attribute map,
    /// extracting the mandatory [`CURRENCY_CODE_KEY`] entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the map has no `currency_code` entry or the entry
    /// is not a valid string.
    pub fn try_from_map(map: &IndexMap<String, String>) -> anyhow::Result<Self> {
        let currency_code = map
            .get(CURRENCY_CODE_KEY)
            .ok_or_else(|| anyhow::anyhow!("missing mandatory `{CURRENCY_CODE_KEY}` entry"))?;
        let mut context = Self::new_checked(currency_code)?;
        for (key, value) in map {
            if key != CURRENCY_CODE_KEY {
                context.attributes.insert(Ustr::from(key), Ustr::from(value));
            }
        }
        Ok(context)
    }

    /// Adds a rule-attribute entry to the context.
    #[must_use]
    pub fn with_attribute<T: AsRef<str>>(mut self, key: T, value: T) -> Self {
        self.attributes
            .insert(Ustr::from(key.as_ref()), Ustr::from(value.as_ref()));
        self
    }

    /// Sets the evaluation instant.
    #[must_use]
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Returns the context value for `key`, if present.
    #[must_use]
    pub fn attribute(&self, key: &Ustr) -> Option<Ustr> {
        self.attributes.get(key).copied()
    }
}
