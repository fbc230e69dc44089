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

//! Represents a time-bounded, rule-scoped price list.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::{
    enums::{PriceListStatus, PriceListType},
    identifiers::PriceListId,
};

/// Represents one rule-type constraint scoping an entire price list.
///
/// The `values` set carries OR semantics: the context value for
/// `rule_attribute` must be a member. Across a list's rules the semantics are
/// AND: every rule must be satisfied for the list to be valid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceListRule {
    /// The rule-type attribute this rule constrains, unique per list.
    pub rule_attribute: Ustr,
    /// The set of acceptable context values.
    pub values: Vec<Ustr>,
}

impl PriceListRule {
    /// Creates a new [`PriceListRule`] instance.
    #[must_use]
    pub fn new<T: AsRef<str>>(rule_attribute: T, values: &[T]) -> Self {
        Self {
            rule_attribute: Ustr::from(rule_attribute.as_ref()),
            values: values.iter().map(|v| Ustr::from(v.as_ref())).collect(),
        }
    }
}

/// Represents a bounded pricing campaign.
///
/// A price list is usable only while `status` is [`PriceListStatus::Active`],
/// the evaluation instant falls inside the optional `[starts_at, ends_at]`
/// window, and all of its rules are satisfied by the context.
#[derive(Clone, Debug, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(pattern = "owned")]
pub struct PriceList {
    /// The unique identifier for the price list.
    pub id: PriceListId,
    /// The lifecycle status; draft lists are never considered.
    #[builder(default)]
    pub status: PriceListStatus,
    /// The pricing semantics (sale or override).
    #[builder(default)]
    pub list_type: PriceListType,
    /// When the campaign starts, if bounded.
    #[builder(default)]
    pub starts_at: Option<DateTime<Utc>>,
    /// When the campaign ends, if bounded.
    #[builder(default)]
    pub ends_at: Option<DateTime<Utc>>,
    /// The list-level constraints (AND semantics across rules).
    #[builder(default)]
    pub rules: Vec<PriceListRule>,
}

impl PriceList {
    /// Creates a builder for a [`PriceList`] with the mandatory `id` set.
    #[must_use]
    pub fn builder(id: PriceListId) -> PriceListBuilder {
        PriceListBuilder::default().id(id)
    }

    /// Returns the live count of list-level constraints.
    #[must_use]
    pub fn number_rules(&self) -> usize {
        self.rules.len()
    }
}

impl Display for PriceList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PriceList(id={}, status={}, type={})",
            self.id, self.status, self.list_type
        )
    }
}
