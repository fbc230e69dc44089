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

//! Price sets and their money-amount join rows.

use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::{
    identifiers::{MoneyAmountId, PriceListId, PriceSetId},
    rules::PriceRule,
};

/// Represents the join between a price set and one of its money amounts.
///
/// A row with no price list (`price_list_id` is `None`) is a *standalone*
/// amount, eligible for original-price selection; a row linked to a list
/// competes for the calculated price instead. The rule count exposed by
/// [`Self::number_rules`] is always the live count of attached rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSetMoneyAmount {
    /// The money amount this row links into the set.
    pub money_amount_id: MoneyAmountId,
    /// The price list the amount belongs to, if any.
    pub price_list_id: Option<PriceListId>,
    /// The constraints scoping this specific amount.
    pub rules: Vec<PriceRule>,
}

impl PriceSetMoneyAmount {
    /// Creates a new standalone [`PriceSetMoneyAmount`] instance.
    #[must_use]
    pub fn standalone(money_amount_id: MoneyAmountId, rules: Vec<PriceRule>) -> Self {
        Self {
            money_amount_id,
            price_list_id: None,
            rules,
        }
    }

    /// Creates a new [`PriceSetMoneyAmount`] instance belonging to a price list.
    #[must_use]
    pub fn in_price_list(money_amount_id: MoneyAmountId, price_list_id: PriceListId) -> Self {
        Self {
            money_amount_id,
            price_list_id: Some(price_list_id),
            rules: Vec::new(),
        }
    }

    /// Returns the live count of rules scoping this amount.
    #[must_use]
    pub fn number_rules(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the amount does not belong to any price list.
    #[must_use]
    pub fn is_standalone(&self) -> bool {
        self.price_list_id.is_none()
    }

    /// Returns true if this is the default amount for its set (no rules, no list).
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.is_standalone() && self.rules.is_empty()
    }
}

/// Represents an anonymous grouping of priceable money amounts for one
/// priceable entity (e.g. one SKU).
///
/// A price set holds no attributes beyond its identity; its meaning comes from
/// the linked money amounts and the rule types declared relevant for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSet {
    /// The unique identifier for the price set.
    pub id: PriceSetId,
    /// The rule-type attributes permitted for this set.
    pub rule_types: Vec<Ustr>,
    /// The money-amount join rows belonging to the set, in insertion order.
    pub prices: Vec<PriceSetMoneyAmount>,
}

impl PriceSet {
    /// Creates a new empty [`PriceSet`] instance.
    #[must_use]
    pub fn new(id: PriceSetId) -> Self {
        Self {
            id,
            rule_types: Vec::new(),
            prices: Vec::new(),
        }
    }

    /// Declares a rule type as relevant for this set.
    #[must_use]
    pub fn with_rule_type<T: AsRef<str>>(mut self, rule_attribute: T) -> Self {
        self.rule_types.push(Ustr::from(rule_attribute.as_ref()));
        self
    }

    /// Links a money-amount join row into this set.
    #[must_use]
    pub fn with_price(mut self, price: PriceSetMoneyAmount) -> Self {
        self.prices.push(price);
        self
    }

    /// Returns the standalone join rows (original-price candidates).
    pub fn standalone_prices(&self) -> impl Iterator<Item = &PriceSetMoneyAmount> {
        self.prices.iter().filter(|p| p.is_standalone())
    }

    /// Returns the join rows belonging to price lists (calculated-price candidates).
    pub fn price_list_prices(&self) -> impl Iterator<Item = &PriceSetMoneyAmount> {
        self.prices.iter().filter(|p| !p.is_standalone())
    }
}
