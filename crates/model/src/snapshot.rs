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

//! The immutable in-memory arena a resolution call navigates.

use ahash::AHashMap;
use indexmap::IndexMap;
use ustr::Ustr;

use crate::{
    context::CURRENCY_CODE_KEY,
    identifiers::{MoneyAmountId, PriceListId, PriceSetId},
    price_list::PriceList,
    price_set::PriceSet,
    rules::RuleType,
    types::{Currency, MoneyAmount},
};

/// The in-memory arena of pricing data for one resolution call.
///
/// The relational join tables are abstracted as graphs keyed by stable
/// identifiers: price set -> money amounts -> rules, and price list -> rules
/// -> allowed values. A data-access collaborator materializes the snapshot
/// via the `add_*` loaders before invocation; the engine only reads it.
///
/// Price sets are kept in insertion order; all other entities are plain keyed
/// lookups.
#[derive(Clone, Debug, Default)]
pub struct PricingSnapshot {
    currencies: AHashMap<Ustr, Currency>,
    rule_types: AHashMap<Ustr, RuleType>,
    money_amounts: AHashMap<MoneyAmountId, MoneyAmount>,
    price_lists: AHashMap<PriceListId, PriceList>,
    price_sets: IndexMap<PriceSetId, PriceSet>,
}

impl PricingSnapshot {
    /// Creates a new empty [`PricingSnapshot`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a currency into the snapshot, replacing any previous entry for
    /// the same code.
    pub fn add_currency(&mut self, currency: Currency) {
        self.currencies.insert(currency.code, currency);
    }

    /// Loads a rule type into the snapshot, replacing any previous entry for
    /// the same attribute.
    ///
    /// # Panics
    ///
    /// Panics if the rule type claims the reserved `currency_code` attribute.
    pub fn add_rule_type(&mut self, rule_type: RuleType) {
        assert_ne!(
            rule_type.rule_attribute.as_str(),
            CURRENCY_CODE_KEY,
            "`{CURRENCY_CODE_KEY}` is reserved and cannot be a rule attribute",
        );
        self.rule_types.insert(rule_type.rule_attribute, rule_type);
    }

    /// Loads a money amount into the snapshot.
    pub fn add_money_amount(&mut self, money_amount: MoneyAmount) {
        self.money_amounts.insert(money_amount.id, money_amount);
    }

    /// Loads a price list into the snapshot.
    pub fn add_price_list(&mut self, price_list: PriceList) {
        self.price_lists.insert(price_list.id, price_list);
    }

    /// Loads a price set into the snapshot, preserving insertion order.
    pub fn add_price_set(&mut self, price_set: PriceSet) {
        self.price_sets.insert(price_set.id, price_set);
    }

    /// Returns the currency for `code`, if loaded.
    #[must_use]
    pub fn currency(&self, code: &Ustr) -> Option<&Currency> {
        self.currencies.get(code)
    }

    /// Returns the rule type for `rule_attribute`, if loaded.
    #[must_use]
    pub fn rule_type(&self, rule_attribute: &Ustr) -> Option<&RuleType> {
        self.rule_types.get(rule_attribute)
    }

    /// Returns true if `rule_attribute` belongs to the snapshot's vocabulary.
    #[must_use]
    pub fn knows_attribute(&self, rule_attribute: &Ustr) -> bool {
        self.rule_types.contains_key(rule_attribute)
    }

    /// Returns the default tie-break priority of the rule type for
    /// `rule_attribute`, if loaded.
    #[must_use]
    pub fn default_priority(&self, rule_attribute: &Ustr) -> Option<i32> {
        self.rule_types.get(rule_attribute).map(|rt| rt.default_priority)
    }

    /// Returns the money amount for `id`, if loaded.
    #[must_use]
    pub fn money_amount(&self, id: &MoneyAmountId) -> Option<&MoneyAmount> {
        self.money_amounts.get(id)
    }

    /// Returns the price list for `id`, if loaded.
    #[must_use]
    pub fn price_list(&self, id: &PriceListId) -> Option<&PriceList> {
        self.price_lists.get(id)
    }

    /// Returns the price set for `id`, if loaded.
    #[must_use]
    pub fn price_set(&self, id: &PriceSetId) -> Option<&PriceSet> {
        self.price_sets.get(id)
    }

    /// Returns all loaded price sets in insertion order.
    pub fn price_sets(&self) -> impl Iterator<Item = &PriceSet> {
        self.price_sets.values()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    #[rstest]
    fn test_snapshot_lookups() {
        let mut snapshot = PricingSnapshot::new();
        snapshot.add_currency(Currency::new("EUR", "€", "€", "Euro"));
        snapshot.add_rule_type(RuleType::new("region_id", "Region", 10));
        snapshot.add_money_amount(MoneyAmount::new(
            MoneyAmountId::new("ma-1"),
            Ustr::from("EUR"),
            dec!(500),
            None,
            None,
        ));
        snapshot.add_price_set(PriceSet::new(PriceSetId::new("pset-1")));

        assert!(snapshot.currency(&Ustr::from("EUR")).is_some());
        assert!(snapshot.currency(&Ustr::from("USD")).is_none());
        assert!(snapshot.knows_attribute(&Ustr::from("region_id")));
        assert!(!snapshot.knows_attribute(&Ustr::from("customer_group")));
        assert_eq!(snapshot.default_priority(&Ustr::from("region_id")), Some(10));
        assert!(snapshot.money_amount(&MoneyAmountId::new("ma-1")).is_some());
        assert!(snapshot.price_set(&PriceSetId::new("pset-1")).is_some());
        assert!(snapshot.price_list(&PriceListId::new("plist-1")).is_none());
    }

    #[rstest]
    #[should_panic(expected = "reserved")]
    fn test_reserved_rule_attribute_panics() {
        let mut snapshot = PricingSnapshot::new();
        snapshot.add_rule_type(RuleType::new("currency_code", "Currency", 0));
    }

    #[rstest]
    fn test_price_sets_preserve_insertion_order() {
        let mut snapshot = PricingSnapshot::new();
        snapshot.add_price_set(PriceSet::new(PriceSetId::new("pset-b")));
        snapshot.add_price_set(PriceSet::new(PriceSetId::new("pset-a")));

        let ids: Vec<_> = snapshot.price_sets().map(|ps| ps.id.as_str()).collect();
        assert_eq!(ids, vec!["pset-b", "pset-a"]);
    }
}
