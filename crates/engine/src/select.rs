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

//! Calculated and original price selection over one price set.
//!
//! Both selectors are read-only: they navigate the snapshot arena, skip
//! candidates with dangling references or soft-deleted amounts (logged as
//! data-integrity conditions, never fatal), and keep ties stable by insertion
//! order.

use indexmap::IndexMap;
use tarifa_model::{
    context::PricingContext,
    price_list::PriceList,
    price_set::{PriceSet, PriceSetMoneyAmount},
    rules::{PriceRule, PriceRuleValue},
    snapshot::PricingSnapshot,
    types::MoneyAmount,
};
use ustr::Ustr;

use crate::{matcher::price_rule_satisfied, validator::is_price_list_valid};

/// A money amount selected for one side of a price record, with the price
/// list it came from (if any).
#[derive(Clone, Copy, Debug)]
pub struct SelectedPrice<'a> {
    /// The selected money amount.
    pub money_amount: &'a MoneyAmount,
    /// The valid price list the amount belongs to, if it is not standalone.
    pub price_list: Option<&'a PriceList>,
}

/// Selects the calculated (promotional) price for `price_set`.
///
/// Candidates are the set's money amounts that belong to a valid price list
/// and match the context currency; the numerically lowest amount wins
/// regardless of which list it came from. Returns `None` when no valid list
/// contributes a candidate, in which case the assembler substitutes the
/// original price.
#[must_use]
pub fn select_calculated<'a>(
    snapshot: &'a PricingSnapshot,
    price_set: &PriceSet,
    context: &PricingContext,
    attributes: &IndexMap<Ustr, Ustr>,
) -> Option<SelectedPrice<'a>> {
    let mut best: Option<SelectedPrice<'a>> = None;
    for psma in price_set.price_list_prices() {
        let Some(price_list_id) = psma.price_list_id else {
            continue;
        };
        let Some(price_list) = snapshot.price_list(&price_list_id) else {
            log::warn!(
                "Money amount {} of price set {} references unknown price list {price_list_id}",
                psma.money_amount_id,
                price_set.id,
            );
            continue;
        };
        if !is_price_list_valid(price_list, attributes, context.now) {
            continue;
        }
        let Some(money_amount) = resolve_money_amount(snapshot, price_set, psma, context) else {
            continue;
        };
        // Strict comparison keeps the first candidate on amount ties
        if best
            .as_ref()
            .is_none_or(|b| money_amount.amount < b.money_amount.amount)
        {
            best = Some(SelectedPrice {
                money_amount,
                price_list: Some(price_list),
            });
        }
    }
    best
}

/// Selects the original (reference) price for `price_set`.
///
/// Only standalone amounts (no price list) of the context currency are
/// considered. Policy, in order: the zero-rule default amount when the
/// context carries no known non-currency keys; otherwise an exact rule-set
/// match; otherwise the best ranked partial match by
/// `(matched rule count, total rule count, max matched priority, max matched
/// default_priority)` descending. Returns `None` when nothing matches.
#[must_use]
pub fn select_original<'a>(
    snapshot: &'a PricingSnapshot,
    price_set: &PriceSet,
    context: &PricingContext,
    attributes: &IndexMap<Ustr, Ustr>,
) -> Option<SelectedPrice<'a>> {
    let mut candidates: Vec<(&PriceSetMoneyAmount, &'a MoneyAmount)> = Vec::new();
    for psma in price_set.standalone_prices() {
        if let Some(money_amount) = resolve_money_amount(snapshot, price_set, psma, context) {
            candidates.push((psma, money_amount));
        }
    }

    if attributes.is_empty() {
        return select_default(price_set, context, &candidates);
    }

    if let Some(&(_, money_amount)) = candidates
        .iter()
        .find(|(psma, _)| is_exact_match(psma, attributes))
    {
        return Some(SelectedPrice {
            money_amount,
            price_list: None,
        });
    }

    select_ranked(snapshot, attributes, &candidates)
}

/// Resolves the money amount of a join row, skipping dangling references,
/// soft-deleted amounts, currency mismatches, and amounts denominated in a
/// currency missing from the snapshot's registry.
fn resolve_money_amount<'a>(
    snapshot: &'a PricingSnapshot,
    price_set: &PriceSet,
    psma: &PriceSetMoneyAmount,
    context: &PricingContext,
) -> Option<&'a MoneyAmount> {
    let Some(money_amount) = snapshot.money_amount(&psma.money_amount_id) else {
        log::warn!(
            "Price set {} references unknown money amount {}",
            price_set.id,
            psma.money_amount_id,
        );
        return None;
    };
    if money_amount.is_deleted() || money_amount.currency_code != context.currency_code {
        return None;
    }
    if snapshot.currency(&money_amount.currency_code).is_none() {
        log::warn!(
            "Money amount {} denominated in unknown currency {}",
            money_amount.id,
            money_amount.currency_code,
        );
        return None;
    }
    Some(money_amount)
}

/// Selects the zero-rule default amount for a context with no known
/// non-currency keys. More than one default is a data-integrity condition:
/// it is logged and the first in insertion order wins.
fn select_default<'a>(
    price_set: &PriceSet,
    context: &PricingContext,
    candidates: &[(&PriceSetMoneyAmount, &'a MoneyAmount)],
) -> Option<SelectedPrice<'a>> {
    let mut defaults = candidates.iter().filter(|(psma, _)| psma.rules.is_empty());
    let &(_, money_amount) = defaults.next()?;
    if defaults.next().is_some() {
        log::warn!(
            "Price set {} has multiple default amounts for currency {}, selecting the first",
            price_set.id,
            context.currency_code,
        );
    }
    Some(SelectedPrice {
        money_amount,
        price_list: None,
    })
}

/// Returns true if the candidate's rule pairs are exactly the known
/// non-currency context entries: same count, same values, no extra, no
/// missing. Range rules never participate in exact matching.
fn is_exact_match(psma: &PriceSetMoneyAmount, attributes: &IndexMap<Ustr, Ustr>) -> bool {
    if psma.rules.len() != attributes.len() {
        return false;
    }
    let mut seen: Vec<Ustr> = Vec::with_capacity(psma.rules.len());
    for rule in &psma.rules {
        if seen.contains(&rule.rule_attribute) {
            return false;
        }
        seen.push(rule.rule_attribute);
        match &rule.value {
            PriceRuleValue::Exact(expected) => {
                if attributes.get(&rule.rule_attribute) != Some(expected) {
                    return false;
                }
            }
            PriceRuleValue::Range { .. } => return false,
        }
    }
    true
}

/// Ranks partially matching candidates and selects the best.
///
/// The dominant key is the matched-rule count, followed by the candidate's
/// total rule count: an amount scoped by more rules, even partially matched,
/// outranks one with fewer. Rule-level `priority` breaks the remaining ties
/// and takes precedence over the rule type's `default_priority`; both are
/// taken over the candidate's *matched* rules. Candidates with zero matches
/// are discarded; remaining ties stay stable by insertion order.
fn select_ranked<'a>(
    snapshot: &PricingSnapshot,
    attributes: &IndexMap<Ustr, Ustr>,
    candidates: &[(&PriceSetMoneyAmount, &'a MoneyAmount)],
) -> Option<SelectedPrice<'a>> {
    let mut best: Option<((usize, usize, i32, i32), &'a MoneyAmount)> = None;
    for &(psma, money_amount) in candidates {
        let matched: Vec<&PriceRule> = psma
            .rules
            .iter()
            .filter(|rule| price_rule_satisfied(rule, attributes))
            .collect();
        if matched.is_empty() {
            continue;
        }
        let key = (
            matched.len(),
            psma.number_rules(),
            matched.iter().map(|rule| rule.priority).max().unwrap_or(i32::MIN),
            matched
                .iter()
                .filter_map(|rule| snapshot.default_priority(&rule.rule_attribute))
                .max()
                .unwrap_or(i32::MIN),
        );
        if best.as_ref().is_none_or(|(best_key, _)| key > *best_key) {
            best = Some((key, money_amount));
        }
    }
    best.map(|(_, money_amount)| SelectedPrice {
        money_amount,
        price_list: None,
    })
}
