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

//! Rule-constraint matching against a resolution context.
//!
//! A constraint is a `(rule_attribute, allowed values)` pair: per-amount price
//! rules carry exactly one allowed value (or a numeric range), price-list
//! rules carry a value set with OR semantics. Across the constraints of one
//! owner the semantics are AND; [`RuleMatch::matched_count`] additionally
//! reports the cardinality used for partial-match ranking.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use tarifa_model::{
    context::{CURRENCY_CODE_KEY, PricingContext},
    price_list::PriceListRule,
    rules::{PriceRule, PriceRuleValue},
    snapshot::PricingSnapshot,
};
use ustr::Ustr;

/// The outcome of matching a set of rule constraints against a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleMatch {
    /// True if every constraint was satisfied.
    pub full_match: bool,
    /// The number of constraints satisfied.
    pub matched_count: usize,
}

/// Returns the context entries the snapshot understands: the non-reserved
/// keys present in its rule-type vocabulary, in context insertion order.
///
/// Unknown context keys are ignored by every selection path.
#[must_use]
pub fn known_attributes(
    snapshot: &PricingSnapshot,
    context: &PricingContext,
) -> IndexMap<Ustr, Ustr> {
    context
        .attributes
        .iter()
        .filter(|(key, _)| key.as_str() != CURRENCY_CODE_KEY && snapshot.knows_attribute(key))
        .map(|(key, value)| (*key, *value))
        .collect()
}

/// Returns true if a single price rule is satisfied by the attributes.
///
/// The reserved `currency_code` key is never a rule constraint. Range rules
/// match when the context value parses as a decimal inside the inclusive
/// bounds; a non-numeric value never matches.
#[must_use]
pub fn price_rule_satisfied(rule: &PriceRule, attributes: &IndexMap<Ustr, Ustr>) -> bool {
    if rule.rule_attribute.as_str() == CURRENCY_CODE_KEY {
        return false;
    }
    let Some(value) = attributes.get(&rule.rule_attribute) else {
        return false;
    };
    match &rule.value {
        PriceRuleValue::Exact(expected) => value == expected,
        PriceRuleValue::Range { min, max } => value
            .as_str()
            .parse::<Decimal>()
            .is_ok_and(|v| *min <= v && v <= *max),
    }
}

/// Matches the price rules of one money amount against the attributes.
#[must_use]
pub fn match_price_rules(rules: &[PriceRule], attributes: &IndexMap<Ustr, Ustr>) -> RuleMatch {
    let mut total = 0;
    let mut matched = 0;
    for rule in rules {
        if rule.rule_attribute.as_str() == CURRENCY_CODE_KEY {
            continue; // Reserved key, not a constraint
        }
        total += 1;
        if price_rule_satisfied(rule, attributes) {
            matched += 1;
        }
    }
    RuleMatch {
        full_match: matched == total,
        matched_count: matched,
    }
}

/// Matches the rules of one price list against the attributes.
///
/// Within a rule the `values` set has OR semantics; across rules AND. A list
/// with zero rules is a full match.
#[must_use]
pub fn match_price_list_rules(
    rules: &[PriceListRule],
    attributes: &IndexMap<Ustr, Ustr>,
) -> RuleMatch {
    let mut total = 0;
    let mut matched = 0;
    for rule in rules {
        if rule.rule_attribute.as_str() == CURRENCY_CODE_KEY {
            continue;
        }
        total += 1;
        if attributes
            .get(&rule.rule_attribute)
            .is_some_and(|value| rule.values.contains(value))
        {
            matched += 1;
        }
    }
    RuleMatch {
        full_match: matched == total,
        matched_count: matched,
    }
}
