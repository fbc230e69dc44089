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

//! Rule types and per-amount price rules.

use std::fmt::Display;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tarifa_core::correctness::{FAILED, check_predicate_true, check_valid_string};
use ustr::Ustr;

/// Represents a named pricing dimension (e.g. "region_id").
///
/// The set of rule-type `rule_attribute` values forms the vocabulary of
/// context keys the engine understands; context keys outside this vocabulary
/// are ignored during resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleType {
    /// The attribute key matched against context keys, unique per snapshot.
    pub rule_attribute: Ustr,
    /// The human-readable name of the dimension.
    pub name: String,
    /// The tie-break weight applied when ranked candidates are otherwise equal.
    pub default_priority: i32,
}

impl RuleType {
    /// Creates a new [`RuleType`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `rule_attribute` or `name` is an empty or
    /// whitespace-only string.
    pub fn new_checked<T: AsRef<str>>(
        rule_attribute: T,
        name: T,
        default_priority: i32,
    ) -> anyhow::Result<Self> {
        check_valid_string(rule_attribute.as_ref(), stringify!(rule_attribute))?;
        check_valid_string(name.as_ref(), stringify!(name))?;
        Ok(Self {
            rule_attribute: Ustr::from(rule_attribute.as_ref()),
            name: name.as_ref().to_string(),
            default_priority,
        })
    }

    /// Creates a new [`RuleType`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `rule_attribute` or `name` is not a valid string.
    pub fn new<T: AsRef<str>>(rule_attribute: T, name: T, default_priority: i32) -> Self {
        Self::new_checked(rule_attribute, name, default_priority).expect(FAILED)
    }
}

impl Display for RuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rule_attribute)
    }
}

/// The value a price rule constrains its attribute to.
///
/// Exact rules match a single context value. Range rules match any context
/// value that parses as a decimal inside the inclusive `[min, max]` bounds
/// (the dynamic-rule case; a non-numeric context value never matches).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceRuleValue {
    /// The context value must equal this value.
    Exact(Ustr),
    /// The context value must be a decimal within the inclusive bounds.
    Range {
        /// The inclusive lower bound.
        min: Decimal,
        /// The inclusive upper bound.
        max: Decimal,
    },
}

/// Represents a single constraint attached to one price-set money amount.
///
/// A money amount with zero price rules is the *default* amount for its
/// price set and currency.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRule {
    /// The rule-type attribute this rule constrains.
    pub rule_attribute: Ustr,
    /// The value constraint.
    pub value: PriceRuleValue,
    /// The rule-level tie-break weight, taking precedence over the rule
    /// type's `default_priority`.
    pub priority: i32,
}

impl PriceRule {
    /// Creates a new exact-value [`PriceRule`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `rule_attribute` or `value` is not a valid string.
    pub fn exact<T: AsRef<str>>(rule_attribute: T, value: T, priority: i32) -> Self {
        check_valid_string(rule_attribute.as_ref(), stringify!(rule_attribute)).expect(FAILED);
        check_valid_string(value.as_ref(), stringify!(value)).expect(FAILED);
        Self {
            rule_attribute: Ustr::from(rule_attribute.as_ref()),
            value: PriceRuleValue::Exact(Ustr::from(value.as_ref())),
            priority,
        }
    }

    /// Creates a new range [`PriceRule`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `rule_attribute` is invalid or `min > max`.
    pub fn range_checked<T: AsRef<str>>(
        rule_attribute: T,
        min: Decimal,
        max: Decimal,
        priority: i32,
    ) -> anyhow::Result<Self> {
        check_valid_string(rule_attribute.as_ref(), stringify!(rule_attribute))?;
        check_predicate_true(min <= max, "`min` exceeded `max`")?;
        Ok(Self {
            rule_attribute: Ustr::from(rule_attribute.as_ref()),
            value: PriceRuleValue::Range { min, max },
            priority,
        })
    }

    /// Creates a new range [`PriceRule`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `rule_attribute` is invalid or `min > max`.
    pub fn range<T: AsRef<str>>(rule_attribute: T, min: Decimal, max: Decimal, priority: i32) -> Self {
        Self::range_checked(rule_attribute, min, max, priority).expect(FAILED)
    }

    /// Returns true if this rule matches dynamically (range variant) rather
    /// than against a single exact value.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        matches!(self.value, PriceRuleValue::Range { .. })
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
    fn test_rule_type_new() {
        let rt = RuleType::new("region_id", "Region", 10);
        assert_eq!(rt.rule_attribute.as_str(), "region_id");
        assert_eq!(rt.default_priority, 10);
        assert_eq!(rt.to_string(), "region_id");
    }

    #[rstest]
    fn test_rule_type_invalid_attribute() {
        assert!(RuleType::new_checked(" ", "Region", 0).is_err());
    }

    #[rstest]
    fn test_exact_rule() {
        let rule = PriceRule::exact("region_id", "PL", 5);
        assert_eq!(rule.value, PriceRuleValue::Exact(Ustr::from("PL")));
        assert!(!rule.is_dynamic());
    }

    #[rstest]
    fn test_range_rule() {
        let rule = PriceRule::range("cart_total", dec!(100), dec!(500), 0);
        assert!(rule.is_dynamic());
    }

    #[rstest]
    fn test_range_rule_inverted_bounds_errors() {
        assert!(PriceRule::range_checked("cart_total", dec!(500), dec!(100), 0).is_err());
    }
}
