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

//! Represents a concrete amount of money in a currency.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tarifa_core::correctness::{FAILED, check_predicate_true};
use ustr::Ustr;

use crate::identifiers::MoneyAmountId;

/// Represents a concrete amount of money in a currency, optionally bounded by
/// a quantity range and soft-deletable.
///
/// A money amount is owned by exactly one price-set join row once linked; the
/// snapshot arena keys amounts by [`MoneyAmountId`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyAmount {
    /// The unique identifier for the money amount.
    pub id: MoneyAmountId,
    /// The code of the currency the amount is denominated in.
    pub currency_code: Ustr,
    /// The numeric amount.
    pub amount: Decimal,
    /// The minimum quantity the amount applies from (inclusive), if bounded.
    pub min_quantity: Option<u64>,
    /// The maximum quantity the amount applies to (inclusive), if bounded.
    pub max_quantity: Option<u64>,
    /// When the amount was soft-deleted, if ever. Deleted amounts are never
    /// selection candidates.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl MoneyAmount {
    /// Creates a new [`MoneyAmount`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is negative.
    /// - both quantity bounds are set and `min_quantity > max_quantity`.
    pub fn new_checked(
        id: MoneyAmountId,
        currency_code: Ustr,
        amount: Decimal,
        min_quantity: Option<u64>,
        max_quantity: Option<u64>,
    ) -> anyhow::Result<Self> {
        check_predicate_true(amount >= Decimal::ZERO, "`amount` was negative")?;
        if let (Some(min), Some(max)) = (min_quantity, max_quantity) {
            check_predicate_true(min <= max, "`min_quantity` exceeded `max_quantity`")?;
        }
        Ok(Self {
            id,
            currency_code,
            amount,
            min_quantity,
            max_quantity,
            deleted_at: None,
        })
    }

    /// Creates a new [`MoneyAmount`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `amount` is negative or the quantity bounds are inverted.
    pub fn new(
        id: MoneyAmountId,
        currency_code: Ustr,
        amount: Decimal,
        min_quantity: Option<u64>,
        max_quantity: Option<u64>,
    ) -> Self {
        Self::new_checked(id, currency_code, amount, min_quantity, max_quantity).expect(FAILED)
    }

    /// Returns a copy of this amount marked as soft-deleted at `deleted_at`.
    #[must_use]
    pub fn deleted(mut self, deleted_at: DateTime<Utc>) -> Self {
        self.deleted_at = Some(deleted_at);
        self
    }

    /// Returns true if the amount has been soft-deleted.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl Display for MoneyAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency_code)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    #[rstest]
    fn test_money_amount_new() {
        let ma = MoneyAmount::new(
            MoneyAmountId::new("ma-1"),
            Ustr::from("EUR"),
            dec!(500),
            None,
            None,
        );
        assert_eq!(ma.amount, dec!(500));
        assert_eq!(ma.to_string(), "500 EUR");
        assert!(!ma.is_deleted());
    }

    #[rstest]
    fn test_money_amount_negative_amount_errors() {
        let result = MoneyAmount::new_checked(
            MoneyAmountId::new("ma-1"),
            Ustr::from("EUR"),
            dec!(-1),
            None,
            None,
        );
        assert!(result.is_err());
    }

    #[rstest]
    #[case(Some(1), Some(10), true)]
    #[case(Some(10), Some(1), false)]
    #[case(Some(5), None, true)]
    #[case(None, Some(5), true)]
    fn test_quantity_bounds(
        #[case] min: Option<u64>,
        #[case] max: Option<u64>,
        #[case] expected_ok: bool,
    ) {
        let result = MoneyAmount::new_checked(
            MoneyAmountId::new("ma-1"),
            Ustr::from("EUR"),
            dec!(100),
            min,
            max,
        );
        assert_eq!(result.is_ok(), expected_ok);
    }

    #[rstest]
    fn test_soft_delete() {
        let ma = MoneyAmount::new(
            MoneyAmountId::new("ma-1"),
            Ustr::from("EUR"),
            dec!(100),
            None,
            None,
        )
        .deleted(Utc::now());
        assert!(ma.is_deleted());
    }
}
