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

//! Type stubs to facilitate testing.

use chrono::{DateTime, Utc};
use rstest::fixture;
use rust_decimal::Decimal;
use ustr::Ustr;

use crate::{
    context::PricingContext,
    enums::{PriceListStatus, PriceListType},
    identifiers::{MoneyAmountId, PriceListId, PriceSetId},
    price_list::{PriceList, PriceListRule},
    price_set::{PriceSet, PriceSetMoneyAmount},
    rules::{PriceRule, RuleType},
    snapshot::PricingSnapshot,
    types::{Currency, MoneyAmount},
};

/// Creates a new test default instance of the implementing type.
pub trait TestDefault {
    /// Creates a new test default instance.
    fn test_default() -> Self;
}

impl TestDefault for Currency {
    /// Creates a new test default [`Currency`] instance (EUR).
    fn test_default() -> Self {
        Self::new("EUR", "€", "€", "Euro")
    }
}

impl TestDefault for PricingContext {
    /// Creates a new test default [`PricingContext`] instance (EUR, fixed instant).
    fn test_default() -> Self {
        Self::new("EUR").with_now(evaluation_instant())
    }
}

/// Returns the fixed evaluation instant used by snapshot stubs.
#[must_use]
pub fn evaluation_instant() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-07-01T12:00:00Z")
        .expect("valid RFC 3339 timestamp")
        .with_timezone(&Utc)
}

/// Returns a stub EUR currency.
#[fixture]
pub fn currency_eur() -> Currency {
    Currency::test_default()
}

/// Returns a stub USD currency.
#[fixture]
pub fn currency_usd() -> Currency {
    Currency::new("USD", "$", "$", "US Dollar")
}

/// Returns a stub EUR context pinned to the stub evaluation instant.
#[fixture]
pub fn context_eur() -> PricingContext {
    PricingContext::test_default()
}

fn add_standalone(
    snapshot: &mut PricingSnapshot,
    set: PriceSet,
    id: &str,
    amount: Decimal,
    rules: Vec<PriceRule>,
) -> PriceSet {
    let money_amount_id = MoneyAmountId::new(id);
    snapshot.add_money_amount(MoneyAmount::new(
        money_amount_id,
        Ustr::from("EUR"),
        amount,
        None,
        None,
    ));
    set.with_price(PriceSetMoneyAmount::standalone(money_amount_id, rules))
}

/// Returns a stub snapshot with one price set of four standalone EUR amounts:
/// default=500, region PL=400, city krakow=450, region PL & city warsaw=500.
#[fixture]
pub fn snapshot_eur_region_city() -> PricingSnapshot {
    let mut snapshot = PricingSnapshot::new();
    snapshot.add_currency(Currency::test_default());
    snapshot.add_rule_type(RuleType::new("region_id", "Region", 10));
    snapshot.add_rule_type(RuleType::new("city", "City", 5));

    let mut set = PriceSet::new(PriceSetId::new("pset-001"))
        .with_rule_type("region_id")
        .with_rule_type("city");
    set = add_standalone(&mut snapshot, set, "ma-default", Decimal::from(500), Vec::new());
    set = add_standalone(
        &mut snapshot,
        set,
        "ma-region-pl",
        Decimal::from(400),
        vec![PriceRule::exact("region_id", "PL", 0)],
    );
    set = add_standalone(
        &mut snapshot,
        set,
        "ma-city-krakow",
        Decimal::from(450),
        vec![PriceRule::exact("city", "krakow", 0)],
    );
    set = add_standalone(
        &mut snapshot,
        set,
        "ma-pl-warsaw",
        Decimal::from(500),
        vec![
            PriceRule::exact("region_id", "PL", 0),
            PriceRule::exact("city", "warsaw", 0),
        ],
    );
    snapshot.add_price_set(set);
    snapshot
}

/// Returns the stub snapshot extended with an active PL sale list holding
/// amounts of 400 and 450 EUR, valid around the stub evaluation instant.
#[fixture]
pub fn snapshot_with_sale_list(snapshot_eur_region_city: PricingSnapshot) -> PricingSnapshot {
    let mut snapshot = snapshot_eur_region_city;
    let list_id = PriceListId::new("plist-sale-pl");
    snapshot.add_price_list(
        PriceList::builder(list_id)
            .status(PriceListStatus::Active)
            .list_type(PriceListType::Sale)
            .starts_at(Some(evaluation_instant() - chrono::Duration::days(1)))
            .ends_at(Some(evaluation_instant() + chrono::Duration::days(1)))
            .rules(vec![PriceListRule::new("region_id", &["PL"])])
            .build()
            .expect("stub price list"),
    );

    let mut set = snapshot
        .price_set(&PriceSetId::new("pset-001"))
        .expect("stub price set")
        .clone();
    for (id, amount) in [("ma-sale-400", 400), ("ma-sale-450", 450)] {
        let money_amount_id = MoneyAmountId::new(id);
        snapshot.add_money_amount(MoneyAmount::new(
            money_amount_id,
            Ustr::from("EUR"),
            Decimal::from(amount),
            None,
            None,
        ));
        set = set.with_price(PriceSetMoneyAmount::in_price_list(money_amount_id, list_id));
    }
    snapshot.add_price_set(set);
    snapshot
}
