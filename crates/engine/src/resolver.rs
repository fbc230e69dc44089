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

//! Batch price resolution and assembly of the final price records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tarifa_model::{
    context::PricingContext,
    enums::PriceListType,
    identifiers::{MoneyAmountId, PriceListId, PriceSetId},
    snapshot::PricingSnapshot,
};
use ustr::Ustr;

use crate::{
    error::PricingError,
    matcher::known_attributes,
    select::{SelectedPrice, select_calculated, select_original},
};

/// Provenance of one side of a resolved price record.
///
/// All fields are `None` when the side could not be resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSourceInfo {
    /// The money amount the price came from.
    pub money_amount_id: Option<MoneyAmountId>,
    /// The price list the amount belongs to, if any.
    pub price_list_id: Option<PriceListId>,
    /// The pricing semantics of that list.
    pub price_list_type: Option<PriceListType>,
    /// The minimum purchase quantity the amount applies from.
    pub min_quantity: Option<u64>,
    /// The maximum purchase quantity the amount applies up to.
    pub max_quantity: Option<u64>,
}

impl PriceSourceInfo {
    fn from_selected(selected: &SelectedPrice<'_>) -> Self {
        Self {
            money_amount_id: Some(selected.money_amount.id),
            price_list_id: selected.price_list.map(|pl| pl.id),
            price_list_type: selected.price_list.map(|pl| pl.list_type),
            min_quantity: selected.money_amount.min_quantity,
            max_quantity: selected.money_amount.max_quantity,
        }
    }
}

/// The resolved price record for one requested price set.
///
/// The *calculated* price is the one a buyer pays (a promotional list price
/// when one applies, otherwise the original); the *original* price is the
/// reference to display alongside it. A set that could not be resolved at all
/// keeps its ID and carries `None` everywhere else.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSetPrice {
    /// The requested price set.
    pub price_set_id: PriceSetId,
    /// True if the calculated price came from a price list.
    pub is_calculated_price_price_list: bool,
    /// The calculated amount, if resolved.
    pub calculated_amount: Option<Decimal>,
    /// True if the original price came from a price list.
    pub is_original_price_price_list: bool,
    /// The original amount, if resolved.
    pub original_amount: Option<Decimal>,
    /// The context currency, when at least one side resolved.
    pub currency_code: Option<Ustr>,
    /// Provenance of the calculated side.
    pub calculated_price: PriceSourceInfo,
    /// Provenance of the original side.
    pub original_price: PriceSourceInfo,
}

impl PriceSetPrice {
    /// Creates a record for a set with no resolvable price.
    #[must_use]
    pub fn absent(price_set_id: PriceSetId) -> Self {
        Self {
            price_set_id,
            is_calculated_price_price_list: false,
            calculated_amount: None,
            is_original_price_price_list: false,
            original_amount: None,
            currency_code: None,
            calculated_price: PriceSourceInfo::default(),
            original_price: PriceSourceInfo::default(),
        }
    }
}

/// Resolves the best calculated and original price for every requested price
/// set against `snapshot` and `context`.
///
/// The output preserves request order, one record per requested ID. A set the
/// snapshot does not know, or one with no matching amounts, degrades to an
/// all-absent record rather than failing the batch.
///
/// # Errors
///
/// Returns an error if the context currency is empty or no IDs were supplied.
pub fn resolve_prices(
    snapshot: &PricingSnapshot,
    price_set_ids: &[PriceSetId],
    context: &PricingContext,
) -> Result<Vec<PriceSetPrice>, PricingError> {
    if context.currency_code.as_str().trim().is_empty() {
        return Err(PricingError::InvalidContext(format!(
            "missing mandatory `{}` entry",
            tarifa_model::context::CURRENCY_CODE_KEY,
        )));
    }
    if price_set_ids.is_empty() {
        return Err(PricingError::EmptyBatch);
    }

    let attributes = known_attributes(snapshot, context);
    Ok(price_set_ids
        .iter()
        .map(|id| resolve_price_set(snapshot, *id, context, &attributes))
        .collect())
}

fn resolve_price_set(
    snapshot: &PricingSnapshot,
    price_set_id: PriceSetId,
    context: &PricingContext,
    attributes: &indexmap::IndexMap<Ustr, Ustr>,
) -> PriceSetPrice {
    let Some(price_set) = snapshot.price_set(&price_set_id) else {
        log::warn!("Requested price set {price_set_id} not in snapshot");
        return PriceSetPrice::absent(price_set_id);
    };

    let original = select_original(snapshot, price_set, context, attributes);
    // No valid list price: the original doubles as the calculated price
    let calculated = select_calculated(snapshot, price_set, context, attributes).or(original);
    // An override list replaces the reference price outright
    let original = match calculated {
        Some(selected)
            if selected
                .price_list
                .is_some_and(|pl| pl.list_type == PriceListType::Override) =>
        {
            Some(selected)
        }
        _ => original,
    };

    if calculated.is_none() && original.is_none() {
        return PriceSetPrice::absent(price_set_id);
    }

    PriceSetPrice {
        price_set_id,
        is_calculated_price_price_list: calculated.is_some_and(|s| s.price_list.is_some()),
        calculated_amount: calculated.map(|s| s.money_amount.amount),
        is_original_price_price_list: original.is_some_and(|s| s.price_list.is_some()),
        original_amount: original.map(|s| s.money_amount.amount),
        currency_code: Some(context.currency_code),
        calculated_price: calculated
            .as_ref()
            .map(PriceSourceInfo::from_selected)
            .unwrap_or_default(),
        original_price: original
            .as_ref()
            .map(PriceSourceInfo::from_selected)
            .unwrap_or_default(),
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use tarifa_model::{
        enums::PriceListStatus,
        price_set::PriceSet,
        stubs::*,
    };

    use super::*;

    const PSET: &str = "pset-001";

    fn resolve_one(snapshot: &PricingSnapshot, context: &PricingContext) -> PriceSetPrice {
        let mut records = resolve_prices(snapshot, &[PriceSetId::new(PSET)], context).unwrap();
        assert_eq!(records.len(), 1);
        records.remove(0)
    }

    #[rstest]
    fn test_default_context_falls_back_to_original(
        snapshot_eur_region_city: PricingSnapshot,
        context_eur: PricingContext,
    ) {
        let record = resolve_one(&snapshot_eur_region_city, &context_eur);
        assert_eq!(record.calculated_amount, Some(dec!(500)));
        assert_eq!(record.original_amount, Some(dec!(500)));
        assert!(!record.is_calculated_price_price_list);
        assert!(!record.is_original_price_price_list);
        assert_eq!(record.currency_code, Some(Ustr::from("EUR")));
        assert_eq!(
            record.calculated_price.money_amount_id,
            Some(MoneyAmountId::new("ma-default"))
        );
        assert_eq!(record.calculated_price.price_list_id, None);
    }

    #[rstest]
    fn test_region_context_selects_exact_original(
        snapshot_eur_region_city: PricingSnapshot,
        context_eur: PricingContext,
    ) {
        let context = context_eur.with_attribute("region_id", "PL");
        let record = resolve_one(&snapshot_eur_region_city, &context);
        assert_eq!(record.calculated_amount, Some(dec!(400)));
        assert_eq!(record.original_amount, Some(dec!(400)));
        assert_eq!(
            record.original_price.money_amount_id,
            Some(MoneyAmountId::new("ma-region-pl"))
        );
    }

    #[rstest]
    fn test_city_context_selects_city_amount(
        snapshot_eur_region_city: PricingSnapshot,
        context_eur: PricingContext,
    ) {
        let context = context_eur.with_attribute("city", "krakow");
        let record = resolve_one(&snapshot_eur_region_city, &context);
        assert_eq!(record.calculated_amount, Some(dec!(450)));
        assert_eq!(record.original_amount, Some(dec!(450)));
    }

    #[rstest]
    fn test_two_key_context_prefers_exact_two_rule_match(
        snapshot_eur_region_city: PricingSnapshot,
        context_eur: PricingContext,
    ) {
        let context = context_eur
            .with_attribute("region_id", "PL")
            .with_attribute("city", "warsaw");
        let record = resolve_one(&snapshot_eur_region_city, &context);
        assert_eq!(
            record.original_price.money_amount_id,
            Some(MoneyAmountId::new("ma-pl-warsaw"))
        );
        assert_eq!(record.original_amount, Some(dec!(500)));
    }

    #[rstest]
    fn test_partial_match_ranks_two_rule_amount_first(
        snapshot_eur_region_city: PricingSnapshot,
        context_eur: PricingContext,
    ) {
        // No exact match: the amount scoped by two rules outranks the
        // one-rule amounts even though only its region rule matches
        let context = context_eur
            .with_attribute("region_id", "PL")
            .with_attribute("city", "krakow");
        let record = resolve_one(&snapshot_eur_region_city, &context);
        assert_eq!(record.calculated_amount, Some(dec!(500)));
        assert_eq!(record.original_amount, Some(dec!(500)));
        assert_eq!(
            record.original_price.money_amount_id,
            Some(MoneyAmountId::new("ma-pl-warsaw"))
        );
    }

    #[rstest]
    fn test_sale_list_lowest_amount_with_partial_original(
        snapshot_with_sale_list: PricingSnapshot,
        context_eur: PricingContext,
    ) {
        let context = context_eur
            .with_attribute("region_id", "PL")
            .with_attribute("city", "krakow");
        let record = resolve_one(&snapshot_with_sale_list, &context);

        assert_eq!(record.calculated_amount, Some(dec!(400)));
        assert!(record.is_calculated_price_price_list);
        assert_eq!(record.original_amount, Some(dec!(500)));
        assert!(!record.is_original_price_price_list);
    }

    #[rstest]
    fn test_sale_list_sets_calculated_but_not_original(
        snapshot_with_sale_list: PricingSnapshot,
        context_eur: PricingContext,
    ) {
        let context = context_eur.with_attribute("region_id", "PL");
        let record = resolve_one(&snapshot_with_sale_list, &context);

        assert_eq!(record.calculated_amount, Some(dec!(400)));
        assert!(record.is_calculated_price_price_list);
        assert_eq!(
            record.calculated_price.price_list_id,
            Some(PriceListId::new("plist-sale-pl"))
        );
        assert_eq!(record.calculated_price.price_list_type, Some(PriceListType::Sale));

        assert_eq!(record.original_amount, Some(dec!(400)));
        assert!(!record.is_original_price_price_list);
        assert_eq!(
            record.original_price.money_amount_id,
            Some(MoneyAmountId::new("ma-region-pl"))
        );
    }

    #[rstest]
    fn test_override_list_replaces_original(
        snapshot_with_sale_list: PricingSnapshot,
        context_eur: PricingContext,
    ) {
        let mut snapshot = snapshot_with_sale_list;
        let mut list = snapshot
            .price_list(&PriceListId::new("plist-sale-pl"))
            .unwrap()
            .clone();
        list.list_type = PriceListType::Override;
        snapshot.add_price_list(list);

        let context = context_eur.with_attribute("region_id", "PL");
        let record = resolve_one(&snapshot, &context);

        assert_eq!(record.calculated_amount, Some(dec!(400)));
        assert_eq!(record.original_amount, Some(dec!(400)));
        assert!(record.is_calculated_price_price_list);
        assert!(record.is_original_price_price_list);
        assert_eq!(record.calculated_price, record.original_price);
        assert_eq!(record.original_price.price_list_type, Some(PriceListType::Override));
    }

    #[rstest]
    fn test_inactive_list_falls_back_to_original(
        snapshot_with_sale_list: PricingSnapshot,
        context_eur: PricingContext,
    ) {
        let mut snapshot = snapshot_with_sale_list;
        let mut list = snapshot
            .price_list(&PriceListId::new("plist-sale-pl"))
            .unwrap()
            .clone();
        list.status = PriceListStatus::Draft;
        snapshot.add_price_list(list);

        let context = context_eur.with_attribute("region_id", "PL");
        let record = resolve_one(&snapshot, &context);
        assert_eq!(record.calculated_amount, Some(dec!(400)));
        assert!(!record.is_calculated_price_price_list);
        assert_eq!(
            record.calculated_price.money_amount_id,
            Some(MoneyAmountId::new("ma-region-pl"))
        );
    }

    #[rstest]
    fn test_missing_price_set_degrades_to_absent(
        snapshot_eur_region_city: PricingSnapshot,
        context_eur: PricingContext,
    ) {
        let ids = [PriceSetId::new("pset-unknown"), PriceSetId::new(PSET)];
        let records = resolve_prices(&snapshot_eur_region_city, &ids, &context_eur).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], PriceSetPrice::absent(PriceSetId::new("pset-unknown")));
        assert_eq!(records[1].calculated_amount, Some(dec!(500)));
    }

    #[rstest]
    fn test_no_candidates_yields_absent_record(
        snapshot_eur_region_city: PricingSnapshot,
    ) {
        let context = PricingContext::new("USD").with_now(evaluation_instant());
        let record = resolve_one(&snapshot_eur_region_city, &context);
        assert_eq!(record, PriceSetPrice::absent(PriceSetId::new(PSET)));
    }

    #[rstest]
    fn test_request_order_is_preserved(
        snapshot_eur_region_city: PricingSnapshot,
        context_eur: PricingContext,
    ) {
        let mut snapshot = snapshot_eur_region_city;
        snapshot.add_price_set(PriceSet::new(PriceSetId::new("pset-002")));

        let ids = [PriceSetId::new("pset-002"), PriceSetId::new(PSET)];
        let records = resolve_prices(&snapshot, &ids, &context_eur).unwrap();
        let out: Vec<_> = records.iter().map(|r| r.price_set_id).collect();
        assert_eq!(out, ids);
    }

    #[rstest]
    fn test_empty_batch_errors(
        snapshot_eur_region_city: PricingSnapshot,
        context_eur: PricingContext,
    ) {
        let result = resolve_prices(&snapshot_eur_region_city, &[], &context_eur);
        assert_eq!(result, Err(PricingError::EmptyBatch));
    }

    #[rstest]
    fn test_blank_currency_errors(snapshot_eur_region_city: PricingSnapshot) {
        let mut context = PricingContext::new("EUR");
        context.currency_code = Ustr::from(" ");
        let result = resolve_prices(&snapshot_eur_region_city, &[PriceSetId::new(PSET)], &context);
        assert!(matches!(result, Err(PricingError::InvalidContext(_))));
    }

    #[rstest]
    fn test_record_serializes(
        snapshot_with_sale_list: PricingSnapshot,
        context_eur: PricingContext,
    ) {
        let context = context_eur.with_attribute("region_id", "PL");
        let record = resolve_one(&snapshot_with_sale_list, &context);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["price_set_id"], "pset-001");
        assert_eq!(json["is_calculated_price_price_list"], true);
        assert_eq!(json["calculated_price"]["price_list_id"], "plist-sale-pl");
    }
}
