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

//! Price-list usability checks.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use tarifa_model::{enums::PriceListStatus, price_list::PriceList};
use ustr::Ustr;

use crate::matcher::match_price_list_rules;

/// Returns true if `price_list` is currently usable for the given attributes
/// at the evaluation instant `now`.
///
/// A list is valid when it is active, `now` falls inside its optional
/// `[starts_at, ends_at]` window, and all of its rules are fully matched
/// (a list with zero rules is always rule-valid). The member money amounts
/// of a valid list become candidates for calculated-price selection.
#[must_use]
pub fn is_price_list_valid(
    price_list: &PriceList,
    attributes: &IndexMap<Ustr, Ustr>,
    now: DateTime<Utc>,
) -> bool {
    if price_list.status != PriceListStatus::Active {
        return false;
    }
    if price_list.starts_at.is_some_and(|starts_at| now < starts_at) {
        return false;
    }
    if price_list.ends_at.is_some_and(|ends_at| now > ends_at) {
        return false;
    }
    match_price_list_rules(&price_list.rules, attributes).full_match
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use chrono::Duration;
    use rstest::rstest;
    use tarifa_model::{
        identifiers::PriceListId,
        price_list::PriceListRule,
        stubs::evaluation_instant,
    };

    use super::*;

    fn attributes(entries: &[(&str, &str)]) -> IndexMap<Ustr, Ustr> {
        entries
            .iter()
            .map(|(k, v)| (Ustr::from(k), Ustr::from(v)))
            .collect()
    }

    fn active_list() -> PriceList {
        PriceList::builder(PriceListId::new("plist-1"))
            .status(PriceListStatus::Active)
            .build()
            .unwrap()
    }

    #[rstest]
    fn test_draft_list_is_never_valid() {
        let list = PriceList::builder(PriceListId::new("plist-1")).build().unwrap();
        assert!(!is_price_list_valid(&list, &attributes(&[]), evaluation_instant()));
    }

    #[rstest]
    fn test_active_unbounded_list_is_valid() {
        assert!(is_price_list_valid(
            &active_list(),
            &attributes(&[]),
            evaluation_instant()
        ));
    }

    #[rstest]
    #[case(-2, -1, false)] // Expired
    #[case(1, 2, false)] // Not yet started
    #[case(-1, 1, true)] // In window
    fn test_validity_window(#[case] start_days: i64, #[case] end_days: i64, #[case] expected: bool) {
        let now = evaluation_instant();
        let mut list = active_list();
        list.starts_at = Some(now + Duration::days(start_days));
        list.ends_at = Some(now + Duration::days(end_days));
        assert_eq!(is_price_list_valid(&list, &attributes(&[]), now), expected);
    }

    #[rstest]
    fn test_window_bounds_are_inclusive() {
        let now = evaluation_instant();
        let mut list = active_list();
        list.starts_at = Some(now);
        list.ends_at = Some(now);
        assert!(is_price_list_valid(&list, &attributes(&[]), now));
    }

    #[rstest]
    fn test_all_rules_must_match() {
        let mut list = active_list();
        list.rules = vec![
            PriceListRule::new("region_id", &["PL", "DE"]),
            PriceListRule::new("customer_group", &["vip"]),
        ];

        assert!(is_price_list_valid(
            &list,
            &attributes(&[("region_id", "DE"), ("customer_group", "vip")]),
            evaluation_instant(),
        ));
        assert!(!is_price_list_valid(
            &list,
            &attributes(&[("region_id", "DE")]),
            evaluation_instant(),
        ));
    }
}
