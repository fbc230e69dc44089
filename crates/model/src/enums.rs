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

//! Enumerations for the pricing domain model.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, FromRepr};

/// The lifecycle status of a price list.
///
/// Only `Active` lists are ever considered during price resolution; a `Draft`
/// list is invisible to the engine regardless of its validity window or rules.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceListStatus {
    /// The list is being prepared and must not affect resolution.
    #[default]
    Draft = 1,
    /// The list participates in calculated price selection.
    Active = 2,
}

/// The pricing semantics of a price list.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceListType {
    /// A promotional list: its amounts compete for the calculated price only.
    #[default]
    Sale = 1,
    /// An overriding list: its selected amount replaces the original price too.
    Override = 2,
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(PriceListStatus::Draft, "DRAFT")]
    #[case(PriceListStatus::Active, "ACTIVE")]
    fn test_price_list_status_display(#[case] value: PriceListStatus, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
        assert_eq!(PriceListStatus::from_str(expected).unwrap(), value);
    }

    #[rstest]
    #[case(PriceListType::Sale, "SALE")]
    #[case(PriceListType::Override, "OVERRIDE")]
    fn test_price_list_type_display(#[case] value: PriceListType, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
        assert_eq!(PriceListType::from_str(expected).unwrap(), value);
    }

    #[rstest]
    fn test_case_insensitive_parse() {
        assert_eq!(
            PriceListType::from_str("override").unwrap(),
            PriceListType::Override
        );
        assert_eq!(
            PriceListStatus::from_str("active").unwrap(),
            PriceListStatus::Active
        );
    }
}
