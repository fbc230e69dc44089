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

//! Helper functions for stubbing identifiers in tests.

use rstest::fixture;

use super::{MoneyAmountId, PriceListId, PriceSetId};
use crate::stubs::TestDefault;

impl TestDefault for PriceSetId {
    /// Creates a new test default [`PriceSetId`] instance.
    fn test_default() -> Self {
        Self::from("pset-001")
    }
}

impl TestDefault for MoneyAmountId {
    /// Creates a new test default [`MoneyAmountId`] instance.
    fn test_default() -> Self {
        Self::from("ma-001")
    }
}

impl TestDefault for PriceListId {
    /// Creates a new test default [`PriceListId`] instance.
    fn test_default() -> Self {
        Self::from("plist-001")
    }
}

/// Returns a stub price set ID.
#[fixture]
pub fn price_set_id() -> PriceSetId {
    PriceSetId::test_default()
}

/// Returns a stub money amount ID.
#[fixture]
pub fn money_amount_id() -> MoneyAmountId {
    MoneyAmountId::test_default()
}

/// Returns a stub price list ID.
#[fixture]
pub fn price_list_id() -> PriceListId {
    PriceListId::test_default()
}
