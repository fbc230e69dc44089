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

//! Identifiers for the pricing domain model.
//!
//! All identifiers are thin newtypes over interned strings ([`ustr::Ustr`]),
//! cheap to copy and compare, with `new` panicking on invalid input and
//! `new_checked` returning a `Result`.

pub mod money_amount_id;
pub mod price_list_id;
pub mod price_set_id;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

// Re-exports
pub use money_amount_id::MoneyAmountId;
pub use price_list_id::PriceListId;
pub use price_set_id::PriceSetId;
