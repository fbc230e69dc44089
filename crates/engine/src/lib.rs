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

//! Price resolution engine for the *tarifa* pricing workspace.
//!
//! The engine is a pure function over an immutable
//! [`tarifa_model::snapshot::PricingSnapshot`]: given a batch of price-set IDs
//! and a [`tarifa_model::context::PricingContext`], it resolves per set the
//! best-matching *calculated* price (the promotional/listed price) and
//! *original* price (the reference price). It holds no mutable state, takes
//! no locks, and performs no I/O; per-set resolution is independent, so a
//! caller may parallelize across sets as long as it preserves request order.
//!
//! # Organization
//!
//! - [`matcher`]: rule-constraint satisfaction and match cardinality.
//! - [`validator`]: price-list usability (status, window, rules).
//! - [`select`]: calculated and original price selection policies.
//! - [`resolver`]: batch assembly of the final price records.
//! - [`error`]: the call-level error taxonomy.

pub mod error;
pub mod matcher;
pub mod resolver;
pub mod select;
pub mod validator;

// Re-exports
pub use error::PricingError;
pub use matcher::RuleMatch;
pub use resolver::{PriceSetPrice, PriceSourceInfo, resolve_prices};
