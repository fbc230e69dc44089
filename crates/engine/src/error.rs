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

//! Error types for price resolution calls.
//!
//! Only conditions fatal to a whole batch surface as errors. A price-set ID
//! with no data yields an all-absent result, and data-integrity conditions
//! (dangling references, ambiguous defaults) degrade per candidate with a
//! warning log, since snapshot consistency is owned by the management layer
//! that produced it.

use thiserror::Error;

/// Represents the errors fatal to a whole price resolution call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// The context is unusable for every selection path.
    #[error("Invalid pricing context: {0}")]
    InvalidContext(String),
    /// No price-set IDs were supplied.
    #[error("Price resolution batch was empty")]
    EmptyBatch,
}
