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

//! Domain model for the *tarifa* price resolution engine.
//!
//! The model abstracts the relational pricing schema (price sets, money
//! amounts, rule types, price rules, price lists and their rules) as immutable
//! in-memory value types, navigable through a [`snapshot::PricingSnapshot`]
//! arena keyed by stable identifiers. All types are plain data: they are
//! materialized by a data-access collaborator before a resolution call and are
//! never mutated by the engine.
//!
//! # Organization
//!
//! - [`identifiers`]: interned-string identifier newtypes.
//! - [`enums`]: price-list status and type enumerations.
//! - [`types`]: currency reference data and money amounts.
//! - [`rules`]: rule types and per-amount price rules.
//! - [`price_list`]: time-bounded, rule-scoped price lists.
//! - [`price_set`]: price sets and their money-amount join rows.
//! - [`snapshot`]: the read-only arena the engine navigates.
//! - [`context`]: the caller-supplied resolution context.

pub mod context;
pub mod enums;
pub mod identifiers;
pub mod price_list;
pub mod price_set;
pub mod rules;
pub mod snapshot;
pub mod types;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;
