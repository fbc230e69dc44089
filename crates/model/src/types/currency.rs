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

//! Represents a currency as immutable reference data.

use std::{
    fmt::Display,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};
use tarifa_core::correctness::{FAILED, check_valid_string};
use ustr::Ustr;

/// Represents a currency as immutable reference data.
///
/// Currencies are passed explicitly into the engine as part of its input
/// snapshot; there is no process-wide registry. The `code` is the key matched
/// against the context's `currency_code`.
#[derive(Clone, Debug, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// The ISO-style currency code (e.g. "EUR"), unique per snapshot.
    pub code: Ustr,
    /// The display symbol (e.g. "€" or "zł").
    pub symbol: String,
    /// The symbol as written natively in the currency's locale.
    pub symbol_native: String,
    /// The full currency name.
    pub name: String,
}

impl Currency {
    /// Creates a new [`Currency`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `code` or `name` is an empty or whitespace-only string.
    pub fn new_checked<T: AsRef<str>>(
        code: T,
        symbol: T,
        symbol_native: T,
        name: T,
    ) -> anyhow::Result<Self> {
        check_valid_string(code.as_ref(), stringify!(code))?;
        check_valid_string(name.as_ref(), stringify!(name))?;
        Ok(Self {
            code: Ustr::from(code.as_ref()),
            symbol: symbol.as_ref().to_string(),
            symbol_native: symbol_native.as_ref().to_string(),
            name: name.as_ref().to_string(),
        })
    }

    /// Creates a new [`Currency`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `code` or `name` is not a valid string.
    pub fn new<T: AsRef<str>>(code: T, symbol: T, symbol_native: T, name: T) -> Self {
        Self::new_checked(code, symbol, symbol_native, name).expect(FAILED)
    }
}

// Identity is the currency code; the remaining fields are display data.
impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_currency_new() {
        let eur = Currency::new("EUR", "€", "€", "Euro");
        assert_eq!(eur.code.as_str(), "EUR");
        assert_eq!(eur.name, "Euro");
        assert_eq!(eur.to_string(), "EUR");
    }

    #[rstest]
    fn test_currency_equality_is_by_code() {
        let a = Currency::new("PLN", "zł", "zł", "Polish złoty");
        let b = Currency::new("PLN", "PLN", "zł", "Zloty");
        assert_eq!(a, b);
    }

    #[rstest]
    fn test_currency_new_checked_invalid_code() {
        assert!(Currency::new_checked("", "€", "€", "Euro").is_err());
    }
}
