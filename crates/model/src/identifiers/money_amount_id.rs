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

//! Represents a valid money amount ID.

use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};
use tarifa_core::correctness::{FAILED, check_valid_string};
use ustr::Ustr;

/// Represents a valid money amount ID.
#[repr(C)]
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MoneyAmountId(Ustr);

impl MoneyAmountId {
    /// Creates a new [`MoneyAmountId`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is an empty or whitespace-only string.
    pub fn new_checked<T: AsRef<str>>(value: T) -> anyhow::Result<Self> {
        let value = value.as_ref();
        check_valid_string(value, stringify!(value))?;
        Ok(Self(Ustr::from(value)))
    }

    /// Creates a new [`MoneyAmountId`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a valid string.
    pub fn new<T: AsRef<str>>(value: T) -> Self {
        Self::new_checked(value).expect(FAILED)
    }

    /// Returns the inner identifier value.
    #[must_use]
    pub fn inner(&self) -> Ustr {
        self.0
    }

    /// Returns the inner identifier value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Debug for MoneyAmountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}('{}')", stringify!(MoneyAmountId), self.0)
    }
}

impl Display for MoneyAmountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MoneyAmountId {
    fn from(value: &str) -> Self {
        Self::new(value)
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
    fn test_string_reprs() {
        let id = MoneyAmountId::new("ma-500-eur");
        assert_eq!(id.as_str(), "ma-500-eur");
        assert_eq!(format!("{id}"), "ma-500-eur");
        assert_eq!(format!("{id:?}"), "MoneyAmountId('ma-500-eur')");
    }

    #[rstest]
    fn test_new_checked_invalid() {
        assert!(MoneyAmountId::new_checked("").is_err());
    }
}
