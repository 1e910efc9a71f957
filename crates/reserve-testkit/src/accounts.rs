//! Named test accounts
//!
//! Derived from names, so the same fixture is the same account in every test.

use reserve_core::{AccountId, Amount};

/// The genesis controller used throughout the test suite
pub fn controller() -> AccountId {
    AccountId::from_name("controller")
}

pub fn alice() -> AccountId {
    AccountId::from_name("alice")
}

pub fn bob() -> AccountId {
    AccountId::from_name("bob")
}

/// An identity that is never the controller
pub fn mallory() -> AccountId {
    AccountId::from_name("mallory")
}

/// Shorthand for an amount in base units
pub fn units(n: u128) -> Amount {
    Amount::from_base_units(n)
}
