//! Ledger invariant properties
//!
//! Random sequences of mint, burn and transfer calls must preserve:
//! - conservation: sum of balances == total supply
//! - the supply cap
//! - no state change on a rejected call

use proptest::prelude::*;
use reserve_core::{AccountId, Amount, ErrorKind, Ledger, MAX_SUPPLY};
use reserve_ledger::TokenLedger;

#[derive(Debug, Clone)]
enum Op {
    Mint(usize, u128),
    Burn(usize, u128),
    Transfer(usize, usize, u128),
}

const ACCOUNTS: usize = 4;

fn account(i: usize) -> AccountId {
    AccountId::from_name(&format!("holder-{i}"))
}

fn arb_amount() -> impl Strategy<Value = u128> {
    prop_oneof![
        Just(0u128),
        1u128..1_000,
        Just(MAX_SUPPLY.base_units()),
        (0u128..=MAX_SUPPLY.base_units()),
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..ACCOUNTS, arb_amount()).prop_map(|(a, n)| Op::Mint(a, n)),
        (0..ACCOUNTS, arb_amount()).prop_map(|(a, n)| Op::Burn(a, n)),
        (0..ACCOUNTS, 0..ACCOUNTS, arb_amount()).prop_map(|(a, b, n)| Op::Transfer(a, b, n)),
    ]
}

fn sum_of_balances(ledger: &TokenLedger) -> u128 {
    ledger.holders().map(|(_, b)| b.base_units()).sum()
}

proptest! {
    #[test]
    fn invariants_hold_after_every_call(ops in prop::collection::vec(arb_op(), 1..60)) {
        let mut ledger = TokenLedger::new();

        for op in ops {
            let before = ledger.clone();
            let result = match op {
                Op::Mint(a, n) => ledger.mint(&account(a), Amount::from_base_units(n)),
                Op::Burn(a, n) => ledger.burn(&account(a), Amount::from_base_units(n)),
                Op::Transfer(a, b, n) => {
                    ledger.transfer(&account(a), &account(b), Amount::from_base_units(n))
                }
            };

            prop_assert_eq!(sum_of_balances(&ledger), ledger.total_supply().base_units());
            prop_assert!(ledger.total_supply() <= MAX_SUPPLY);
            if result.is_err() {
                prop_assert_eq!(&ledger, &before);
            }
        }
    }

    #[test]
    fn transfers_never_change_supply(
        seed in 1u128..1_000_000,
        transfers in prop::collection::vec((0..ACCOUNTS, 0..ACCOUNTS, 0u128..2_000_000), 1..40),
    ) {
        let mut ledger = TokenLedger::new();
        for i in 0..ACCOUNTS {
            ledger.mint(&account(i), Amount::from_base_units(seed)).unwrap();
        }
        let supply = ledger.total_supply();

        for (from, to, n) in transfers {
            let _ = ledger.transfer(&account(from), &account(to), Amount::from_base_units(n));
            prop_assert_eq!(ledger.total_supply(), supply);
            prop_assert_eq!(sum_of_balances(&ledger), supply.base_units());
        }
    }

    #[test]
    fn overdraft_is_always_insufficient_balance(held in 0u128..1_000, extra in 1u128..1_000) {
        let mut ledger = TokenLedger::new();
        let holder = account(0);
        ledger.mint(&holder, Amount::from_base_units(held)).unwrap();
        let request = Amount::from_base_units(held + extra);

        let burn = ledger.burn(&holder, request).unwrap_err();
        prop_assert_eq!(burn.kind(), ErrorKind::InsufficientBalance);
        let transfer = ledger.transfer(&holder, &account(1), request).unwrap_err();
        prop_assert_eq!(transfer.kind(), ErrorKind::InsufficientBalance);
        prop_assert_eq!(ledger.balance_of(&holder), Amount::from_base_units(held));
    }
}

#[test]
fn mint_past_cap_leaves_state_unchanged() {
    let mut ledger = TokenLedger::new();
    let near_cap = MAX_SUPPLY.checked_sub(Amount::from_base_units(10)).unwrap();
    ledger.mint(&account(0), near_cap).unwrap();
    let before = ledger.clone();

    let err = ledger
        .mint(&account(1), Amount::from_base_units(15))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SupplyExceeded);
    assert_eq!(ledger, before);
}
