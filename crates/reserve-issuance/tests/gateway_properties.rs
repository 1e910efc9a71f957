//! Property tests for the authorization and proof gates
//!
//! Every rejected call must leave balances, supply, controller and the audit
//! log exactly as they were, whatever the inputs.

use proptest::prelude::*;
use reserve_core::{AccountId, Amount, ErrorKind, InclusionClaim, Memo, TokenMetadata, Txid};
use reserve_issuance::{IssuanceGateway, IssuanceSnapshot};
use reserve_testkit::{alice, bob, controller, units, ScriptedVerifier, SyntheticBlock, Verdict};

#[derive(Debug, Clone)]
enum Call {
    Mint { amount: u128, to: usize },
    Burn { amount: u128, from: usize },
    Transfer { amount: u128, from: usize, to: usize, memo: bool },
    Rotate { to: usize },
}

fn accounts() -> [AccountId; 3] {
    [controller(), alice(), bob()]
}

fn arb_call() -> impl Strategy<Value = Call> {
    prop_oneof![
        (0u128..10_000, 0usize..3).prop_map(|(amount, to)| Call::Mint { amount, to }),
        (0u128..10_000, 0usize..3).prop_map(|(amount, from)| Call::Burn { amount, from }),
        (0u128..10_000, 0usize..3, 0usize..3, any::<bool>()).prop_map(
            |(amount, from, to, memo)| Call::Transfer {
                amount,
                from,
                to,
                memo
            }
        ),
        (0usize..3).prop_map(|to| Call::Rotate { to }),
    ]
}

fn claim(seed: u8) -> InclusionClaim {
    let txid = Txid::of_transaction(&[seed]);
    SyntheticBlock::containing(1_000, txid)
        .claim_for(&txid)
        .unwrap()
}

fn seeded(verdict: Verdict) -> IssuanceGateway<ScriptedVerifier> {
    let mut gw = IssuanceGateway::genesis(
        controller(),
        TokenMetadata::default(),
        ScriptedVerifier::accepting(),
    );
    gw.request_mint(&controller(), units(5_000), &alice(), &claim(0))
        .unwrap();
    gw.request_mint(&controller(), units(2_000), &bob(), &claim(1))
        .unwrap();
    gw.audit_mut().drain();
    gw.verifier_mut().set_verdict(verdict);
    gw
}

fn apply(
    gw: &mut IssuanceGateway<ScriptedVerifier>,
    caller: &AccountId,
    call: &Call,
) -> Result<(), ErrorKind> {
    let accounts = accounts();
    let result = match call {
        Call::Mint { amount, to } => {
            gw.request_mint(caller, units(*amount), &accounts[*to], &claim(2))
        }
        Call::Burn { amount, from } => {
            gw.request_burn(caller, units(*amount), &accounts[*from], &claim(3))
        }
        Call::Transfer {
            amount,
            from,
            to,
            memo,
        } => {
            let memo = memo.then(|| Memo::new(b"prop".to_vec()).unwrap());
            gw.request_transfer(caller, units(*amount), &accounts[*from], &accounts[*to], memo)
        }
        Call::Rotate { to } => gw.rotate_owner(caller, accounts[*to]),
    };
    result.map_err(|err| err.kind())
}

fn observed(gw: &IssuanceGateway<ScriptedVerifier>) -> (IssuanceSnapshot, usize) {
    (gw.snapshot(), gw.audit().len())
}

proptest! {
    #[test]
    fn non_controller_calls_are_forbidden_and_inert(
        call in arb_call(),
        name in "[a-z]{1,12}",
    ) {
        let intruder = AccountId::from_name(&format!("intruder-{name}"));
        let mut gw = seeded(Verdict::Accept);
        let before = observed(&gw);

        prop_assert_eq!(apply(&mut gw, &intruder, &call), Err(ErrorKind::Forbidden));
        prop_assert_eq!(observed(&gw), before);
    }

    #[test]
    fn failing_proof_blocks_every_mint_and_burn(
        amount in 1u128..10_000,
        target in 0usize..3,
        burn in any::<bool>(),
        fail in any::<bool>(),
    ) {
        let verdict = if fail { Verdict::Fail("unreachable oracle".into()) } else { Verdict::Reject };
        let mut gw = seeded(verdict);
        let before = observed(&gw);

        let call = if burn {
            Call::Burn { amount, from: target }
        } else {
            Call::Mint { amount, to: target }
        };

        prop_assert_eq!(apply(&mut gw, &controller(), &call), Err(ErrorKind::InvalidProof));
        prop_assert_eq!(observed(&gw), before);
    }

    #[test]
    fn every_outcome_is_all_or_nothing(calls in prop::collection::vec(arb_call(), 1..40)) {
        let mut gw = seeded(Verdict::Accept);

        for call in &calls {
            let caller = gw.controller();
            let before = observed(&gw);
            match apply(&mut gw, &caller, call) {
                Ok(()) => {}
                Err(_) => prop_assert_eq!(observed(&gw), before),
            }

            let snapshot = gw.snapshot();
            let sum = snapshot
                .ledger
                .balances
                .values()
                .try_fold(Amount::ZERO, |acc, balance| acc.checked_add(*balance));
            prop_assert_eq!(sum, Some(gw.total_supply()));
            prop_assert!(gw.total_supply() <= gw.max_supply());
        }
    }
}
