//! Inclusion verifier doubles

use reserve_core::{InclusionClaim, InclusionVerifier, VerificationError};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Canned verifier outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject,
    Fail(String),
}

/// Verifier that returns the same verdict for every claim
#[derive(Debug, Clone)]
pub struct ScriptedVerifier {
    verdict: Verdict,
}

impl ScriptedVerifier {
    pub fn new(verdict: Verdict) -> Self {
        Self { verdict }
    }

    pub fn accepting() -> Self {
        Self::new(Verdict::Accept)
    }

    pub fn rejecting() -> Self {
        Self::new(Verdict::Reject)
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(Verdict::Fail(message.into()))
    }

    /// Change the verdict for subsequent calls
    pub fn set_verdict(&mut self, verdict: Verdict) {
        self.verdict = verdict;
    }
}

impl InclusionVerifier for ScriptedVerifier {
    fn verify(&self, _claim: &InclusionClaim) -> Result<bool, VerificationError> {
        match &self.verdict {
            Verdict::Accept => Ok(true),
            Verdict::Reject => Ok(false),
            Verdict::Fail(message) => Err(VerificationError::unavailable(message.clone())),
        }
    }
}

/// Wraps a verifier and counts how often it is consulted
#[derive(Debug, Default)]
pub struct CountingVerifier<V> {
    inner: V,
    calls: AtomicUsize,
}

impl<V> CountingVerifier<V> {
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `verify` calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn inner_mut(&mut self) -> &mut V {
        &mut self.inner
    }
}

impl<V: InclusionVerifier> InclusionVerifier for CountingVerifier<V> {
    fn verify(&self, claim: &InclusionClaim) -> Result<bool, VerificationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.verify(claim)
    }
}
