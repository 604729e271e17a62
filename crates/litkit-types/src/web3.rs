//! Web3 provider handle.

/// A connected wallet provider and the account it exposes.
///
/// `P` is whatever provider object the caller's wallet stack hands out; this
/// crate never inspects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Web3Provider<P> {
    pub provider: P,
    pub account: String,
}

impl<P> Web3Provider<P> {
    pub fn new(provider: P, account: impl Into<String>) -> Self {
        Self {
            provider,
            account: account.into(),
        }
    }

    /// Swap the provider object, keeping the account.
    pub fn map_provider<Q>(self, f: impl FnOnce(P) -> Q) -> Web3Provider<Q> {
        Web3Provider {
            provider: f(self.provider),
            account: self.account,
        }
    }
}
