//! Login attempt input types.
//!
//! A login attempt is an explicit tagged value decided by the transport
//! layer before the coordinator sees it. The coordinator never infers the
//! path from ambient request state. Attempts are ephemeral and never
//! persisted.

/// An identity claim supplied by a third-party identity provider.
///
/// Trusted as-is by the core; the transport layer is responsible for having
/// verified the provider callback before constructing one.
#[derive(Debug, Clone)]
pub struct ProviderAssertion {
    /// Which provider asserted the identity.
    pub provider: String,
    /// The asserted email address.
    pub email: String,
    /// Display name claim, if the provider supplied one. Not synced onto
    /// existing users on repeat login.
    pub name: Option<String>,
}

/// One login attempt, tagged by credential source.
#[derive(Debug, Clone)]
pub enum LoginAttempt {
    /// An external identity-provider assertion.
    Assertion(ProviderAssertion),
    /// A local email and plaintext secret pair.
    Local { email: String, password: String },
}
