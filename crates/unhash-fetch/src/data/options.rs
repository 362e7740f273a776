use std::time::Duration;

/// How the race picks its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettlePolicy {
    /// The first leg to settle decides, whether it succeeded or failed.
    ///
    /// A fast failure ends the race even if a slower host would have
    /// delivered valid content.
    #[default]
    FirstSettled,

    /// Failed legs are set aside and the race continues until a leg succeeds.
    /// If none does, every failure is reported.
    FirstSuccess,
}

/// Configuration for one resolution.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use unhash_fetch::{FetchOptions, SettlePolicy};
///
/// let options = FetchOptions::default()
///     .policy(SettlePolicy::FirstSuccess)
///     .leg_timeout(Some(Duration::from_secs(10)));
/// assert!(options.verify);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Hash each body while it streams and reject it unless it matches the
    /// requested digest.
    ///
    /// Default: true
    pub verify: bool,

    /// Default: [`SettlePolicy::FirstSettled`]
    pub policy: SettlePolicy,

    /// Fail a leg whose response status is not 2xx before reading its body.
    /// When false, any status is accepted and the body is treated as the
    /// candidate content.
    ///
    /// Default: false
    pub require_success_status: bool,

    /// Upper bound on a single leg, from request to end of body.
    /// `None` lets a hung leg keep the race pending.
    ///
    /// Default: None
    pub leg_timeout: Option<Duration>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            verify: true,
            policy: SettlePolicy::default(),
            require_success_status: false,
            leg_timeout: None,
        }
    }
}

impl FetchOptions {
    #[must_use]
    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    #[must_use]
    pub fn policy(mut self, policy: SettlePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn require_success_status(mut self, require: bool) -> Self {
        self.require_success_status = require;
        self
    }

    #[must_use]
    pub fn leg_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.leg_timeout = timeout;
        self
    }
}
