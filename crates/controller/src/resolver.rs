/// Lifecycle of the one-shot geolocation auto-detect.
///
/// `Idle → Requesting → Resolved | Failed`; the machine is terminal in both
/// end states. Arming happens at most once per session, when the states
/// catalog first becomes non-empty, so the platform permission prompt is
/// never shown twice.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResolverPhase {
    Idle,
    Requesting,
    Resolved,
    Failed,
}

#[derive(Debug)]
pub struct LocationResolver {
    phase: ResolverPhase,
}

impl LocationResolver {
    pub fn new() -> Self {
        Self {
            phase: ResolverPhase::Idle,
        }
    }

    pub fn phase(&self) -> ResolverPhase {
        self.phase
    }

    /// Arms the auto-detect.
    ///
    /// Returns `true` only on the first call; the phase itself is the
    /// persisted "already attempted" flag, independent of any rendering.
    pub fn arm(&mut self) -> bool {
        if self.phase != ResolverPhase::Idle {
            return false;
        }
        self.phase = ResolverPhase::Requesting;
        true
    }

    /// True while a platform fix or nearest-region lookup is outstanding.
    pub fn is_requesting(&self) -> bool {
        self.phase == ResolverPhase::Requesting
    }

    pub fn resolved(&mut self) {
        self.phase = ResolverPhase::Resolved;
    }

    /// Terminal for permission refusal, platform errors, lookup failures and
    /// invalid lookup results alike; none of them re-arm the machine.
    pub fn failed(&mut self) {
        self.phase = ResolverPhase::Failed;
    }
}

impl Default for LocationResolver {
    fn default() -> Self {
        Self::new()
    }
}
