//! Session-scoped identifier sequences.

/// Issues identifiers of the form `PREFIX0001`, `PREFIX0002`, ...
///
/// Each sequence is owned by whoever issues the identifiers (a planner
/// session, a booking desk), so two sequences never share state.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::IdSequence;
///
/// let mut seq = IdSequence::new("TRIP");
/// assert_eq!(seq.next_id(), "TRIP0001");
/// assert_eq!(seq.next_id(), "TRIP0002");
/// ```
#[derive(Debug, Clone)]
pub struct IdSequence {
    prefix: &'static str,
    issued: u32,
}

impl IdSequence {
    /// Create a sequence starting at 1.
    pub fn new(prefix: &'static str) -> Self {
        Self::starting_after(prefix, 0)
    }

    /// Create a sequence whose first identifier is `issued + 1`.
    ///
    /// Used to resume numbering after identifiers restored from storage.
    pub fn starting_after(prefix: &'static str, issued: u32) -> Self {
        Self { prefix, issued }
    }

    /// Issue the next identifier.
    pub fn next_id(&mut self) -> String {
        self.issued = self.issued.saturating_add(1);
        format!("{}{:04}", self.prefix, self.issued)
    }

    /// Number of identifiers issued so far.
    pub fn issued(&self) -> u32 {
        self.issued
    }
}
