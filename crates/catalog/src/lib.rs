use serde::{Deserialize, Serialize};

/// Administrative region (state), as served by the backend.
///
/// The states list is ordered by the server; the order is preserved verbatim
/// and never re-sorted client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name_en: String,
    pub name_hi: String,
}

/// District within a state.
///
/// `code` carries whichever identifier the backend row had (`id` or `code`).
/// A district is only meaningful while its owning state stays selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub code: String,
    pub name_en: String,
    pub name_hi: String,
}

/// Monotonic tag for one district-list request.
///
/// This is a small, copyable handle attached at dispatch time and checked at
/// completion time; responses carrying anything but the highest issued tag
/// are dropped.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DistrictSeq(pub u64);

/// Session-scoped region catalog.
///
/// Key properties:
/// - The states list is loaded once and replaced wholesale, never mutated.
/// - The district list always belongs to the most recently requested state;
///   a response for a superseded request is silently discarded.
/// - A failed district load leaves the previous list in place (observed
///   contract of the backend client; see DESIGN.md).
#[derive(Debug, Default)]
pub struct RegionCatalog {
    states: Vec<Region>,
    districts: Vec<District>,
    districts_for: Option<String>,
    next_seq: u64,
    newest_issued: Option<DistrictSeq>,
    pending_state: Option<String>,
}

impl RegionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn states(&self) -> &[Region] {
        &self.states
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    /// State id the current district list was loaded for, if any.
    pub fn districts_for(&self) -> Option<&str> {
        self.districts_for.as_deref()
    }

    pub fn state_by_id(&self, id: &str) -> Option<&Region> {
        self.states.iter().find(|s| s.id == id)
    }

    /// Replaces the states list wholesale.
    pub fn apply_states(&mut self, states: Vec<Region>) {
        self.states = states;
    }

    /// Issues a new district-list request tag for `state_id`.
    ///
    /// Any earlier tag becomes stale immediately, even before its response
    /// arrives.
    pub fn issue_district_request(&mut self, state_id: impl Into<String>) -> DistrictSeq {
        let seq = DistrictSeq(self.next_seq);
        self.next_seq = self.next_seq.wrapping_add(1);
        self.newest_issued = Some(seq);
        self.pending_state = Some(state_id.into());
        seq
    }

    /// True while `seq` is still the highest issued district request.
    pub fn is_current(&self, seq: DistrictSeq) -> bool {
        self.newest_issued == Some(seq)
    }

    /// Applies a successful district-list response.
    ///
    /// Returns `true` if the list was applied; a stale `seq` leaves the
    /// catalog untouched and returns `false`.
    pub fn apply_districts(&mut self, seq: DistrictSeq, districts: Vec<District>) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.districts = districts;
        self.districts_for = self.pending_state.take();
        true
    }

    /// Records a failed district-list response.
    ///
    /// The previous list stays in place either way. Returns `true` if the
    /// failure belongs to the newest request and should be reported; stale
    /// failures are dropped like stale successes.
    pub fn fail_districts(&mut self, seq: DistrictSeq) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.pending_state = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{District, DistrictSeq, Region, RegionCatalog};
    use pretty_assertions::assert_eq;

    fn region(id: &str, name: &str) -> Region {
        Region {
            id: id.to_string(),
            name_en: name.to_string(),
            name_hi: format!("{name}-hi"),
        }
    }

    fn district(code: &str, name: &str) -> District {
        District {
            code: code.to_string(),
            name_en: name.to_string(),
            name_hi: format!("{name}-hi"),
        }
    }

    #[test]
    fn states_are_replaced_wholesale_in_server_order() {
        let mut cat = RegionCatalog::new();
        cat.apply_states(vec![region("2", "B"), region("1", "A")]);
        let ids: Vec<&str> = cat.states().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn district_seqs_are_monotonic() {
        let mut cat = RegionCatalog::new();
        let a = cat.issue_district_request("1");
        let b = cat.issue_district_request("2");
        assert!(b > a);
        assert!(!cat.is_current(a));
        assert!(cat.is_current(b));
    }

    #[test]
    fn stale_district_response_is_discarded() {
        let mut cat = RegionCatalog::new();
        let s1 = cat.issue_district_request("1");
        let s2 = cat.issue_district_request("2");

        // S1's response arrives after S2 was requested.
        assert!(!cat.apply_districts(s1, vec![district("d1", "Old")]));
        assert!(cat.districts().is_empty());

        assert!(cat.apply_districts(s2, vec![district("d2", "New")]));
        assert_eq!(cat.districts(), &[district("d2", "New")]);
        assert_eq!(cat.districts_for(), Some("2"));
    }

    #[test]
    fn out_of_order_arrival_keeps_newest_list() {
        let mut cat = RegionCatalog::new();
        let s1 = cat.issue_district_request("1");
        let s2 = cat.issue_district_request("2");

        assert!(cat.apply_districts(s2, vec![district("d2", "New")]));
        assert!(!cat.apply_districts(s1, vec![district("d1", "Old")]));
        assert_eq!(cat.districts(), &[district("d2", "New")]);
    }

    #[test]
    fn failed_load_keeps_previous_list() {
        let mut cat = RegionCatalog::new();
        let s1 = cat.issue_district_request("1");
        assert!(cat.apply_districts(s1, vec![district("d1", "Kept")]));

        let s2 = cat.issue_district_request("2");
        assert!(cat.fail_districts(s2));
        assert_eq!(cat.districts(), &[district("d1", "Kept")]);
        assert_eq!(cat.districts_for(), Some("1"));
    }

    #[test]
    fn stale_failure_is_not_reported() {
        let mut cat = RegionCatalog::new();
        let s1 = cat.issue_district_request("1");
        let _s2 = cat.issue_district_request("2");
        assert!(!cat.fail_districts(s1));
    }

    #[test]
    fn seq_handle_is_orderable() {
        assert!(DistrictSeq(1) < DistrictSeq(2));
        assert_eq!(DistrictSeq(3), DistrictSeq(3));
    }

    #[test]
    fn state_lookup_by_id() {
        let mut cat = RegionCatalog::new();
        cat.apply_states(vec![region("29", "Karnataka")]);
        assert_eq!(cat.state_by_id("29").map(|s| s.name_en.as_str()), Some("Karnataka"));
        assert!(cat.state_by_id("30").is_none());
    }
}
