/// The authoritative current (state, district) pair.
///
/// A single instance lives inside the controller for the whole session and
/// is mutated only by its transition functions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub state_id: Option<String>,
    pub district_name: Option<String>,
    /// Latches true on the first manual action and is never cleared; a
    /// pending auto-detect result that lands afterwards is discarded.
    pub user_interacted: bool,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both halves of the pair, when a metrics fetch is possible.
    pub fn pair(&self) -> Option<(&str, &str)> {
        match (self.state_id.as_deref(), self.district_name.as_deref()) {
            (Some(s), Some(d)) => Some((s, d)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Selection;

    #[test]
    fn pair_requires_both_halves() {
        let mut sel = Selection::new();
        assert!(sel.pair().is_none());

        sel.state_id = Some("29".to_string());
        assert!(sel.pair().is_none());

        sel.district_name = Some("Mysuru".to_string());
        assert_eq!(sel.pair(), Some(("29", "Mysuru")));
    }
}
