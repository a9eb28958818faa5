use catalog::RegionCatalog;
use metrics::MetricsSnapshot;
use protocol::{ApiError, NearestRegion};

use crate::event::{Effect, Event, FetchSeq};
use crate::notice::{Notice, NoticeBus};
use crate::resolver::{LocationResolver, ResolverPhase};
use crate::selection::Selection;

/// Hub of the dashboard session.
///
/// Owns the one Selection+Snapshot record and arbitrates between the three
/// asynchronous inputs. All ordering guarantees live here and in
/// [`RegionCatalog`]:
/// - manual selections latch `user_interacted`, which outranks a pending or
///   late auto-detect result regardless of arrival order;
/// - district-list and metrics requests carry monotonic sequence numbers, so
///   a response for a superseded selection is discarded, not applied.
///
/// There is no cancellation of in-flight work; stale responses are simply
/// dropped when they complete.
#[derive(Debug)]
pub struct DashboardController {
    catalog: RegionCatalog,
    selection: Selection,
    snapshot: Option<MetricsSnapshot>,
    loading: bool,
    resolver: LocationResolver,
    notices: NoticeBus,
    next_fetch: u64,
    newest_fetch: Option<FetchSeq>,
    started: bool,
}

impl DashboardController {
    pub fn new() -> Self {
        Self {
            catalog: RegionCatalog::new(),
            selection: Selection::new(),
            snapshot: None,
            loading: false,
            resolver: LocationResolver::new(),
            notices: NoticeBus::new(),
            next_fetch: 0,
            newest_fetch: None,
            started: false,
        }
    }

    /// Issues the once-per-session states load.
    pub fn start(&mut self) -> Vec<Effect> {
        if self.started {
            return Vec::new();
        }
        self.started = true;
        vec![Effect::LoadStates]
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    pub fn snapshot(&self) -> Option<&MetricsSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn resolver_phase(&self) -> ResolverPhase {
        self.resolver.phase()
    }

    /// Pending user-facing reports; the view drains these after each event.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }

    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::StatesLoaded(Ok(states)) => {
                self.catalog.apply_states(states);
                if !self.catalog.states().is_empty() && self.resolver.arm() {
                    return vec![Effect::RequestLocationFix];
                }
                Vec::new()
            }
            Event::StatesLoaded(Err(err)) => {
                // No automatic retry; the catalog stays empty and the UI
                // stays interactive.
                self.notices.emit(Notice::StatesLoadFailed(err.to_string()));
                Vec::new()
            }
            Event::StateSelected(state_id) => self.state_selected(state_id),
            Event::DistrictSelected(name) => self.district_selected(name),
            Event::DistrictsLoaded { seq, result } => {
                match result {
                    Ok(districts) => {
                        self.catalog.apply_districts(seq, districts);
                    }
                    Err(err) => {
                        if self.catalog.fail_districts(seq) {
                            self.notices
                                .emit(Notice::DistrictsLoadFailed(err.to_string()));
                        }
                    }
                }
                Vec::new()
            }
            Event::LocationFix(Ok(coords)) => {
                if !self.resolver.is_requesting() {
                    return Vec::new();
                }
                vec![Effect::LookupNearest {
                    latitude: coords.latitude,
                    longitude: coords.longitude,
                }]
            }
            Event::LocationFix(Err(err)) => {
                self.resolver.failed();
                self.notices.emit(Notice::LocationDenied(err.to_string()));
                Vec::new()
            }
            Event::NearestResolved(Ok(nearest)) => {
                self.resolver.resolved();
                self.location_resolved(nearest)
            }
            Event::NearestResolved(Err(err)) => {
                self.resolver.failed();
                match err {
                    ApiError::Invalid(_) => self.notices.emit(Notice::LocationInvalid),
                    other => self
                        .notices
                        .emit(Notice::LocationLookupFailed(other.to_string())),
                }
                Vec::new()
            }
            Event::MetricsLoaded { seq, result } => {
                if self.newest_fetch != Some(seq) {
                    // Superseded request; do not touch the snapshot or the
                    // loading flag owned by the newer request.
                    return Vec::new();
                }
                self.loading = false;
                match result {
                    Ok(snapshot) => self.snapshot = Some(snapshot),
                    Err(err) => {
                        // Previous snapshot, if any, stays visible.
                        self.notices
                            .emit(Notice::MetricsLoadFailed(err.to_string()));
                    }
                }
                Vec::new()
            }
        }
    }

    /// Manual state selection.
    ///
    /// Clears the district and snapshot in the same transition, so no view
    /// can observe a mismatched (state, district) pair. Any in-flight
    /// metrics request is orphaned here and its response will be dropped.
    pub fn state_selected(&mut self, state_id: impl Into<String>) -> Vec<Effect> {
        let state_id = state_id.into();
        self.selection.user_interacted = true;
        self.selection.state_id = Some(state_id.clone());
        self.selection.district_name = None;
        self.snapshot = None;
        self.newest_fetch = None;
        self.loading = false;

        let seq = self.catalog.issue_district_request(&state_id);
        vec![Effect::LoadDistricts { seq, state_id }]
    }

    /// Manual district selection; a no-op while no state is selected.
    pub fn district_selected(&mut self, district_name: impl Into<String>) -> Vec<Effect> {
        let Some(state_id) = self.selection.state_id.clone() else {
            return Vec::new();
        };
        let district_name = district_name.into();
        self.selection.user_interacted = true;
        self.selection.district_name = Some(district_name.clone());
        self.fetch_metrics(state_id, district_name)
    }

    /// Applies an accepted auto-detect result.
    ///
    /// Discarded outright once `user_interacted` is latched; otherwise the
    /// state and district change together in one transition, and both the
    /// district list and the metrics fetch are kicked off.
    pub fn location_resolved(&mut self, nearest: NearestRegion) -> Vec<Effect> {
        if self.selection.user_interacted {
            return Vec::new();
        }

        self.selection.state_id = Some(nearest.state_id.clone());
        self.selection.district_name = Some(nearest.district_name_en.clone());
        self.snapshot = None;

        self.notices.emit(Notice::LocationDetected {
            district_name: nearest.district_name_en.clone(),
            state_name: nearest.state_name_en.clone(),
        });

        let seq = self.catalog.issue_district_request(&nearest.state_id);
        let mut effects = vec![Effect::LoadDistricts {
            seq,
            state_id: nearest.state_id.clone(),
        }];
        effects.extend(self.fetch_metrics(nearest.state_id, nearest.district_name_en));
        effects
    }

    fn fetch_metrics(&mut self, state_id: String, district_name: String) -> Vec<Effect> {
        let seq = FetchSeq(self.next_fetch);
        self.next_fetch = self.next_fetch.wrapping_add(1);
        self.newest_fetch = Some(seq);
        self.loading = true;
        vec![Effect::FetchMetrics {
            seq,
            state_id,
            district_name,
        }]
    }
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new()
    }
}
