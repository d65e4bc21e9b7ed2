// crates/regionmatch-core/src/state.rs
//! Session state: the user's inputs plus the derived match results.
//!
//! Inputs are plain fields written only through the event methods. The match
//! results are memoized on the inputs they read (`selected`, the effective
//! field and the candidate count), so reads after an unrelated change, such
//! as the land display unit, reuse the previous ranking.
use crate::dataset::Dataset;
use crate::matcher::nearest_ids;
use crate::memo::Memo;
use crate::model::{Axis, Field, GdpMode, LandUnit, Region, RegionGroup, RegionId};
use crate::settings::Settings;
use crate::view::{Comparison, SelectedSummary};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MatchKey {
    source: RegionId,
    field: Field,
    candidates: usize,
}

/// The application state owned by a presentation root.
#[derive(Debug)]
pub struct AppState<'d> {
    dataset: &'d Dataset,
    selected: Option<RegionId>,
    axis: Axis,
    gdp_mode: GdpMode,
    land_unit: LandUnit,
    candidates: usize,
    matches: Memo<MatchKey, Vec<RegionId>>,
}

impl<'d> AppState<'d> {
    pub fn new(dataset: &'d Dataset) -> Self {
        Self::with_settings(dataset, Settings::default())
    }

    pub fn with_settings(dataset: &'d Dataset, settings: Settings) -> Self {
        AppState {
            dataset,
            selected: None,
            axis: settings.axis,
            gdp_mode: settings.gdp_mode,
            land_unit: settings.land_unit,
            candidates: settings.candidates.max(1),
            matches: Memo::new(),
        }
    }

    // ---------------------------------------------------------------------
    // Input events
    // ---------------------------------------------------------------------

    /// Selects a region by name, searching the domestic pool first.
    ///
    /// Returns `false` and keeps the previous selection if the name is unknown.
    pub fn select_region(&mut self, name: &str) -> bool {
        match self.dataset.find_id(name) {
            Some(id) => {
                self.selected = Some(id);
                true
            }
            None => {
                tracing::debug!(name, "unknown region; keeping selection");
                false
            }
        }
    }

    /// Selects a region by name within one pool.
    pub fn select_in(&mut self, group: RegionGroup, name: &str) -> bool {
        match self.dataset.find_in(group, name) {
            Some(id) => {
                self.selected = Some(id);
                true
            }
            None => false,
        }
    }

    pub fn set_axis(&mut self, axis: Axis) {
        self.axis = axis;
    }

    pub fn set_gdp_mode(&mut self, mode: GdpMode) {
        self.gdp_mode = mode;
    }

    /// Display only; never re-ranks.
    pub fn set_land_unit(&mut self, unit: LandUnit) {
        self.land_unit = unit;
    }

    /// Number of candidates next to the source. Values below 1 become 1.
    pub fn set_candidates(&mut self, k: usize) {
        self.candidates = k.max(1);
    }

    // ---------------------------------------------------------------------
    // Reads
    // ---------------------------------------------------------------------

    pub fn dataset(&self) -> &'d Dataset {
        self.dataset
    }

    pub fn selected_id(&self) -> Option<RegionId> {
        self.selected
    }

    pub fn selected(&self) -> Option<&'d Region> {
        self.selected.and_then(|id| self.dataset.get(id))
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn gdp_mode(&self) -> GdpMode {
        self.gdp_mode
    }

    pub fn land_unit(&self) -> LandUnit {
        self.land_unit
    }

    pub fn candidates(&self) -> usize {
        self.candidates
    }

    /// The field actually ranked on: GDP per capita when the axis is GDP and
    /// the GDP mode is per capita, the axis field otherwise.
    pub fn effective_field(&self) -> Field {
        self.axis.effective_field(self.gdp_mode)
    }

    /// Ids of the comparison row, ordered by the effective field. Empty when
    /// nothing is selected.
    pub fn match_ids(&self) -> Rc<Vec<RegionId>> {
        let Some(source) = self.selected else {
            return Rc::new(Vec::new());
        };
        let key = MatchKey {
            source,
            field: self.effective_field(),
            candidates: self.candidates,
        };
        let dataset = self.dataset;
        self.matches.get_or_compute(key, |key| compute_matches(dataset, key))
    }

    /// The source among its nearest neighbours from the opposite pool.
    pub fn match_results(&self) -> Vec<&'d Region> {
        self.match_ids()
            .iter()
            .filter_map(|id| self.dataset.get(*id))
            .collect()
    }

    /// Formatted comparison table for the current inputs.
    pub fn comparison(&self) -> Option<Comparison> {
        let source = self.selected()?;
        let rows = self.match_results();
        Some(Comparison::build(
            source,
            &rows,
            self.axis,
            self.gdp_mode,
            self.land_unit,
        ))
    }

    pub fn summary(&self) -> Option<SelectedSummary> {
        self.selected()
            .map(|r| SelectedSummary::build(r, self.gdp_mode, self.land_unit))
    }

    /// How many times the match results have been computed.
    pub fn recomputations(&self) -> u64 {
        self.matches.computations()
    }
}

fn compute_matches(dataset: &Dataset, key: &MatchKey) -> Vec<RegionId> {
    let field = key.field;
    let Some(source) = dataset.get(key.source) else {
        return Vec::new();
    };
    if !field.is_available(source) {
        return vec![key.source];
    }

    let pool = dataset
        .ids(key.source.group.opposite())
        .filter(|id| dataset.get(*id).is_some_and(|r| field.is_available(r)));
    nearest_ids(dataset, key.source, field, pool, key.candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RegionGroup;

    fn names(state: &AppState<'_>) -> Vec<String> {
        state
            .match_results()
            .iter()
            .map(|r| r.name.clone())
            .collect()
    }

    #[test]
    fn nothing_selected_means_no_results() {
        let db = Dataset::bundled().unwrap();
        let state = AppState::new(db);
        assert!(state.selected().is_none());
        assert!(state.match_results().is_empty());
        assert!(state.comparison().is_none());
        assert_eq!(state.recomputations(), 0);
    }

    #[test]
    fn defaults() {
        let db = Dataset::bundled().unwrap();
        let state = AppState::new(db);
        assert_eq!(state.axis(), Axis::Land);
        assert_eq!(state.gdp_mode(), GdpMode::Absolute);
        assert_eq!(state.land_unit(), LandUnit::Imperial);
        assert_eq!(state.candidates(), 7);
    }

    #[test]
    fn unknown_name_keeps_previous_selection() {
        let db = Dataset::bundled().unwrap();
        let mut state = AppState::new(db);
        assert!(!state.select_region("Atlantis"));
        assert!(state.selected().is_none());

        assert!(state.select_region("Texas"));
        assert!(!state.select_region("Atlantis"));
        assert_eq!(state.selected().unwrap().name, "Texas");
    }

    #[test]
    fn compares_against_the_opposite_pool() {
        let db = Dataset::bundled().unwrap();
        let mut state = AppState::new(db);
        state.select_region("Germany");
        let rows = state.match_results();
        assert_eq!(rows.len(), 8);
        let (src, others): (Vec<&&Region>, Vec<&&Region>) =
            rows.iter().partition(|r| r.name == "Germany");
        assert_eq!(src.len(), 1);
        assert!(others.iter().all(|r| r.group == RegionGroup::Domestic));
    }

    #[test]
    fn repeated_reads_are_memoized() {
        let db = Dataset::bundled().unwrap();
        let mut state = AppState::new(db);
        state.select_region("Ohio");
        let first = state.match_ids();
        let second = state.match_ids();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(state.recomputations(), 1);
    }

    #[test]
    fn land_unit_does_not_rerank() {
        let db = Dataset::bundled().unwrap();
        let mut state = AppState::new(db);
        state.select_region("Ohio");
        let before = names(&state);
        state.set_land_unit(LandUnit::Metric);
        assert_eq!(names(&state), before);
        assert_eq!(state.recomputations(), 1);
    }

    #[test]
    fn gdp_mode_only_matters_on_the_gdp_axis() {
        let db = Dataset::bundled().unwrap();
        let mut state = AppState::new(db);
        state.select_region("Ohio");
        state.match_ids();
        state.set_gdp_mode(GdpMode::PerCapita);
        state.match_ids();
        assert_eq!(state.recomputations(), 1);

        state.set_axis(Axis::Gdp);
        state.match_ids();
        assert_eq!(state.effective_field(), Field::GdpPerCapita);
        assert_eq!(state.recomputations(), 2);
    }

    #[test]
    fn switching_to_per_capita_reranks() {
        let db = Dataset::bundled().unwrap();
        let mut state = AppState::new(db);
        state.select_region("California");
        state.set_axis(Axis::Gdp);
        let total = names(&state);

        state.set_gdp_mode(GdpMode::PerCapita);
        let per_capita = names(&state);
        assert_ne!(total, per_capita);

        let src = state.selected().unwrap();
        let values: Vec<f64> = state
            .match_results()
            .iter()
            .map(|r| r.gdp_per_capita)
            .collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.contains(&src.gdp_per_capita));
    }

    #[test]
    fn hdi_sentinel_candidates_are_skipped() {
        let db = Dataset::bundled().unwrap();
        let mut state = AppState::new(db);
        state.set_axis(Axis::Hdi);
        state.set_candidates(60);
        state.select_region("Texas");
        let rows = names(&state);
        assert!(!rows.iter().any(|n| n == "Kosovo" || n == "Monaco"));
        assert_eq!(rows.len(), 49); // 48 rated countries + Texas
    }

    #[test]
    fn zero_population_candidates_are_skipped_per_capita() {
        let db = Dataset::from_json_str(
            r#"{
                "us": [["Home", 500, 100, 10, 0.9]],
                "eu": [
                    ["Low", 100, 100, 10, 0.9],
                    ["Empty", 400, 100, 0, 0.9],
                    ["Mid", 450, 100, 10, 0.9],
                    ["High", 900, 100, 10, 0.9]
                ]
            }"#,
        )
        .unwrap();
        let mut state = AppState::new(&db);
        state.set_axis(Axis::Gdp);
        state.set_gdp_mode(GdpMode::PerCapita);
        state.set_candidates(7);
        assert!(state.select_region("Home"));

        let rows = names(&state);
        assert!(!rows.iter().any(|n| n == "Empty"));
        assert_eq!(rows.len(), 3 + 1); // min(k, rated) + source
        assert_eq!(rows, ["Low", "Mid", "Home", "High"]);

        // The same row ranks normally on total GDP.
        state.set_gdp_mode(GdpMode::Absolute);
        assert!(names(&state).iter().any(|n| n == "Empty"));
    }

    #[test]
    fn unrated_source_stands_alone_on_hdi() {
        let db = Dataset::bundled().unwrap();
        let mut state = AppState::new(db);
        state.set_axis(Axis::Hdi);
        state.select_region("Kosovo");
        assert_eq!(names(&state), ["Kosovo"]);
    }

    #[test]
    fn candidate_count_is_clamped() {
        let db = Dataset::bundled().unwrap();
        let mut state = AppState::with_settings(
            db,
            Settings {
                candidates: 0,
                ..Settings::default()
            },
        );
        assert_eq!(state.candidates(), 1);
        state.set_candidates(3);
        state.select_region("Utah");
        assert_eq!(state.match_results().len(), 4);
    }

    #[test]
    fn select_in_reaches_shadowed_names() {
        let db = Dataset::bundled().unwrap();
        let mut state = AppState::new(db);
        assert!(state.select_in(RegionGroup::Foreign, "Georgia"));
        assert_eq!(state.selected().unwrap().group, RegionGroup::Foreign);
        assert!(state
            .match_results()
            .iter()
            .any(|r| r.group == RegionGroup::Domestic));
    }
}
