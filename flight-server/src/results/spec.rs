//! The user's filter selection.
//!
//! A `FilterSpec` is owned by the caller and changed only through the
//! operations below, which keep it valid: at least one stop class and at
//! least one departure window are always selected.

use std::collections::BTreeSet;

use super::facets::{DEFAULT_MAX_DURATION_MINS, Facets};
use crate::domain::{DepartureWindow, StopClass};

/// Errors from building or changing a filter selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// Selection would allow no stop class at all
    #[error("at least one stop class must be selected")]
    NoStopClasses,

    /// Selection would allow no departure window at all
    #[error("at least one departure window must be selected")]
    NoDepartureWindows,
}

/// Filter criteria applied to the outbound leg of each itinerary.
///
/// # Invariants
///
/// - `stops` is non-empty
/// - `windows` is non-empty
///
/// An empty `airlines` set means "no airline restriction".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterSpec {
    stops: BTreeSet<StopClass>,
    airlines: BTreeSet<String>,
    windows: BTreeSet<DepartureWindow>,
    max_duration_mins: u32,
}

impl FilterSpec {
    /// Build a filter selection.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `stops` or `windows` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_server::domain::{DepartureWindow, StopClass};
    /// use flight_server::results::{FilterError, FilterSpec};
    ///
    /// let spec = FilterSpec::new(
    ///     [StopClass::Nonstop],
    ///     Vec::<String>::new(),
    ///     DepartureWindow::ALL,
    ///     600,
    /// )
    /// .unwrap();
    /// assert_eq!(spec.max_duration_mins(), 600);
    ///
    /// let err = FilterSpec::new([], Vec::<String>::new(), DepartureWindow::ALL, 600);
    /// assert_eq!(err, Err(FilterError::NoStopClasses));
    /// ```
    pub fn new<S, A, W>(
        stops: S,
        airlines: A,
        windows: W,
        max_duration_mins: u32,
    ) -> Result<Self, FilterError>
    where
        S: IntoIterator<Item = StopClass>,
        A: IntoIterator,
        A::Item: Into<String>,
        W: IntoIterator<Item = DepartureWindow>,
    {
        let stops: BTreeSet<StopClass> = stops.into_iter().collect();
        if stops.is_empty() {
            return Err(FilterError::NoStopClasses);
        }

        let windows: BTreeSet<DepartureWindow> = windows.into_iter().collect();
        if windows.is_empty() {
            return Err(FilterError::NoDepartureWindows);
        }

        Ok(Self {
            stops,
            airlines: airlines.into_iter().map(Into::into).collect(),
            windows,
            max_duration_mins,
        })
    }

    /// Returns the selected stop classes.
    pub fn stops(&self) -> &BTreeSet<StopClass> {
        &self.stops
    }

    /// Returns the selected airlines (empty means all).
    pub fn airlines(&self) -> &BTreeSet<String> {
        &self.airlines
    }

    /// Returns the selected departure windows.
    pub fn windows(&self) -> &BTreeSet<DepartureWindow> {
        &self.windows
    }

    /// Returns the inclusive duration ceiling in minutes.
    pub fn max_duration_mins(&self) -> u32 {
        self.max_duration_mins
    }

    /// Returns true if only some airlines are allowed.
    pub fn restricts_airlines(&self) -> bool {
        !self.airlines.is_empty()
    }

    /// Replace the airline selection.
    pub fn with_airlines<A>(mut self, airlines: A) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
    {
        self.airlines = airlines.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the duration ceiling.
    pub fn with_max_duration(mut self, mins: u32) -> Self {
        self.max_duration_mins = mins;
        self
    }

    /// Toggle a stop class on or off.
    ///
    /// # Errors
    ///
    /// Turning off the only selected class is rejected and the selection
    /// is left as it was.
    pub fn toggle_stop(&mut self, class: StopClass) -> Result<(), FilterError> {
        if self.stops.contains(&class) {
            if self.stops.len() == 1 {
                return Err(FilterError::NoStopClasses);
            }
            self.stops.remove(&class);
        } else {
            self.stops.insert(class);
        }
        Ok(())
    }

    /// Toggle an airline on or off.
    ///
    /// With no restriction in place every `available` airline counts as
    /// selected, so the first toggle turns one airline off. Turning off the
    /// last selected airline lifts the restriction again.
    pub fn toggle_airline(&mut self, name: &str, available: &[String]) {
        if self.airlines.is_empty() {
            self.airlines = available.iter().cloned().collect();
        }

        if !self.airlines.remove(name) {
            self.airlines.insert(name.to_string());
        }
    }

    /// Remove any airline restriction.
    pub fn select_all_airlines(&mut self) {
        self.airlines.clear();
    }

    /// Toggle a departure window on or off.
    ///
    /// Turning off the last selected window selects all of them.
    pub fn toggle_window(&mut self, window: DepartureWindow) {
        if !self.windows.remove(&window) {
            self.windows.insert(window);
        }

        if self.windows.is_empty() {
            self.windows = DepartureWindow::ALL.into_iter().collect();
        }
    }

    /// Set the duration ceiling in minutes.
    pub fn set_max_duration(&mut self, mins: u32) {
        self.max_duration_mins = mins;
    }

    /// Go back to the default selection.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Resolve this selection against the facets of an itinerary set.
    ///
    /// No airline restriction becomes an explicit list of every available
    /// airline, and the duration ceiling is clamped to the longest observed
    /// outbound leg.
    pub fn effective(&self, facets: &Facets) -> FilterSpec {
        let airlines = if self.airlines.is_empty() {
            facets.airlines.iter().cloned().collect()
        } else {
            self.airlines.clone()
        };

        FilterSpec {
            stops: self.stops.clone(),
            airlines,
            windows: self.windows.clone(),
            max_duration_mins: self.max_duration_mins.min(facets.max_duration_mins),
        }
    }
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            stops: StopClass::ALL.into_iter().collect(),
            airlines: BTreeSet::new(),
            windows: DepartureWindow::ALL.into_iter().collect(),
            max_duration_mins: DEFAULT_MAX_DURATION_MINS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_selection() {
        let spec = FilterSpec::default();

        assert_eq!(spec.stops().len(), 3);
        assert!(spec.airlines().is_empty());
        assert!(!spec.restricts_airlines());
        assert_eq!(spec.windows().len(), 4);
        assert_eq!(spec.max_duration_mins(), 1440);
    }

    #[test]
    fn new_rejects_empty_sets() {
        let err = FilterSpec::new([], names(&[]), DepartureWindow::ALL, 100);
        assert_eq!(err, Err(FilterError::NoStopClasses));

        let err = FilterSpec::new(StopClass::ALL, names(&[]), [], 100);
        assert_eq!(err, Err(FilterError::NoDepartureWindows));
    }

    #[test]
    fn new_deduplicates() {
        let spec = FilterSpec::new(
            [StopClass::Nonstop, StopClass::Nonstop],
            ["Iberia", "Iberia"],
            [DepartureWindow::Evening],
            100,
        )
        .unwrap();

        assert_eq!(spec.stops().len(), 1);
        assert_eq!(spec.airlines().len(), 1);
    }

    #[test]
    fn toggle_stop_off_and_on() {
        let mut spec = FilterSpec::default();

        spec.toggle_stop(StopClass::TwoOrMore).unwrap();
        assert!(!spec.stops().contains(&StopClass::TwoOrMore));

        spec.toggle_stop(StopClass::TwoOrMore).unwrap();
        assert!(spec.stops().contains(&StopClass::TwoOrMore));
    }

    #[test]
    fn toggle_last_stop_rejected() {
        let mut spec = FilterSpec::default();
        spec.toggle_stop(StopClass::OneStop).unwrap();
        spec.toggle_stop(StopClass::TwoOrMore).unwrap();
        let before = spec.clone();

        assert_eq!(
            spec.toggle_stop(StopClass::Nonstop),
            Err(FilterError::NoStopClasses)
        );
        assert_eq!(spec, before);
    }

    #[test]
    fn toggle_airline_expands_sentinel_first() {
        let available = names(&["Iberia", "LATAM", "Sky"]);
        let mut spec = FilterSpec::default();

        spec.toggle_airline("LATAM", &available);

        let selected: Vec<&str> = spec.airlines().iter().map(String::as_str).collect();
        assert_eq!(selected, vec!["Iberia", "Sky"]);
    }

    #[test]
    fn toggle_airline_back_on() {
        let available = names(&["Iberia", "LATAM"]);
        let mut spec = FilterSpec::default().with_airlines(["Iberia"]);

        spec.toggle_airline("LATAM", &available);
        assert_eq!(spec.airlines().len(), 2);
    }

    #[test]
    fn toggle_last_airline_lifts_restriction() {
        let available = names(&["Iberia", "LATAM"]);
        let mut spec = FilterSpec::default().with_airlines(["Iberia"]);

        spec.toggle_airline("Iberia", &available);
        assert!(!spec.restricts_airlines());
    }

    #[test]
    fn select_all_airlines_clears() {
        let mut spec = FilterSpec::default().with_airlines(["Iberia"]);
        spec.select_all_airlines();
        assert!(spec.airlines().is_empty());
    }

    #[test]
    fn toggle_window() {
        let mut spec = FilterSpec::default();

        spec.toggle_window(DepartureWindow::Evening);
        assert_eq!(spec.windows().len(), 3);
        assert!(!spec.windows().contains(&DepartureWindow::Evening));

        spec.toggle_window(DepartureWindow::Evening);
        assert_eq!(spec.windows().len(), 4);
    }

    #[test]
    fn toggle_last_window_resets_to_all() {
        let mut spec =
            FilterSpec::new(StopClass::ALL, names(&[]), [DepartureWindow::Morning], 1440).unwrap();

        spec.toggle_window(DepartureWindow::Morning);

        assert_eq!(spec.windows().len(), 4);
    }

    #[test]
    fn reset_restores_default() {
        let mut spec = FilterSpec::default().with_airlines(["Iberia"]).with_max_duration(90);
        spec.toggle_stop(StopClass::Nonstop).unwrap();
        spec.toggle_window(DepartureWindow::Morning);

        spec.reset();

        assert_eq!(spec, FilterSpec::default());
    }

    #[test]
    fn effective_expands_airlines_and_clamps_duration() {
        let facets = Facets {
            airlines: names(&["Iberia", "LATAM"]),
            max_duration_mins: 900,
        };

        let effective = FilterSpec::default().effective(&facets);

        assert_eq!(effective.airlines().len(), 2);
        assert_eq!(effective.max_duration_mins(), 900);
    }

    #[test]
    fn effective_keeps_tighter_values() {
        let facets = Facets {
            airlines: names(&["Iberia", "LATAM"]),
            max_duration_mins: 900,
        };

        let spec = FilterSpec::default().with_airlines(["LATAM"]).with_max_duration(300);
        let effective = spec.effective(&facets);

        assert_eq!(effective.airlines().len(), 1);
        assert_eq!(effective.max_duration_mins(), 300);
        assert_eq!(effective.stops(), spec.stops());
    }
}
