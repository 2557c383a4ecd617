use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Timing configuration for every phase of an event's lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPhases {
    /// Whether the optional shortlisting phase runs at all.
    pub enable_shortlisting: bool,
    /// Whether results are formally announced afterwards.
    pub enable_results: bool,
    /// Sign-up window. Always active.
    pub registration_phase: PhaseWindow,
    /// Selection window between registration and the event proper.
    pub shortlisting_phase: ShortlistingPhase,
    /// The event proper; its window becomes the published start and end.
    pub event_phase: PhaseWindow,
    /// Results announcement.
    pub results_phase: ResultsPhase,
    /// When the entry fee is collected from participants.
    pub payment_timing: PaymentTiming,
}

/// A start/end window as entered in the wizard. Either half of each
/// instant may still be blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseWindow {
    pub start_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_date: Option<NaiveDate>,
    pub end_time: Option<NaiveTime>,
}

impl PhaseWindow {
    /// The combined start instant, if both halves are filled in.
    pub fn start(&self) -> Option<NaiveDateTime> {
        combine(self.start_date, self.start_time)
    }

    /// The combined end instant, if both halves are filled in.
    pub fn end(&self) -> Option<NaiveDateTime> {
        combine(self.end_date, self.end_time)
    }
}

/// Shortlisting window plus the instant its outcome is revealed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortlistingPhase {
    #[serde(flatten)]
    pub window: PhaseWindow,
    pub results_date: Option<NaiveDate>,
    pub results_time: Option<NaiveTime>,
}

impl ShortlistingPhase {
    /// The combined results instant, if both halves are filled in.
    pub fn results(&self) -> Option<NaiveDateTime> {
        combine(self.results_date, self.results_time)
    }
}

/// Results announcement settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsPhase {
    pub announcement_date: Option<NaiveDate>,
    pub announcement_time: Option<NaiveTime>,
    /// Whether the results are visible to everyone or only to participants.
    pub public_results: bool,
}

impl ResultsPhase {
    /// The combined announcement instant, if both halves are filled in.
    pub fn announcement(&self) -> Option<NaiveDateTime> {
        combine(self.announcement_date, self.announcement_time)
    }
}

/// The point at which an entry fee is collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentTiming {
    /// Participants pay when they register.
    Registration,
    /// Only shortlisted participants pay.
    AfterShortlisting,
}

impl Default for PaymentTiming {
    fn default() -> Self {
        Self::Registration
    }
}

/// A pair with only one half filled in is not comparable and stays `None`.
fn combine(date: Option<NaiveDate>, time: Option<NaiveTime>) -> Option<NaiveDateTime> {
    Some(date?.and_time(time?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_with_both_halves_is_comparable() {
        let window = PhaseWindow {
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            start_time: NaiveTime::from_hms_opt(9, 0, 0),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 10),
            end_time: NaiveTime::from_hms_opt(18, 0, 0),
        };
        assert!(window.start().unwrap() < window.end().unwrap());
    }

    #[test]
    fn missing_time_means_no_instant() {
        let window = PhaseWindow {
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            ..PhaseWindow::default()
        };
        assert_eq!(window.start(), None);
        assert_eq!(window.end(), None);
    }

    #[test]
    fn missing_date_means_no_instant() {
        let window = PhaseWindow {
            start_time: NaiveTime::from_hms_opt(9, 0, 0),
            ..PhaseWindow::default()
        };
        assert_eq!(window.start(), None);
    }
}
