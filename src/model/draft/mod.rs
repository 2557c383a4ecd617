//! The in-progress event configuration as the wizard edits it.
//!
//! The draft mirrors the wizard's JSON shape field-for-field: flat scalars
//! plus the four nested groups (`eventPhases`, `contactInfo`,
//! `documentSubmission`, `customForm`). All mutation goes through
//! [`EventDraft::apply`], so every change is an explicit, testable patch.

mod contact;
mod patch;
mod phases;
mod requirements;

pub use contact::{ContactInfo, SocialMedia, Visibility};
pub use patch::{
    ContactInfoPatch, CustomFormPatch, DocumentSubmissionPatch, DraftPatch, EventPhasesPatch,
    PhaseWindowPatch, ResultsPhasePatch, ShortlistingPhasePatch, SocialMediaPatch,
};
pub use phases::{
    EventPhases, PaymentTiming, PhaseWindow, ResultsPhase, ShortlistingPhase,
};
pub use requirements::{CustomForm, DocumentSubmission, FormQuestion, FormTemplate, QuestionKind};

use serde::{Deserialize, Serialize};

/// One event-in-creation, owned by a single wizard session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    /// Discoverability tags; at least one is expected.
    pub tags: Vec<String>,
    pub mode: EventMode,
    /// Physical location; meaningless for virtual events.
    pub venue: String,
    pub participation_type: ParticipationType,
    pub min_team_size: Option<u32>,
    pub max_team_size: Option<u32>,
    pub no_participant_limit: bool,
    pub max_participants: Option<u32>,
    /// Derived from `price`: the two are kept consistent by the patch merge.
    pub is_free: bool,
    pub price: f64,
    pub pricing_type: PricingType,
    pub coupon_code: String,
    /// Percentage off for the coupon.
    pub coupon_discount: Option<u32>,
    pub enable_random_discounts: bool,
    pub random_discount_percentage: Option<u32>,
    pub random_discount_chance: Option<u32>,
    pub document_submission: DocumentSubmission,
    pub custom_form: CustomForm,
    pub event_phases: EventPhases,
    pub contact_info: ContactInfo,
}

impl Default for EventDraft {
    /// The empty draft the wizard opens with. A price of zero and
    /// `is_free` must agree from the start.
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            tags: Vec::new(),
            mode: EventMode::InPerson,
            venue: String::new(),
            participation_type: ParticipationType::Individual,
            min_team_size: None,
            max_team_size: None,
            no_participant_limit: false,
            max_participants: None,
            is_free: true,
            price: 0.0,
            pricing_type: PricingType::PerPerson,
            coupon_code: String::new(),
            coupon_discount: None,
            enable_random_discounts: false,
            random_discount_percentage: None,
            random_discount_chance: None,
            document_submission: DocumentSubmission::default(),
            custom_form: CustomForm::default(),
            event_phases: EventPhases::default(),
            contact_info: ContactInfo::default(),
        }
    }
}

/// How participants attend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventMode {
    InPerson,
    Virtual,
    Hybrid,
}

impl Default for EventMode {
    fn default() -> Self {
        Self::InPerson
    }
}

/// Whether entries are individual or team-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipationType {
    Individual,
    Team,
}

impl Default for ParticipationType {
    fn default() -> Self {
        Self::Individual
    }
}

/// What unit the entry fee is charged per.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricingType {
    PerTeam,
    PerPerson,
}

impl Default for PricingType {
    fn default() -> Self {
        Self::PerPerson
    }
}


/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    use chrono::{NaiveDate, NaiveTime};

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn time(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    impl EventDraft {
        /// A complete, fully-valid free individual event with neither
        /// shortlisting nor a results announcement.
        pub fn example() -> Self {
            Self {
                title: "Summer Hackathon".to_string(),
                description: "48 hours of building, food included.".to_string(),
                tags: vec!["hackathon".to_string(), "coding".to_string()],
                mode: EventMode::InPerson,
                venue: "Main auditorium".to_string(),
                participation_type: ParticipationType::Individual,
                max_participants: Some(200),
                contact_info: ContactInfo {
                    email: "organisers@summerhack.example".to_string(),
                    phone: "9876543210".to_string(),
                    ..ContactInfo::default()
                },
                event_phases: EventPhases {
                    registration_phase: PhaseWindow {
                        start_date: date(2024, 6, 1),
                        start_time: time(9, 0),
                        end_date: date(2024, 6, 10),
                        end_time: time(18, 0),
                    },
                    event_phase: PhaseWindow {
                        start_date: date(2024, 6, 11),
                        start_time: time(9, 0),
                        end_date: date(2024, 6, 12),
                        end_time: time(9, 0),
                    },
                    ..EventPhases::default()
                },
                ..Self::default()
            }
        }

        /// The example event with a valid shortlisting phase enabled.
        pub fn example_shortlisted() -> Self {
            let mut draft = Self::example();
            draft.event_phases.enable_shortlisting = true;
            draft.event_phases.shortlisting_phase = ShortlistingPhase {
                window: PhaseWindow {
                    start_date: date(2024, 6, 10),
                    start_time: time(18, 0),
                    end_date: date(2024, 6, 10),
                    end_time: time(22, 0),
                },
                results_date: date(2024, 6, 10),
                results_time: time(23, 0),
            };
            draft
        }

        /// The example event as a paid, team-based competition.
        pub fn example_paid_team() -> Self {
            let mut draft = Self::example();
            draft.participation_type = ParticipationType::Team;
            draft.min_team_size = Some(2);
            draft.max_team_size = Some(5);
            draft.is_free = false;
            draft.price = 500.0;
            draft.pricing_type = PricingType::PerTeam;
            draft
        }
    }
}
