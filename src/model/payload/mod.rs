//! The normalized persistence payload.
//!
//! [`EventPayload::from_draft`] restructures a finished draft for the
//! persistence service: the main phase's window is lifted to the published
//! start/end, the four phases become a `phases` object with explicit
//! `active` flags (disabled phases collapse to just the flag), and the
//! contact, document-requirement and registration-form sections are nested.
//! The transform is pure: the same draft always yields a structurally
//! identical payload.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::IncompleteDraft;
use crate::model::draft::{
    EventDraft, EventMode, FormQuestion, FormTemplate, ParticipationType, PaymentTiming,
    PricingType, SocialMedia, Visibility,
};
use crate::validation::FieldId;

/// A created event, as sent to the persistence service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub mode: EventMode,
    /// Absent for virtual events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    /// Published event start, lifted from the main phase.
    pub start_date: NaiveDateTime,
    /// Published event end, lifted from the main phase.
    pub end_date: NaiveDateTime,
    pub participation_type: ParticipationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_team_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_team_size: Option<u32>,
    pub no_participant_limit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    pub is_free: bool,
    pub price: f64,
    pub pricing_type: PricingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_discount: Option<u32>,
    pub enable_random_discounts: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_discount_percentage: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_discount_chance: Option<u32>,
    pub phases: PhasesPayload,
    pub contact_info: ContactPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_requirements: Option<RequirementsPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_form: Option<RegistrationFormPayload>,
}

/// One entry per phase, each with an explicit `active` flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhasesPayload {
    pub registration: RegistrationPayload,
    pub shortlisting: ShortlistingPayload,
    pub event: EventPhasePayload,
    pub results: ResultsPayload,
}

/// The registration window; always active.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub active: bool,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub collect_payment: bool,
}

/// The shortlisting phase; collapses to `{"active": false}` when disabled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortlistingPayload {
    pub active: bool,
    #[serde(flatten)]
    pub detail: Option<ShortlistingDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortlistingDetail {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// When the shortlist is revealed.
    pub results: NaiveDateTime,
    pub collect_payment: bool,
}

/// The event proper; always active.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPhasePayload {
    pub active: bool,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// The results phase; collapses to `{"active": false}` when disabled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsPayload {
    pub active: bool,
    #[serde(flatten)]
    pub detail: Option<ResultsDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsDetail {
    pub announcement: NaiveDateTime,
    pub public_results: bool,
}

/// Contact section with nested social links.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_emails: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_phones: Vec<String>,
    pub social_media: SocialMedia,
    pub share_with_participants: bool,
    pub visibility: Visibility,
}

/// Document requirements; present only when documents are collected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementsPayload {
    #[serde(rename = "abstract")]
    pub abstract_document: DocumentPayload,
    pub presentation: DocumentPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPayload {
    pub required: bool,
    pub file_types: Vec<String>,
}

/// Custom registration form; present only when enabled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationFormPayload {
    pub template: FormTemplate,
    pub questions: Vec<FormQuestion>,
}

impl EventPayload {
    /// Normalize a finished draft.
    ///
    /// A clean full validation guarantees every instant read here is
    /// present; an [`IncompleteDraft`] therefore only escapes when the
    /// caller skipped validation.
    pub fn from_draft(draft: &EventDraft) -> Result<Self, IncompleteDraft> {
        let phases = &draft.event_phases;
        let paid = !draft.is_free;

        let event = EventPhasePayload {
            active: true,
            start: instant(phases.event_phase.start(), FieldId::EventStartDate)?,
            end: instant(phases.event_phase.end(), FieldId::EventEndDate)?,
        };

        let registration = RegistrationPayload {
            active: true,
            start: instant(
                phases.registration_phase.start(),
                FieldId::RegistrationStartDate,
            )?,
            end: instant(phases.registration_phase.end(), FieldId::RegistrationEndDate)?,
            collect_payment: paid && phases.payment_timing == PaymentTiming::Registration,
        };

        let shortlisting = if phases.enable_shortlisting {
            ShortlistingPayload {
                active: true,
                detail: Some(ShortlistingDetail {
                    start: instant(
                        phases.shortlisting_phase.window.start(),
                        FieldId::ShortlistingStartDate,
                    )?,
                    end: instant(
                        phases.shortlisting_phase.window.end(),
                        FieldId::ShortlistingEndDate,
                    )?,
                    results: instant(
                        phases.shortlisting_phase.results(),
                        FieldId::ShortlistingResultsDate,
                    )?,
                    collect_payment: paid
                        && phases.payment_timing == PaymentTiming::AfterShortlisting,
                }),
            }
        } else {
            ShortlistingPayload {
                active: false,
                detail: None,
            }
        };

        let results = if phases.enable_results {
            ResultsPayload {
                active: true,
                detail: Some(ResultsDetail {
                    announcement: instant(
                        phases.results_phase.announcement(),
                        FieldId::ResultsAnnouncementDate,
                    )?,
                    public_results: phases.results_phase.public_results,
                }),
            }
        } else {
            ResultsPayload {
                active: false,
                detail: None,
            }
        };

        let docs = &draft.document_submission;
        let submission_requirements = docs.require_documents.then(|| RequirementsPayload {
            abstract_document: DocumentPayload {
                required: docs.require_abstract,
                file_types: docs.abstract_file_types.clone(),
            },
            presentation: DocumentPayload {
                required: docs.require_presentation,
                file_types: docs.presentation_file_types.clone(),
            },
        });

        let registration_form = draft.custom_form.use_custom_form.then(|| {
            RegistrationFormPayload {
                template: draft.custom_form.template,
                questions: draft.custom_form.questions.clone(),
            }
        });

        let contact = &draft.contact_info;
        Ok(Self {
            title: draft.title.clone(),
            description: draft.description.clone(),
            tags: draft.tags.clone(),
            mode: draft.mode,
            venue: (draft.mode != EventMode::Virtual).then(|| draft.venue.clone()),
            start_date: event.start,
            end_date: event.end,
            participation_type: draft.participation_type,
            min_team_size: draft.min_team_size,
            max_team_size: draft.max_team_size,
            no_participant_limit: draft.no_participant_limit,
            max_participants: draft.max_participants,
            is_free: draft.is_free,
            price: draft.price,
            pricing_type: draft.pricing_type,
            coupon_code: (!draft.coupon_code.is_empty()).then(|| draft.coupon_code.clone()),
            coupon_discount: draft.coupon_discount,
            enable_random_discounts: draft.enable_random_discounts,
            random_discount_percentage: draft.random_discount_percentage,
            random_discount_chance: draft.random_discount_chance,
            phases: PhasesPayload {
                registration,
                shortlisting,
                event,
                results,
            },
            contact_info: ContactPayload {
                email: contact.email.clone(),
                phone: contact.phone.clone(),
                additional_emails: contact.additional_emails.clone(),
                additional_phones: contact.additional_phones.clone(),
                social_media: contact.social_media.clone(),
                share_with_participants: contact.share_contact_with_participants,
                visibility: contact.visibility,
            },
            submission_requirements,
            registration_form,
        })
    }
}

fn instant(value: Option<NaiveDateTime>, field: FieldId) -> Result<NaiveDateTime, IncompleteDraft> {
    value.ok_or(IncompleteDraft(field))
}
