//! Partial updates to the draft.
//!
//! The wizard never writes fields directly: every edit arrives as a
//! [`DraftPatch`] and goes through [`EventDraft::apply`]. A `None` patch
//! field leaves the draft untouched; nested groups merge field-by-field;
//! vectors replace wholesale.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::contact::{SocialMedia, Visibility};
use super::phases::PaymentTiming;
use super::requirements::{FormQuestion, FormTemplate};
use super::{EventDraft, EventMode, ParticipationType, PricingType};

/// A partial update to an [`EventDraft`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub mode: Option<EventMode>,
    pub venue: Option<String>,
    pub participation_type: Option<ParticipationType>,
    pub min_team_size: Option<u32>,
    pub max_team_size: Option<u32>,
    pub no_participant_limit: Option<bool>,
    pub max_participants: Option<u32>,
    pub is_free: Option<bool>,
    pub price: Option<f64>,
    pub pricing_type: Option<PricingType>,
    pub coupon_code: Option<String>,
    pub coupon_discount: Option<u32>,
    pub enable_random_discounts: Option<bool>,
    pub random_discount_percentage: Option<u32>,
    pub random_discount_chance: Option<u32>,
    pub document_submission: Option<DocumentSubmissionPatch>,
    pub custom_form: Option<CustomFormPatch>,
    pub event_phases: Option<EventPhasesPatch>,
    pub contact_info: Option<ContactInfoPatch>,
}

/// Partial update to the phase timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventPhasesPatch {
    pub enable_shortlisting: Option<bool>,
    pub enable_results: Option<bool>,
    pub registration_phase: Option<PhaseWindowPatch>,
    pub shortlisting_phase: Option<ShortlistingPhasePatch>,
    pub event_phase: Option<PhaseWindowPatch>,
    pub results_phase: Option<ResultsPhasePatch>,
    pub payment_timing: Option<PaymentTiming>,
}

/// Partial update to one phase window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhaseWindowPatch {
    pub start_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_date: Option<NaiveDate>,
    pub end_time: Option<NaiveTime>,
}

/// Partial update to the shortlisting phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShortlistingPhasePatch {
    #[serde(flatten)]
    pub window: PhaseWindowPatch,
    pub results_date: Option<NaiveDate>,
    pub results_time: Option<NaiveTime>,
}

/// Partial update to the results phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultsPhasePatch {
    pub announcement_date: Option<NaiveDate>,
    pub announcement_time: Option<NaiveTime>,
    pub public_results: Option<bool>,
}

/// Partial update to the contact section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfoPatch {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub additional_emails: Option<Vec<String>>,
    pub additional_phones: Option<Vec<String>>,
    pub social_media: Option<SocialMediaPatch>,
    pub share_contact_with_participants: Option<bool>,
    pub visibility: Option<Visibility>,
}

/// Partial update to the social links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialMediaPatch {
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
}

/// Partial update to the document requirements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentSubmissionPatch {
    pub require_documents: Option<bool>,
    pub require_abstract: Option<bool>,
    pub abstract_file_types: Option<Vec<String>>,
    pub require_presentation: Option<bool>,
    pub presentation_file_types: Option<Vec<String>>,
}

/// Partial update to the registration form settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomFormPatch {
    pub use_custom_form: Option<bool>,
    pub template: Option<FormTemplate>,
    pub questions: Option<Vec<FormQuestion>>,
}

impl EventDraft {
    /// Apply a patch, producing the next draft.
    ///
    /// The only implicit effects are the price/free synchronisation rules:
    /// `is_free = true` resets `price` to zero, and a patched `price`
    /// re-derives `is_free`. When one patch carries both fields the price
    /// derivation runs last and wins.
    #[must_use]
    pub fn apply(&self, patch: DraftPatch) -> EventDraft {
        let mut next = self.clone();

        set(&mut next.title, patch.title);
        set(&mut next.description, patch.description);
        set(&mut next.tags, patch.tags);
        set(&mut next.mode, patch.mode);
        set(&mut next.venue, patch.venue);
        set(&mut next.participation_type, patch.participation_type);
        set_opt(&mut next.min_team_size, patch.min_team_size);
        set_opt(&mut next.max_team_size, patch.max_team_size);
        set(&mut next.no_participant_limit, patch.no_participant_limit);
        set_opt(&mut next.max_participants, patch.max_participants);
        set(&mut next.pricing_type, patch.pricing_type);
        set(&mut next.coupon_code, patch.coupon_code);
        set_opt(&mut next.coupon_discount, patch.coupon_discount);
        set(
            &mut next.enable_random_discounts,
            patch.enable_random_discounts,
        );
        set_opt(
            &mut next.random_discount_percentage,
            patch.random_discount_percentage,
        );
        set_opt(
            &mut next.random_discount_chance,
            patch.random_discount_chance,
        );

        if let Some(free) = patch.is_free {
            next.is_free = free;
            if free {
                next.price = 0.0;
            }
        }
        if let Some(price) = patch.price {
            next.price = price;
            next.is_free = price == 0.0;
        }

        if let Some(p) = patch.document_submission {
            p.merge_into(&mut next.document_submission);
        }
        if let Some(p) = patch.custom_form {
            p.merge_into(&mut next.custom_form);
        }
        if let Some(p) = patch.event_phases {
            p.merge_into(&mut next.event_phases);
        }
        if let Some(p) = patch.contact_info {
            p.merge_into(&mut next.contact_info);
        }

        next
    }
}

impl EventPhasesPatch {
    fn merge_into(self, target: &mut super::EventPhases) {
        set(&mut target.enable_shortlisting, self.enable_shortlisting);
        set(&mut target.enable_results, self.enable_results);
        if let Some(p) = self.registration_phase {
            p.merge_into(&mut target.registration_phase);
        }
        if let Some(p) = self.shortlisting_phase {
            p.window.merge_into(&mut target.shortlisting_phase.window);
            set_opt(
                &mut target.shortlisting_phase.results_date,
                p.results_date,
            );
            set_opt(
                &mut target.shortlisting_phase.results_time,
                p.results_time,
            );
        }
        if let Some(p) = self.event_phase {
            p.merge_into(&mut target.event_phase);
        }
        if let Some(p) = self.results_phase {
            set_opt(
                &mut target.results_phase.announcement_date,
                p.announcement_date,
            );
            set_opt(
                &mut target.results_phase.announcement_time,
                p.announcement_time,
            );
            set(&mut target.results_phase.public_results, p.public_results);
        }
        set(&mut target.payment_timing, self.payment_timing);
    }
}

impl PhaseWindowPatch {
    fn merge_into(self, target: &mut super::PhaseWindow) {
        set_opt(&mut target.start_date, self.start_date);
        set_opt(&mut target.start_time, self.start_time);
        set_opt(&mut target.end_date, self.end_date);
        set_opt(&mut target.end_time, self.end_time);
    }
}

impl ContactInfoPatch {
    fn merge_into(self, target: &mut super::ContactInfo) {
        set(&mut target.email, self.email);
        set(&mut target.phone, self.phone);
        set(&mut target.additional_emails, self.additional_emails);
        set(&mut target.additional_phones, self.additional_phones);
        if let Some(p) = self.social_media {
            set_opt(&mut target.social_media.website, p.website);
            set_opt(&mut target.social_media.linkedin, p.linkedin);
            set_opt(&mut target.social_media.twitter, p.twitter);
            set_opt(&mut target.social_media.instagram, p.instagram);
        }
        set(
            &mut target.share_contact_with_participants,
            self.share_contact_with_participants,
        );
        set(&mut target.visibility, self.visibility);
    }
}

impl DocumentSubmissionPatch {
    fn merge_into(self, target: &mut super::DocumentSubmission) {
        set(&mut target.require_documents, self.require_documents);
        set(&mut target.require_abstract, self.require_abstract);
        set(&mut target.abstract_file_types, self.abstract_file_types);
        set(&mut target.require_presentation, self.require_presentation);
        set(
            &mut target.presentation_file_types,
            self.presentation_file_types,
        );
    }
}

impl CustomFormPatch {
    fn merge_into(self, target: &mut super::CustomForm) {
        set(&mut target.use_custom_form, self.use_custom_form);
        set(&mut target.template, self.template);
        set(&mut target.questions, self.questions);
    }
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Like [`set`], but the draft field is itself optional.
fn set_opt<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}
