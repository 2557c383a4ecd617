//! The validation rule set, one table per wizard step.
//!
//! Rules are data, not control flow: each step owns a `const` table of
//! [`Rule`] entries, every rule records its violations itself, and the
//! declaration order of the tables fixes the insertion order of the error
//! map (and thereby the UI's focus order).

use lazy_static::lazy_static;
use regex::Regex;

use crate::model::draft::{
    EventDraft, EventMode, FormTemplate, ParticipationType, PaymentTiming,
};

use super::{ErrorMap, FieldId, Step, Violation};

lazy_static! {
    static ref EMAIL: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("pattern is valid");
    /// Primary numbers are plain 10-digit.
    static ref PHONE: Regex = Regex::new(r"^[0-9]{10}$").expect("pattern is valid");
    /// Additional numbers may carry a country prefix.
    static ref PHONE_EXTENDED: Regex =
        Regex::new(r"^\+?[0-9]{10,15}$").expect("pattern is valid");
    static ref LINK: Regex = Regex::new(r"^https?://\S+\.\S+$").expect("pattern is valid");
}

/// One validation rule: inspects the draft, records any violations.
pub struct Rule {
    pub name: &'static str,
    pub check: fn(&EventDraft, &mut ErrorMap),
}

/// The rule table for one wizard step.
pub fn rules_for(step: Step) -> &'static [Rule] {
    match step {
        Step::BasicInfo => BASIC_INFO,
        Step::Details => DETAILS,
        Step::Timeline => TIMELINE,
        Step::Participants => PARTICIPANTS,
        Step::Requirements => REQUIREMENTS,
        Step::Contact => CONTACT,
        Step::Pricing => PRICING,
    }
}

const BASIC_INFO: &[Rule] = &[
    Rule {
        name: "title-required",
        check: title_required,
    },
    Rule {
        name: "description-required",
        check: description_required,
    },
    Rule {
        name: "tags-required",
        check: tags_required,
    },
];

const DETAILS: &[Rule] = &[
    Rule {
        name: "event-window-required",
        check: event_window_required,
    },
    Rule {
        name: "venue-required",
        check: venue_required,
    },
];

const TIMELINE: &[Rule] = &[
    Rule {
        name: "registration-window-required",
        check: registration_window_required,
    },
    Rule {
        name: "shortlisting-window-required",
        check: shortlisting_window_required,
    },
    Rule {
        name: "shortlisting-after-registration",
        check: shortlisting_after_registration,
    },
    Rule {
        name: "results-announcement-required",
        check: results_announcement_required,
    },
    Rule {
        name: "payment-timing-needs-shortlisting",
        check: payment_timing_needs_shortlisting,
    },
];

const PARTICIPANTS: &[Rule] = &[
    Rule {
        name: "team-sizes-required",
        check: team_sizes_required,
    },
    Rule {
        name: "team-sizes-ordered",
        check: team_sizes_ordered,
    },
    Rule {
        name: "participant-cap-required",
        check: participant_cap_required,
    },
];

const REQUIREMENTS: &[Rule] = &[
    Rule {
        name: "document-kind-required",
        check: document_kind_required,
    },
    Rule {
        name: "abstract-file-types-required",
        check: abstract_file_types_required,
    },
    Rule {
        name: "presentation-file-types-required",
        check: presentation_file_types_required,
    },
    Rule {
        name: "custom-questions-required",
        check: custom_questions_required,
    },
];

const CONTACT: &[Rule] = &[
    Rule {
        name: "email-valid",
        check: email_valid,
    },
    Rule {
        name: "phone-valid",
        check: phone_valid,
    },
    Rule {
        name: "additional-emails-valid",
        check: additional_emails_valid,
    },
    Rule {
        name: "additional-phones-valid",
        check: additional_phones_valid,
    },
    Rule {
        name: "social-links-valid",
        check: social_links_valid,
    },
];

const PRICING: &[Rule] = &[
    Rule {
        name: "price-required",
        check: price_required,
    },
    Rule {
        name: "coupon-code-length",
        check: coupon_code_length,
    },
    Rule {
        name: "coupon-discount-valid",
        check: coupon_discount_valid,
    },
    Rule {
        name: "random-discount-params-valid",
        check: random_discount_params_valid,
    },
];

// ---- Basic info ----

fn title_required(draft: &EventDraft, errors: &mut ErrorMap) {
    if draft.title.trim().is_empty() {
        errors.insert(FieldId::Title, Violation::missing());
    }
}

fn description_required(draft: &EventDraft, errors: &mut ErrorMap) {
    if draft.description.trim().is_empty() {
        errors.insert(FieldId::Description, Violation::missing());
    }
}

fn tags_required(draft: &EventDraft, errors: &mut ErrorMap) {
    if draft.tags.is_empty() {
        errors.insert(FieldId::Tags, Violation::missing());
    }
}

// ---- Event details ----

fn event_window_required(draft: &EventDraft, errors: &mut ErrorMap) {
    let window = &draft.event_phases.event_phase;
    require(errors, window.start_date.is_some(), FieldId::EventStartDate);
    require(errors, window.start_time.is_some(), FieldId::EventStartTime);
    require(errors, window.end_date.is_some(), FieldId::EventEndDate);
    require(errors, window.end_time.is_some(), FieldId::EventEndTime);
}

fn venue_required(draft: &EventDraft, errors: &mut ErrorMap) {
    if draft.mode != EventMode::Virtual && draft.venue.trim().is_empty() {
        errors.insert(FieldId::Venue, Violation::missing());
    }
}

// ---- Phase timeline ----

fn registration_window_required(draft: &EventDraft, errors: &mut ErrorMap) {
    let window = &draft.event_phases.registration_phase;
    require(
        errors,
        window.start_date.is_some(),
        FieldId::RegistrationStartDate,
    );
    require(
        errors,
        window.start_time.is_some(),
        FieldId::RegistrationStartTime,
    );
    require(
        errors,
        window.end_date.is_some(),
        FieldId::RegistrationEndDate,
    );
    require(
        errors,
        window.end_time.is_some(),
        FieldId::RegistrationEndTime,
    );
}

fn shortlisting_window_required(draft: &EventDraft, errors: &mut ErrorMap) {
    let phases = &draft.event_phases;
    if !phases.enable_shortlisting {
        return;
    }
    let phase = &phases.shortlisting_phase;
    require(
        errors,
        phase.window.start_date.is_some(),
        FieldId::ShortlistingStartDate,
    );
    require(
        errors,
        phase.window.start_time.is_some(),
        FieldId::ShortlistingStartTime,
    );
    require(
        errors,
        phase.window.end_date.is_some(),
        FieldId::ShortlistingEndDate,
    );
    require(
        errors,
        phase.window.end_time.is_some(),
        FieldId::ShortlistingEndTime,
    );
    require(
        errors,
        phase.results_date.is_some(),
        FieldId::ShortlistingResultsDate,
    );
    require(
        errors,
        phase.results_time.is_some(),
        FieldId::ShortlistingResultsTime,
    );
}

/// Shortlisting may only begin once registration has closed. Incomparable
/// instants are skipped here; the required-field rules flag them instead.
fn shortlisting_after_registration(draft: &EventDraft, errors: &mut ErrorMap) {
    let phases = &draft.event_phases;
    if !phases.enable_shortlisting {
        return;
    }
    if let (Some(start), Some(close)) = (
        phases.shortlisting_phase.window.start(),
        phases.registration_phase.end(),
    ) {
        if start < close {
            errors.insert(
                FieldId::ShortlistingStartDate,
                Violation::ordering("Shortlisting must begin after registration closes"),
            );
        }
    }
}

fn results_announcement_required(draft: &EventDraft, errors: &mut ErrorMap) {
    let phases = &draft.event_phases;
    if !phases.enable_results {
        return;
    }
    require(
        errors,
        phases.results_phase.announcement_date.is_some(),
        FieldId::ResultsAnnouncementDate,
    );
    require(
        errors,
        phases.results_phase.announcement_time.is_some(),
        FieldId::ResultsAnnouncementTime,
    );
}

fn payment_timing_needs_shortlisting(draft: &EventDraft, errors: &mut ErrorMap) {
    let phases = &draft.event_phases;
    if phases.payment_timing == PaymentTiming::AfterShortlisting && !phases.enable_shortlisting {
        errors.insert(
            FieldId::PaymentTiming,
            Violation::dependent(
                "Collecting payment after shortlisting requires a shortlisting phase",
            ),
        );
    }
}

// ---- Participants ----

fn team_sizes_required(draft: &EventDraft, errors: &mut ErrorMap) {
    if draft.participation_type != ParticipationType::Team {
        return;
    }
    match draft.min_team_size {
        None => errors.insert(FieldId::MinTeamSize, Violation::missing()),
        Some(0) => errors.insert(
            FieldId::MinTeamSize,
            Violation::format("Team size must be at least 1"),
        ),
        Some(_) => {}
    }
    match draft.max_team_size {
        None => errors.insert(FieldId::MaxTeamSize, Violation::missing()),
        Some(0) => errors.insert(
            FieldId::MaxTeamSize,
            Violation::format("Team size must be at least 1"),
        ),
        Some(_) => {}
    }
}

fn team_sizes_ordered(draft: &EventDraft, errors: &mut ErrorMap) {
    if draft.participation_type != ParticipationType::Team {
        return;
    }
    if let (Some(min), Some(max)) = (draft.min_team_size, draft.max_team_size) {
        if min > max {
            errors.insert(
                FieldId::MinTeamSize,
                Violation::dependent("Minimum team size cannot exceed the maximum"),
            );
        }
    }
}

fn participant_cap_required(draft: &EventDraft, errors: &mut ErrorMap) {
    if draft.no_participant_limit {
        return;
    }
    match draft.max_participants {
        None => errors.insert(FieldId::MaxParticipants, Violation::missing()),
        Some(0) => errors.insert(
            FieldId::MaxParticipants,
            Violation::format("Participant limit must be at least 1"),
        ),
        Some(_) => {}
    }
}

// ---- Submission requirements ----

fn document_kind_required(draft: &EventDraft, errors: &mut ErrorMap) {
    let docs = &draft.document_submission;
    if docs.require_documents && !docs.require_abstract && !docs.require_presentation {
        errors.insert(
            FieldId::RequireDocuments,
            Violation::dependent("Select at least one document type to collect"),
        );
    }
}

fn abstract_file_types_required(draft: &EventDraft, errors: &mut ErrorMap) {
    let docs = &draft.document_submission;
    if docs.require_documents && docs.require_abstract && docs.abstract_file_types.is_empty() {
        errors.insert(FieldId::AbstractFileTypes, Violation::missing());
    }
}

fn presentation_file_types_required(draft: &EventDraft, errors: &mut ErrorMap) {
    let docs = &draft.document_submission;
    if docs.require_documents
        && docs.require_presentation
        && docs.presentation_file_types.is_empty()
    {
        errors.insert(FieldId::PresentationFileTypes, Violation::missing());
    }
}

fn custom_questions_required(draft: &EventDraft, errors: &mut ErrorMap) {
    let form = &draft.custom_form;
    if form.use_custom_form
        && form.template == FormTemplate::Custom
        && form.questions.is_empty()
    {
        errors.insert(FieldId::FormQuestions, Violation::missing());
    }
}

// ---- Contact ----

fn email_valid(draft: &EventDraft, errors: &mut ErrorMap) {
    let email = draft.contact_info.email.trim();
    if email.is_empty() {
        errors.insert(FieldId::ContactEmail, Violation::missing());
    } else if !EMAIL.is_match(email) {
        errors.insert(
            FieldId::ContactEmail,
            Violation::format("Enter a valid email address"),
        );
    }
}

fn phone_valid(draft: &EventDraft, errors: &mut ErrorMap) {
    let phone = draft.contact_info.phone.trim();
    if phone.is_empty() {
        errors.insert(FieldId::ContactPhone, Violation::missing());
    } else if !PHONE.is_match(phone) {
        errors.insert(
            FieldId::ContactPhone,
            Violation::format("Enter a 10-digit phone number"),
        );
    }
}

fn additional_emails_valid(draft: &EventDraft, errors: &mut ErrorMap) {
    let emails = &draft.contact_info.additional_emails;
    if emails.len() > 3 {
        errors.insert(
            FieldId::AdditionalEmails,
            Violation::length("At most 3 additional email addresses are allowed"),
        );
    }
    for (i, email) in emails.iter().enumerate() {
        if !EMAIL.is_match(email.trim()) {
            errors.insert(
                FieldId::AdditionalEmail(i),
                Violation::format("Enter a valid email address"),
            );
        }
    }
}

fn additional_phones_valid(draft: &EventDraft, errors: &mut ErrorMap) {
    let phones = &draft.contact_info.additional_phones;
    if phones.len() > 3 {
        errors.insert(
            FieldId::AdditionalPhones,
            Violation::length("At most 3 additional phone numbers are allowed"),
        );
    }
    for (i, phone) in phones.iter().enumerate() {
        if !PHONE_EXTENDED.is_match(phone.trim()) {
            errors.insert(
                FieldId::AdditionalPhone(i),
                Violation::format("Enter a valid phone number"),
            );
        }
    }
}

fn social_links_valid(draft: &EventDraft, errors: &mut ErrorMap) {
    let social = &draft.contact_info.social_media;
    let links = [
        (FieldId::Website, &social.website),
        (FieldId::Linkedin, &social.linkedin),
        (FieldId::Twitter, &social.twitter),
        (FieldId::Instagram, &social.instagram),
    ];
    for (field, link) in links {
        if let Some(link) = link {
            if !link.trim().is_empty() && !LINK.is_match(link.trim()) {
                errors.insert(field, Violation::format("Enter a valid link"));
            }
        }
    }
}

// ---- Pricing ----

fn price_required(draft: &EventDraft, errors: &mut ErrorMap) {
    if !draft.is_free && draft.price <= 0.0 {
        errors.insert(FieldId::Price, Violation::missing());
    }
}

fn coupon_code_length(draft: &EventDraft, errors: &mut ErrorMap) {
    if draft.coupon_code.chars().count() > 10 {
        errors.insert(
            FieldId::CouponCode,
            Violation::length("Coupon code must be at most 10 characters"),
        );
    }
}

fn coupon_discount_valid(draft: &EventDraft, errors: &mut ErrorMap) {
    if draft.coupon_code.is_empty() {
        return;
    }
    match draft.coupon_discount {
        None => errors.insert(FieldId::CouponDiscount, Violation::missing()),
        Some(discount) if !(1..=100).contains(&discount) => errors.insert(
            FieldId::CouponDiscount,
            Violation::format("Enter a percentage between 1 and 100"),
        ),
        Some(_) => {}
    }
}

fn random_discount_params_valid(draft: &EventDraft, errors: &mut ErrorMap) {
    if !draft.enable_random_discounts {
        return;
    }
    percentage(errors, draft.random_discount_percentage, FieldId::RandomDiscountPercentage);
    percentage(errors, draft.random_discount_chance, FieldId::RandomDiscountChance);
}

// ---- Helpers ----

fn require(errors: &mut ErrorMap, present: bool, field: FieldId) {
    if !present {
        errors.insert(field, Violation::missing());
    }
}

fn percentage(errors: &mut ErrorMap, value: Option<u32>, field: FieldId) {
    match value {
        None => errors.insert(field, Violation::missing()),
        Some(value) if !(1..=100).contains(&value) => errors.insert(
            field,
            Violation::format("Enter a percentage between 1 and 100"),
        ),
        Some(_) => {}
    }
}
