//! Scoped validation of an event draft.
//!
//! Step scope checks only the fields one wizard step owns; full scope runs
//! every step's table in order, covering the cross-phase constraints the
//! individual steps cannot see in isolation. Validation never fails itself:
//! the result is an ordered error map, and an empty map means the draft is
//! valid for the scope.

mod errors;
mod field;
mod rules;

pub use errors::{ErrorMap, Violation, ViolationKind};
pub use field::FieldId;
pub use rules::{rules_for, Rule};

use crate::model::draft::EventDraft;

/// The seven wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    BasicInfo,
    Details,
    Timeline,
    Participants,
    Requirements,
    Contact,
    Pricing,
}

impl Step {
    pub const ALL: [Step; 7] = [
        Step::BasicInfo,
        Step::Details,
        Step::Timeline,
        Step::Participants,
        Step::Requirements,
        Step::Contact,
        Step::Pricing,
    ];

    pub const FIRST: Step = Step::BasicInfo;
    pub const LAST: Step = Step::Pricing;

    /// 1-based position, as shown in the wizard's progress bar.
    pub fn number(self) -> u8 {
        match self {
            Step::BasicInfo => 1,
            Step::Details => 2,
            Step::Timeline => 3,
            Step::Participants => 4,
            Step::Requirements => 5,
            Step::Contact => 6,
            Step::Pricing => 7,
        }
    }

    pub fn next(self) -> Option<Step> {
        let index = usize::from(self.number());
        Self::ALL.get(index).copied()
    }

    pub fn previous(self) -> Option<Step> {
        let index = usize::from(self.number()).checked_sub(2)?;
        Self::ALL.get(index).copied()
    }
}

impl Default for Step {
    /// A fresh wizard opens on step 1.
    fn default() -> Self {
        Step::FIRST
    }
}

/// What part of the draft to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Only the rules of one wizard step.
    Step(Step),
    /// Every rule, ahead of submission.
    Full,
}

/// Validate the draft against the given scope.
pub fn validate(draft: &EventDraft, scope: Scope) -> ErrorMap {
    let mut errors = ErrorMap::new();
    match scope {
        Scope::Step(step) => run_step(draft, step, &mut errors),
        Scope::Full => {
            for step in Step::ALL {
                run_step(draft, step, &mut errors);
            }
        }
    }
    errors
}

fn run_step(draft: &EventDraft, step: Step, errors: &mut ErrorMap) {
    for rule in rules_for(step) {
        (rule.check)(draft, errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{NaiveDate, NaiveTime};

    use crate::model::draft::{
        DraftPatch, EventMode, EventPhasesPatch, PaymentTiming, PhaseWindowPatch,
        ShortlistingPhasePatch,
    };

    fn full(draft: &EventDraft) -> ErrorMap {
        validate(draft, Scope::Full)
    }

    #[test]
    fn complete_draft_passes_full_validation() {
        let errors = full(&EventDraft::example());
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn shortlisted_draft_passes_full_validation() {
        let errors = full(&EventDraft::example_shortlisted());
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn paid_team_draft_passes_full_validation() {
        let errors = full(&EventDraft::example_paid_team());
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn empty_draft_fails_in_every_step_scope_that_has_unconditional_rules() {
        let draft = EventDraft::default();
        assert!(!validate(&draft, Scope::Step(Step::BasicInfo)).is_empty());
        assert!(!validate(&draft, Scope::Step(Step::Details)).is_empty());
        assert!(!validate(&draft, Scope::Step(Step::Timeline)).is_empty());
        assert!(!validate(&draft, Scope::Step(Step::Participants)).is_empty());
        // Documents and custom form default to off, so step 5 is clean.
        assert!(validate(&draft, Scope::Step(Step::Requirements)).is_empty());
        assert!(!validate(&draft, Scope::Step(Step::Contact)).is_empty());
        // A free draft with no coupon has nothing to check in step 7.
        assert!(validate(&draft, Scope::Step(Step::Pricing)).is_empty());
    }

    #[test]
    fn step_scope_ignores_other_steps_fields() {
        let mut draft = EventDraft::example();
        draft.contact_info.email = String::new();
        // Step 1 does not look at the contact section.
        assert!(validate(&draft, Scope::Step(Step::BasicInfo)).is_empty());
        let contact = validate(&draft, Scope::Step(Step::Contact));
        assert_eq!(contact.len(), 1);
        assert_eq!(contact.first(), Some(FieldId::ContactEmail));
    }

    #[test]
    fn early_shortlisting_is_exactly_one_ordering_violation() {
        let mut draft = EventDraft::example_shortlisted();
        // Registration closes 2024-06-10 18:00; start shortlisting days before.
        draft.event_phases.shortlisting_phase.window.start_date =
            NaiveDate::from_ymd_opt(2024, 6, 5);
        draft.event_phases.shortlisting_phase.window.start_time =
            NaiveTime::from_hms_opt(9, 0, 0);
        let errors = full(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first(), Some(FieldId::ShortlistingStartDate));
        assert_eq!(
            errors.get(FieldId::ShortlistingStartDate).unwrap().kind,
            ViolationKind::OrderingViolation
        );
    }

    #[test]
    fn clean_shortlisted_draft_starts_after_registration_closes() {
        let draft = EventDraft::example_shortlisted();
        assert!(full(&draft).is_empty());
        let phases = &draft.event_phases;
        assert!(
            phases.shortlisting_phase.window.start().unwrap()
                >= phases.registration_phase.end().unwrap()
        );
    }

    #[test]
    fn incomparable_shortlisting_start_is_missing_not_misordered() {
        let mut draft = EventDraft::example_shortlisted();
        draft.event_phases.shortlisting_phase.window.start_time = None;
        let errors = full(&draft);
        assert_eq!(errors.len(), 1);
        let violation = errors.get(FieldId::ShortlistingStartTime).unwrap();
        assert_eq!(violation.kind, ViolationKind::MissingRequiredField);
    }

    #[test]
    fn payment_after_shortlisting_needs_the_phase_enabled() {
        let draft = EventDraft::example().apply(DraftPatch {
            event_phases: Some(EventPhasesPatch {
                payment_timing: Some(PaymentTiming::AfterShortlisting),
                ..EventPhasesPatch::default()
            }),
            ..DraftPatch::default()
        });
        let errors = full(&draft);
        assert_eq!(errors.len(), 1);
        let violation = errors.get(FieldId::PaymentTiming).unwrap();
        assert_eq!(violation.kind, ViolationKind::DependentConstraintViolation);
    }

    #[test]
    fn payment_after_shortlisting_is_fine_with_the_phase_enabled() {
        let mut draft = EventDraft::example_shortlisted();
        draft.event_phases.payment_timing = PaymentTiming::AfterShortlisting;
        assert!(full(&draft).is_empty());
    }

    #[test]
    fn inverted_team_sizes_are_one_dependent_violation_on_the_minimum() {
        let mut draft = EventDraft::example_paid_team();
        draft.min_team_size = Some(5);
        draft.max_team_size = Some(3);
        let errors = full(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first(), Some(FieldId::MinTeamSize));
        assert_eq!(
            errors.get(FieldId::MinTeamSize).unwrap().kind,
            ViolationKind::DependentConstraintViolation
        );
    }

    #[test]
    fn team_sizes_are_ignored_for_individual_events() {
        let mut draft = EventDraft::example();
        draft.min_team_size = Some(5);
        draft.max_team_size = Some(3);
        assert!(full(&draft).is_empty());
    }

    #[test]
    fn missing_team_sizes_are_required_for_team_events() {
        let mut draft = EventDraft::example_paid_team();
        draft.min_team_size = None;
        draft.max_team_size = None;
        let errors = validate(&draft, Scope::Step(Step::Participants));
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(FieldId::MinTeamSize));
        assert!(errors.contains(FieldId::MaxTeamSize));
    }

    #[test]
    fn oversized_coupon_code_is_one_length_violation() {
        let mut draft = EventDraft::example();
        draft.coupon_code = "SUMMERFEST2024".to_string();
        draft.coupon_discount = Some(20);
        let errors = full(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first(), Some(FieldId::CouponCode));
        assert_eq!(
            errors.get(FieldId::CouponCode).unwrap().kind,
            ViolationKind::LengthConstraint
        );
    }

    #[test]
    fn a_coupon_code_requires_a_discount() {
        let mut draft = EventDraft::example();
        draft.coupon_code = "SUMMER10".to_string();
        let errors = full(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FieldId::CouponDiscount).unwrap().kind,
            ViolationKind::MissingRequiredField
        );
    }

    #[test]
    fn paid_event_with_zero_price_is_invalid() {
        let draft = EventDraft::example().apply(DraftPatch {
            is_free: Some(false),
            ..DraftPatch::default()
        });
        let errors = full(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first(), Some(FieldId::Price));
    }

    #[test]
    fn venue_is_only_required_for_non_virtual_events() {
        let mut draft = EventDraft::example();
        draft.venue = String::new();
        assert!(full(&draft).contains(FieldId::Venue));

        draft.mode = EventMode::Virtual;
        assert!(full(&draft).is_empty());
    }

    #[test]
    fn document_requirements_cascade() {
        let mut draft = EventDraft::example();
        draft.document_submission.require_documents = true;
        let errors = full(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FieldId::RequireDocuments).unwrap().kind,
            ViolationKind::DependentConstraintViolation
        );

        draft.document_submission.require_abstract = true;
        let errors = full(&draft);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(FieldId::AbstractFileTypes));

        draft.document_submission.abstract_file_types = vec!["pdf".to_string()];
        assert!(full(&draft).is_empty());
    }

    #[test]
    fn custom_form_requires_questions() {
        let mut draft = EventDraft::example();
        draft.custom_form.use_custom_form = true;
        // The standard template carries its own questions.
        assert!(full(&draft).is_empty());

        draft.custom_form.template = crate::model::draft::FormTemplate::Custom;
        let errors = full(&draft);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(FieldId::FormQuestions));
    }

    #[test]
    fn malformed_contact_details_are_format_violations() {
        let mut draft = EventDraft::example();
        draft.contact_info.email = "not-an-email".to_string();
        draft.contact_info.phone = "12345".to_string();
        draft.contact_info.additional_emails = vec!["also-bad".to_string()];
        let errors = full(&draft);
        assert_eq!(errors.len(), 3);
        for (_, violation) in errors.iter() {
            assert_eq!(violation.kind, ViolationKind::InvalidFormat);
        }
        assert!(errors.contains(FieldId::AdditionalEmail(0)));
    }

    #[test]
    fn four_additional_emails_are_too_many() {
        let mut draft = EventDraft::example();
        draft.contact_info.additional_emails = (0..4)
            .map(|i| format!("extra{i}@example.com"))
            .collect();
        let errors = full(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FieldId::AdditionalEmails).unwrap().kind,
            ViolationKind::LengthConstraint
        );
    }

    #[test]
    fn social_links_must_be_urls() {
        let mut draft = EventDraft::example();
        draft.contact_info.social_media.website = Some("example dot com".to_string());
        let errors = full(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FieldId::Website).unwrap().kind,
            ViolationKind::InvalidFormat
        );

        draft.contact_info.social_media.website = Some("https://example.com".to_string());
        assert!(full(&draft).is_empty());
    }

    #[test]
    fn random_discounts_need_both_parameters() {
        let mut draft = EventDraft::example();
        draft.enable_random_discounts = true;
        draft.random_discount_percentage = Some(150);
        let errors = full(&draft);
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get(FieldId::RandomDiscountPercentage).unwrap().kind,
            ViolationKind::InvalidFormat
        );
        assert_eq!(
            errors.get(FieldId::RandomDiscountChance).unwrap().kind,
            ViolationKind::MissingRequiredField
        );
    }

    #[test]
    fn unlimited_events_need_no_participant_cap() {
        let mut draft = EventDraft::example();
        draft.no_participant_limit = true;
        draft.max_participants = None;
        assert!(full(&draft).is_empty());

        draft.no_participant_limit = false;
        assert!(full(&draft).contains(FieldId::MaxParticipants));
    }

    #[test]
    fn full_scope_reports_in_step_order() {
        // Break one rule in step 1 and one in step 7; the step-1 finding
        // must come first so the UI focuses it.
        let mut draft = EventDraft::example();
        draft.title = String::new();
        draft.coupon_code = "WAYTOOLONGCODE".to_string();
        draft.coupon_discount = Some(10);
        let errors = full(&draft);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first(), Some(FieldId::Title));
    }

    #[test]
    fn incomparable_instants_never_default_silently() {
        // A registration window missing its end time is not comparable, so
        // the shortlisting ordering rule stays quiet and the missing time
        // is reported instead.
        let mut draft = EventDraft::example_shortlisted();
        draft.event_phases.registration_phase.end_time = None;
        let errors = full(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FieldId::RegistrationEndTime).unwrap().kind,
            ViolationKind::MissingRequiredField
        );
    }

    #[test]
    fn validation_is_pure() {
        let draft = EventDraft::example();
        let before = draft.clone();
        let _ = full(&draft);
        assert_eq!(draft, before);
    }

    #[test]
    fn step_numbers_are_one_based_and_ordered() {
        assert_eq!(Step::FIRST.number(), 1);
        assert_eq!(Step::LAST.number(), 7);
        assert_eq!(Step::BasicInfo.next(), Some(Step::Details));
        assert_eq!(Step::Pricing.next(), None);
        assert_eq!(Step::BasicInfo.previous(), None);
        assert_eq!(Step::Pricing.previous(), Some(Step::Contact));
    }

    #[test]
    fn every_step_has_rules() {
        for step in Step::ALL {
            assert!(!rules_for(step).is_empty());
        }
    }

    #[test]
    fn shortlisting_window_can_be_patched_in() {
        let draft = EventDraft::example().apply(DraftPatch {
            event_phases: Some(EventPhasesPatch {
                enable_shortlisting: Some(true),
                shortlisting_phase: Some(ShortlistingPhasePatch {
                    window: PhaseWindowPatch {
                        start_date: NaiveDate::from_ymd_opt(2024, 6, 10),
                        start_time: NaiveTime::from_hms_opt(18, 0, 0),
                        end_date: NaiveDate::from_ymd_opt(2024, 6, 10),
                        end_time: NaiveTime::from_hms_opt(22, 0, 0),
                    },
                    results_date: NaiveDate::from_ymd_opt(2024, 6, 10),
                    results_time: NaiveTime::from_hms_opt(23, 0, 0),
                }),
                ..EventPhasesPatch::default()
            }),
            ..DraftPatch::default()
        });
        assert!(full(&draft).is_empty());
    }
}
