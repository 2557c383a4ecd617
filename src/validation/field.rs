use std::fmt::{self, Display, Formatter};

use super::Step;

/// Stable identifier for every field the validator can flag.
///
/// The `Display` form is the dotted path into the draft's JSON shape, which
/// the UI uses as a deterministic scroll/focus target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    // Basic info
    Title,
    Description,
    Tags,
    // Event details
    EventStartDate,
    EventStartTime,
    EventEndDate,
    EventEndTime,
    Venue,
    // Phase timeline
    RegistrationStartDate,
    RegistrationStartTime,
    RegistrationEndDate,
    RegistrationEndTime,
    ShortlistingStartDate,
    ShortlistingStartTime,
    ShortlistingEndDate,
    ShortlistingEndTime,
    ShortlistingResultsDate,
    ShortlistingResultsTime,
    ResultsAnnouncementDate,
    ResultsAnnouncementTime,
    PaymentTiming,
    // Participants
    MinTeamSize,
    MaxTeamSize,
    MaxParticipants,
    // Submission requirements
    RequireDocuments,
    AbstractFileTypes,
    PresentationFileTypes,
    FormQuestions,
    // Contact
    ContactEmail,
    ContactPhone,
    AdditionalEmails,
    AdditionalEmail(usize),
    AdditionalPhones,
    AdditionalPhone(usize),
    Website,
    Linkedin,
    Twitter,
    Instagram,
    // Pricing
    Price,
    CouponCode,
    CouponDiscount,
    RandomDiscountPercentage,
    RandomDiscountChance,
    /// Top-level key for a failed submission attempt; owned by no step.
    Submit,
}

impl FieldId {
    /// The wizard step that owns (and re-validates) this field.
    pub fn step(self) -> Option<Step> {
        use FieldId::*;
        match self {
            Title | Description | Tags => Some(Step::BasicInfo),
            EventStartDate | EventStartTime | EventEndDate | EventEndTime | Venue => {
                Some(Step::Details)
            }
            RegistrationStartDate | RegistrationStartTime | RegistrationEndDate
            | RegistrationEndTime | ShortlistingStartDate | ShortlistingStartTime
            | ShortlistingEndDate | ShortlistingEndTime | ShortlistingResultsDate
            | ShortlistingResultsTime | ResultsAnnouncementDate | ResultsAnnouncementTime
            | PaymentTiming => Some(Step::Timeline),
            MinTeamSize | MaxTeamSize | MaxParticipants => Some(Step::Participants),
            RequireDocuments | AbstractFileTypes | PresentationFileTypes | FormQuestions => {
                Some(Step::Requirements)
            }
            ContactEmail | ContactPhone | AdditionalEmails | AdditionalEmail(_)
            | AdditionalPhones | AdditionalPhone(_) | Website | Linkedin | Twitter
            | Instagram => Some(Step::Contact),
            Price | CouponCode | CouponDiscount | RandomDiscountPercentage
            | RandomDiscountChance => Some(Step::Pricing),
            Submit => None,
        }
    }
}

impl Display for FieldId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use FieldId::*;
        match self {
            Title => write!(f, "title"),
            Description => write!(f, "description"),
            Tags => write!(f, "tags"),
            EventStartDate => write!(f, "eventPhases.eventPhase.startDate"),
            EventStartTime => write!(f, "eventPhases.eventPhase.startTime"),
            EventEndDate => write!(f, "eventPhases.eventPhase.endDate"),
            EventEndTime => write!(f, "eventPhases.eventPhase.endTime"),
            Venue => write!(f, "venue"),
            RegistrationStartDate => write!(f, "eventPhases.registrationPhase.startDate"),
            RegistrationStartTime => write!(f, "eventPhases.registrationPhase.startTime"),
            RegistrationEndDate => write!(f, "eventPhases.registrationPhase.endDate"),
            RegistrationEndTime => write!(f, "eventPhases.registrationPhase.endTime"),
            ShortlistingStartDate => write!(f, "eventPhases.shortlistingPhase.startDate"),
            ShortlistingStartTime => write!(f, "eventPhases.shortlistingPhase.startTime"),
            ShortlistingEndDate => write!(f, "eventPhases.shortlistingPhase.endDate"),
            ShortlistingEndTime => write!(f, "eventPhases.shortlistingPhase.endTime"),
            ShortlistingResultsDate => write!(f, "eventPhases.shortlistingPhase.resultsDate"),
            ShortlistingResultsTime => write!(f, "eventPhases.shortlistingPhase.resultsTime"),
            ResultsAnnouncementDate => write!(f, "eventPhases.resultsPhase.announcementDate"),
            ResultsAnnouncementTime => write!(f, "eventPhases.resultsPhase.announcementTime"),
            PaymentTiming => write!(f, "eventPhases.paymentTiming"),
            MinTeamSize => write!(f, "minTeamSize"),
            MaxTeamSize => write!(f, "maxTeamSize"),
            MaxParticipants => write!(f, "maxParticipants"),
            RequireDocuments => write!(f, "documentSubmission.requireDocuments"),
            AbstractFileTypes => write!(f, "documentSubmission.abstractFileTypes"),
            PresentationFileTypes => write!(f, "documentSubmission.presentationFileTypes"),
            FormQuestions => write!(f, "customForm.questions"),
            ContactEmail => write!(f, "contactInfo.email"),
            ContactPhone => write!(f, "contactInfo.phone"),
            AdditionalEmails => write!(f, "contactInfo.additionalEmails"),
            AdditionalEmail(i) => write!(f, "contactInfo.additionalEmails.{i}"),
            AdditionalPhones => write!(f, "contactInfo.additionalPhones"),
            AdditionalPhone(i) => write!(f, "contactInfo.additionalPhones.{i}"),
            Website => write!(f, "contactInfo.socialMedia.website"),
            Linkedin => write!(f, "contactInfo.socialMedia.linkedin"),
            Twitter => write!(f, "contactInfo.socialMedia.twitter"),
            Instagram => write!(f, "contactInfo.socialMedia.instagram"),
            Price => write!(f, "price"),
            CouponCode => write!(f, "couponCode"),
            CouponDiscount => write!(f, "couponDiscount"),
            RandomDiscountPercentage => write!(f, "randomDiscountPercentage"),
            RandomDiscountChance => write!(f, "randomDiscountChance"),
            Submit => write!(f, "submit"),
        }
    }
}
