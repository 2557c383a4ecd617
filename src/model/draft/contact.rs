use serde::{Deserialize, Serialize};

/// Organiser contact details attached to an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    /// Primary contact address.
    pub email: String,
    /// Primary contact number.
    pub phone: String,
    /// Up to three extra addresses.
    pub additional_emails: Vec<String>,
    /// Up to three extra numbers.
    pub additional_phones: Vec<String>,
    pub social_media: SocialMedia,
    /// Whether registered participants can see these details.
    pub share_contact_with_participants: bool,
    pub visibility: Visibility,
}

/// Optional social links shown on the event page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
}

/// Who can see the organiser's contact section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Public
    }
}
