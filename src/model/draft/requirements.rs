use serde::{Deserialize, Serialize};

/// Document uploads demanded from participants when they submit work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSubmission {
    /// Master switch; the remaining fields only matter when this is set.
    pub require_documents: bool,
    pub require_abstract: bool,
    /// Allowed upload formats for the abstract, e.g. `pdf`.
    pub abstract_file_types: Vec<String>,
    pub require_presentation: bool,
    /// Allowed upload formats for the presentation.
    pub presentation_file_types: Vec<String>,
}

/// Registration form configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomForm {
    pub use_custom_form: bool,
    pub template: FormTemplate,
    /// Only meaningful for the `custom` template.
    pub questions: Vec<FormQuestion>,
}

/// Which registration form participants fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormTemplate {
    /// The stock name/email/institution form.
    Standard,
    /// An organiser-defined question list.
    Custom,
}

impl Default for FormTemplate {
    fn default() -> Self {
        Self::Standard
    }
}

/// One question on a custom registration form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormQuestion {
    pub prompt: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub required: bool,
}

/// The answer widget a question renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Text,
    Number,
    Checkbox,
}
