use super::{FieldId, Step};

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// A (conditionally) required field is absent.
    MissingRequiredField,
    /// An email, phone, number or link that does not match its pattern.
    InvalidFormat,
    /// A phase starts before a predecessor phase has ended.
    OrderingViolation,
    /// A field conflicts with another field's setting.
    DependentConstraintViolation,
    /// A value exceeds its length limit.
    LengthConstraint,
    /// The external persistence call failed.
    SubmissionFailure,
}

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    /// User-facing description, surfaced inline next to the field.
    pub message: String,
}

impl Violation {
    pub fn missing() -> Self {
        Self {
            kind: ViolationKind::MissingRequiredField,
            message: "This field is required".to_string(),
        }
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self {
            kind: ViolationKind::InvalidFormat,
            message: message.into(),
        }
    }

    pub fn ordering(message: impl Into<String>) -> Self {
        Self {
            kind: ViolationKind::OrderingViolation,
            message: message.into(),
        }
    }

    pub fn dependent(message: impl Into<String>) -> Self {
        Self {
            kind: ViolationKind::DependentConstraintViolation,
            message: message.into(),
        }
    }

    pub fn length(message: impl Into<String>) -> Self {
        Self {
            kind: ViolationKind::LengthConstraint,
            message: message.into(),
        }
    }

    pub fn submission(message: impl Into<String>) -> Self {
        Self {
            kind: ViolationKind::SubmissionFailure,
            message: message.into(),
        }
    }
}

/// Field-keyed validation findings, in insertion order.
///
/// Insertion order is the declaration order of the rules that produced the
/// entries, so [`ErrorMap::first`] is the field the UI scrolls to. One entry
/// is recorded per violated rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: Vec<(FieldId, Violation)>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldId, violation: Violation) {
        self.entries.push((field, violation));
    }

    /// The first violation recorded against the field, if any.
    pub fn get(&self, field: FieldId) -> Option<&Violation> {
        self.entries
            .iter()
            .find(|(id, _)| *id == field)
            .map(|(_, violation)| violation)
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.get(field).is_some()
    }

    /// The earliest-inserted offending field.
    pub fn first(&self) -> Option<FieldId> {
        self.entries.first().map(|(id, _)| *id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &Violation)> {
        self.entries.iter().map(|(id, violation)| (*id, violation))
    }

    /// Drop every entry owned by the given step, ahead of re-validating it.
    pub fn clear_step(&mut self, step: Step) {
        self.entries.retain(|(id, _)| id.step() != Some(step));
    }

    /// Append another map's entries after this map's own.
    pub fn extend(&mut self, other: ErrorMap) {
        self.entries.extend(other.entries);
    }
}

impl IntoIterator for ErrorMap {
    type Item = (FieldId, Violation);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_preserved() {
        let mut errors = ErrorMap::new();
        errors.insert(FieldId::Venue, Violation::missing());
        errors.insert(FieldId::Title, Violation::missing());
        assert_eq!(errors.first(), Some(FieldId::Venue));
        let fields: Vec<_> = errors.iter().map(|(id, _)| id).collect();
        assert_eq!(fields, vec![FieldId::Venue, FieldId::Title]);
    }

    #[test]
    fn clear_step_only_touches_that_step() {
        let mut errors = ErrorMap::new();
        errors.insert(FieldId::Title, Violation::missing());
        errors.insert(FieldId::ContactEmail, Violation::missing());
        errors.clear_step(Step::Contact);
        assert!(errors.contains(FieldId::Title));
        assert!(!errors.contains(FieldId::ContactEmail));
    }

    #[test]
    fn clear_step_never_drops_the_submit_entry() {
        let mut errors = ErrorMap::new();
        errors.insert(FieldId::Submit, Violation::submission("failed"));
        for step in Step::ALL {
            errors.clear_step(step);
        }
        assert!(errors.contains(FieldId::Submit));
    }
}
