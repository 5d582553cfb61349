use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

impl FieldKind {
    /// From an `<input type=..>` value; textareas are mapped by the caller.
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type.eq_ignore_ascii_case("email") {
            Self::Email
        } else {
            Self::Text
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
}

impl FormField {
    pub fn new(kind: FieldKind, required: bool, value: impl Into<String>) -> Self {
        Self {
            kind,
            required,
            value: value.into(),
        }
    }

    /// Required fields must be non-blank; non-blank email fields must look
    /// like an address. Email values are checked untrimmed.
    pub fn is_valid(&self) -> bool {
        let trimmed = self.value.trim();
        if self.required && trimmed.is_empty() {
            return false;
        }
        if self.kind == FieldKind::Email && !trimmed.is_empty() {
            return is_valid_email(&self.value);
        }
        true
    }
}

/// Per-field verdicts, in the same order as the fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FormValidation {
    pub field_valid: Vec<bool>,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.field_valid.iter().all(|v| *v)
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = usize> + '_ {
        self.field_valid
            .iter()
            .enumerate()
            .filter(|(_, valid)| !**valid)
            .map(|(i, _)| i)
    }
}

pub fn validate(fields: &[FormField]) -> FormValidation {
    FormValidation {
        field_valid: fields.iter().map(FormField::is_valid).collect(),
    }
}

/// Simulated send: the button is locked while "sending" and restored after.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Idle,
    Sending { original_label: String },
}

impl Submission {
    /// Start sending. Returns `false` if a send is already in flight.
    pub fn begin(&mut self, current_label: &str) -> bool {
        if matches!(self, Self::Sending { .. }) {
            return false;
        }
        *self = Self::Sending {
            original_label: current_label.to_string(),
        };
        true
    }

    /// Finish sending and hand back the label to restore.
    pub fn complete(&mut self) -> Option<String> {
        match std::mem::replace(self, Self::Idle) {
            Self::Sending { original_label } => Some(original_label),
            Self::Idle => None,
        }
    }
}
