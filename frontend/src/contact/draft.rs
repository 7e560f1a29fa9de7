use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Number,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Number,
        ContactField::Message,
    ];

    /// Key used both as the input's `name` attribute and in the JSON body.
    pub fn key(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Number => "number",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Number => "phone number",
            ContactField::Message => "message",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your {}.", .0.label())]
    Missing(ContactField),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
}

/// What the visitor has typed so far. Serializes to the body the form relay
/// expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub number: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Number => &self.number,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Number => &mut self.number,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(field) = ContactField::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
        {
            return Err(ValidationError::Missing(field));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        if !looks_like_phone(self.number.trim()) {
            return Err(ValidationError::InvalidPhone);
        }
        Ok(())
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Phone numbers are kept as typed (leading zeros, `+`, separators); only the
/// digit count is checked.
fn looks_like_phone(number: &str) -> bool {
    let body = number.strip_prefix('+').unwrap_or(number);
    let allowed = body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '.'));
    let digits = body.chars().filter(char::is_ascii_digit).count();
    allowed && (7..=15).contains(&digits)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn filled() -> ContactDraft {
        ContactDraft {
            name: "Riya Sharma".to_string(),
            email: "riya@example.com".to_string(),
            number: "+91 09598 822384".to_string(),
            message: "Need a 2 minute reel edited".to_string(),
        }
    }

    #[test]
    fn serializes_with_relay_field_names() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["name"], "Riya Sharma");
        assert_eq!(json["email"], "riya@example.com");
        assert_eq!(json["number"], "+91 09598 822384");
        assert_eq!(json["message"], "Need a 2 minute reel edited");
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[test]
    fn set_and_clear_fields() {
        let mut draft = ContactDraft::default();
        assert_eq!(draft, ContactDraft::default());

        for field in ContactField::ALL {
            draft.set(field, format!("value for {}", field.key()));
        }
        assert_eq!(draft.get(ContactField::Number), "value for number");
        assert_ne!(draft, ContactDraft::default());

        draft.clear();
        assert_eq!(draft, ContactDraft::default());
    }

    #[test]
    fn maps_input_names_back_to_fields() {
        assert_eq!(ContactField::from_key("number"), Some(ContactField::Number));
        assert_eq!(ContactField::from_key("phone"), None);
    }

    #[test]
    fn reports_first_missing_field() {
        let mut draft = filled();
        draft.set(ContactField::Email, "   ");
        draft.set(ContactField::Message, "");
        assert_eq!(
            draft.validate(),
            Err(ValidationError::Missing(ContactField::Email))
        );
        assert_eq!(
            ValidationError::Missing(ContactField::Number).to_string(),
            "Please enter your phone number."
        );
    }

    #[test]
    fn keeps_leading_zeros_in_phone_numbers() {
        let mut draft = filled();
        draft.set(ContactField::Number, "09598822384");
        assert_eq!(draft.validate(), Ok(()));
        assert_eq!(draft.number, "09598822384");
    }

    #[test]
    fn rejects_bad_email_and_phone() {
        let mut draft = filled();
        draft.set(ContactField::Email, "riya.example.com");
        assert_eq!(draft.validate(), Err(ValidationError::InvalidEmail));

        let mut draft = filled();
        draft.set(ContactField::Number, "call me");
        assert_eq!(draft.validate(), Err(ValidationError::InvalidPhone));

        draft.set(ContactField::Number, "12345");
        assert_eq!(draft.validate(), Err(ValidationError::InvalidPhone));
    }
}
