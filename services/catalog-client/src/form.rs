//! Per-field validation of the game form.

use std::fmt;

use common::{is_valid_image_url, parse_form_date};

use crate::mapper::GameViewModel;

pub const INVALID_FORM_ALERT: &str = "Invalid form, check the fields for validation errors";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    ImageUrl,
    DateRelease,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::Name => write!(f, "name"),
            FormField::ImageUrl => write!(f, "imageUrl"),
            FormField::DateRelease => write!(f, "dateRelease"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    Pattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: FormField, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }

    /// Text shown next to the offending input.
    pub fn message(&self) -> String {
        match (self.field, self.kind) {
            (field, FieldErrorKind::Required) => format!("{} is required", field),
            (FormField::ImageUrl, FieldErrorKind::Pattern) => {
                "imageUrl must start with http:// or https://".to_string()
            }
            (FormField::DateRelease, FieldErrorKind::Pattern) => {
                "dateRelease must be a YYYY-MM-DD date".to_string()
            }
            (field, FieldErrorKind::Pattern) => format!("{} has an invalid format", field),
        }
    }
}

/// Blocking validation failure. Displays as the user-facing alert.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", INVALID_FORM_ALERT)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn single(field: FormField, kind: FieldErrorKind) -> Self {
        Self {
            errors: vec![FieldError::new(field, kind)],
        }
    }

    pub fn alert(&self) -> &'static str {
        INVALID_FORM_ALERT
    }

    pub fn has(&self, field: FormField) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

fn check_field(value: &str, field: FormField, pattern: impl Fn(&str) -> bool) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::new(field, FieldErrorKind::Required))
    } else if !pattern(value) {
        Some(FieldError::new(field, FieldErrorKind::Pattern))
    } else {
        None
    }
}

/// Every failing field of `form`, in form order.
pub fn field_errors(form: &GameViewModel) -> Vec<FieldError> {
    [
        check_field(&form.name, FormField::Name, |_| true),
        check_field(&form.image_url, FormField::ImageUrl, is_valid_image_url),
        check_field(&form.date_release, FormField::DateRelease, |v| {
            parse_form_date(v).is_ok()
        }),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn validate(form: &GameViewModel) -> Result<(), ValidationErrors> {
    let errors = field_errors(form);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, image_url: &str, date_release: &str) -> GameViewModel {
        GameViewModel {
            name: name.to_string(),
            image_url: image_url.to_string(),
            date_release: date_release.to_string(),
        }
    }

    #[test]
    fn accepts_complete_form() {
        assert!(validate(&form("Tetris", "https://example.com/t.png", "1984-06-06")).is_ok());
        assert!(validate(&form("Tetris", "http://example.com/t.png", "1984-06-06")).is_ok());
    }

    #[test]
    fn reports_every_failing_field() {
        let err = validate(&form(" ", "", "")).unwrap_err();
        assert_eq!(
            err.errors,
            vec![
                FieldError::new(FormField::Name, FieldErrorKind::Required),
                FieldError::new(FormField::ImageUrl, FieldErrorKind::Required),
                FieldError::new(FormField::DateRelease, FieldErrorKind::Required),
            ]
        );
        assert_eq!(err.to_string(), INVALID_FORM_ALERT);
    }

    #[test]
    fn pattern_failures() {
        let err = validate(&form("Tetris", "www.example.com", "06/06/1984")).unwrap_err();
        assert!(!err.has(FormField::Name));
        assert_eq!(
            err.errors,
            vec![
                FieldError::new(FormField::ImageUrl, FieldErrorKind::Pattern),
                FieldError::new(FormField::DateRelease, FieldErrorKind::Pattern),
            ]
        );
        assert_eq!(
            err.errors[0].message(),
            "imageUrl must start with http:// or https://"
        );
    }

    #[test]
    fn date_with_trailing_text_is_rejected() {
        let err = validate(&form("Tetris", "https://example.com/t.png", "1984-06-06 not a date"))
            .unwrap_err();
        assert_eq!(
            err.errors,
            vec![FieldError::new(FormField::DateRelease, FieldErrorKind::Pattern)]
        );
        assert_eq!(err.errors[0].message(), "dateRelease must be a YYYY-MM-DD date");
    }

    #[test]
    fn required_message_names_the_field() {
        let error = FieldError::new(FormField::Name, FieldErrorKind::Required);
        assert_eq!(error.message(), "name is required");
    }
}
