use serde::Serialize;

/// One failed field check. Serialized verbatim into the 400 response body.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

pub type FieldErrors = Vec<FieldError>;

/// Collects field problems across a whole form so the caller sees everything
/// wrong with a submission at once, not just the first failure.
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Validator { errors: Vec::new() }
    }

    fn push(&mut self, field: &'static str, message: String) {
        self.errors.push(FieldError { field, message });
    }

    /// Field must be present and non-blank.
    pub fn require(&mut self, field: &'static str, value: Option<&str>) {
        match value {
            Some(s) if !s.trim().is_empty() => {}
            _ => self.push(field, format!("{} is required", field)),
        }
    }

    /// Field must be present, non-blank, and shaped like an email address.
    pub fn require_email(&mut self, field: &'static str, value: Option<&str>) {
        match value {
            Some(s) if !s.trim().is_empty() => {
                let s = s.trim();
                let looks_valid = s.split_once('@').map(|(local, domain)| {
                    !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
                });
                if looks_valid != Some(true) {
                    self.push(field, format!("{} must be a valid email address", field));
                }
            }
            _ => self.push(field, format!("{} is required", field)),
        }
    }

    /// Field must be present and one of the allowed values.
    pub fn one_of(&mut self, field: &'static str, value: Option<&str>, allowed: &[&str]) {
        match value {
            Some(s) if allowed.contains(&s) => {}
            Some(_) => self.push(
                field,
                format!("{} must be one of: {}", field, allowed.join(", ")),
            ),
            None => self.push(field, format!("{} is required", field)),
        }
    }

    /// Like `one_of`, but an absent or blank field passes.
    pub fn one_of_optional(&mut self, field: &'static str, value: Option<&str>, allowed: &[&str]) {
        if let Some(s) = value {
            if !s.is_empty() && !allowed.contains(&s) {
                self.push(
                    field,
                    format!("{} must be one of: {}", field, allowed.join(", ")),
                );
            }
        }
    }

    pub fn finish(self) -> Result<(), FieldErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
