//! Field rules shared by user payloads and the rendering of their violations.

use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{UserError, UserResult};

/// Rejects empty strings. Whitespace counts as content.
pub fn non_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("empty").with_message(Cow::Borrowed("must not be empty")));
    }
    Ok(())
}

/// Validate `value`, folding every violation into a single [`UserError::Validation`].
pub fn validate<T: Validate>(value: &T) -> UserResult<()> {
    value
        .validate()
        .map_err(|errors| UserError::Validation(describe(&errors)))
}

/// One-line description listing every violated field, ordered by field name.
///
/// `location: must not be empty; name: must not be empty`
pub fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .map(|(field, violations)| {
            let reasons: Vec<String> = violations
                .iter()
                .map(|v| match &v.message {
                    Some(message) => message.to_string(),
                    None => v.code.to_string(),
                })
                .collect();
            format!("{}: {}", field, reasons.join(", "))
        })
        .collect::<Vec<_>>()
        .join("; ")
}
