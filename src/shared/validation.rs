use std::borrow::Cow;

use validator::ValidationError;

/// Rejects values made only of whitespace
///
/// - Valid: "SD", " SMP Negeri 1 "
/// - Invalid: "", "   ", "\t\n"
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}
