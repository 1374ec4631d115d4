//! Inquire-based file picker. The interactive file-selection surface.

use crate::adapters::ui::control::ImportControl;
use crate::domain::{DomainError, SelectedFile};
use inquire::validator::Validation;
use inquire::{CustomUserError, InquireError, Text};
use std::path::PathBuf;

/// Asks for a path to a chat export. An empty answer, Esc or Ctrl-C means
/// "no more files" and yields `None`.
pub fn prompt_for_file(control: &ImportControl) -> Result<Option<SelectedFile>, DomainError> {
    let filter = control.clone();
    let help = if control.accept_list().is_empty() {
        "Empty line to finish".to_string()
    } else {
        format!(
            "Accepted: {} (empty line to finish)",
            control.accept_list().join(", ")
        )
    };

    let answer = Text::new("Chat export to import:")
        .with_help_message(&help)
        .with_validator(move |input: &str| -> Result<Validation, CustomUserError> {
            let input = input.trim();
            if input.is_empty() {
                return Ok(Validation::Valid);
            }
            let path = PathBuf::from(input);
            if filter.accepts(&path) {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid(
                    format!("expected one of: {}", filter.accept_list().join(", ")).into(),
                ))
            }
        })
        .prompt();

    match answer {
        Ok(s) if s.trim().is_empty() => Ok(None),
        Ok(s) => Ok(Some(SelectedFile::new(s.trim()))),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}
