//! Submission-time validation rules.

use super::catalog::IssueCategory;
use super::field::TextField;
use super::model::FormSession;
use crate::error::ValidationError;

/// Checks a session against the submission rules, first failure wins.
///
/// Order: required text fields (form order), e-mail shape, issue type
/// selection, "Outros" detail.
pub fn validate(session: &FormSession) -> Result<(), ValidationError> {
    for field in TextField::REQUIRED {
        if session.text(field).trim().is_empty() {
            return Err(ValidationError::MissingRequiredField(field));
        }
    }

    if !is_well_formed_email(session.text(TextField::ContactEmail)) {
        return Err(ValidationError::InvalidContactEmail);
    }

    if session.issue_types().is_empty() {
        return Err(ValidationError::NoIssueTypeSelected);
    }

    if session.has_issue_type(IssueCategory::Other)
        && session.text(TextField::OtherIssueDescription).trim().is_empty()
    {
        return Err(ValidationError::MissingRequiredField(
            TextField::OtherIssueDescription,
        ));
    }

    Ok(())
}

/// A local part, one `@`, and a domain part. Not an RFC 5322 validator.
pub fn is_well_formed_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_session() -> FormSession {
        let mut session = FormSession::new("TKT-ABC12345").unwrap();
        session.set_field(TextField::RestaurantName, "Sabor Real");
        session.set_field(TextField::ResponsibleName, "Marta Silva");
        session.set_field(TextField::ContactEmail, "marta@saborreal.pt");
        session.set_field(TextField::ProblemDomain, "saborreal.websolutions.com");
        session.set_field(TextField::ProblemDescription, "Os preços não atualizam.");
        session.toggle_issue_type(IssueCategory::PriceChange, true);
        session
    }

    #[test]
    fn test_filled_session_is_valid() {
        assert_eq!(validate(&filled_session()), Ok(()));
    }

    #[test]
    fn test_whitespace_only_field_is_missing() {
        let mut session = filled_session();
        session.set_field(TextField::ResponsibleName, "   \t");
        assert_eq!(
            validate(&session),
            Err(ValidationError::MissingRequiredField(TextField::ResponsibleName))
        );
    }

    #[test]
    fn test_first_missing_field_in_form_order() {
        let mut session = filled_session();
        session.set_field(TextField::ProblemDescription, "");
        session.set_field(TextField::RestaurantName, "");
        assert_eq!(
            validate(&session),
            Err(ValidationError::MissingRequiredField(TextField::RestaurantName))
        );
    }

    #[test]
    fn test_no_issue_type_selected() {
        let mut session = filled_session();
        session.toggle_issue_type(IssueCategory::PriceChange, false);
        assert_eq!(validate(&session), Err(ValidationError::NoIssueTypeSelected));
    }

    #[test]
    fn test_other_requires_detail() {
        let mut session = filled_session();
        session.toggle_issue_type(IssueCategory::Other, true);
        assert_eq!(
            validate(&session),
            Err(ValidationError::MissingRequiredField(
                TextField::OtherIssueDescription
            ))
        );

        session.set_field(TextField::OtherIssueDescription, "Impressora da cozinha");
        assert_eq!(validate(&session), Ok(()));
    }

    #[test]
    fn test_other_detail_ignored_without_other() {
        let mut session = filled_session();
        session.set_field(TextField::OtherIssueDescription, "");
        assert_eq!(validate(&session), Ok(()));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_well_formed_email("a@b"));
        assert!(is_well_formed_email(" marta@saborreal.pt "));
        assert!(!is_well_formed_email("marta"));
        assert!(!is_well_formed_email("@saborreal.pt"));
        assert!(!is_well_formed_email("marta@"));
        assert!(!is_well_formed_email("marta@@saborreal.pt"));
        assert!(!is_well_formed_email("marta silva@saborreal.pt"));
        assert!(!is_well_formed_email("marta@.pt"));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut session = filled_session();
        session.set_field(TextField::ContactEmail, "marta.saborreal.pt");
        assert_eq!(validate(&session), Err(ValidationError::InvalidContactEmail));
    }
}
