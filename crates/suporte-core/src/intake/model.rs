//! The form session aggregate.
//!
//! One `FormSession` holds every mutable piece of a single intake attempt.
//! It is replaced wholesale by a fresh session after a successful
//! submission.

use super::catalog::IssueCategory;
use super::field::{FieldValue, FlagField, TextField};
use super::step::WizardStep;
use super::submission::SubmissionState;
use crate::attachment::Attachment;
use crate::error::{Result, SupportError, ValidationError};
use serde::Serialize;
use std::str::FromStr;
use tracing::debug;

/// In-memory state of one support request being filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSession {
    ticket_id: String,
    restaurant_name: String,
    responsible_name: String,
    contact_email: String,
    problem_domain: String,
    problem_description: String,
    /// Selection order, no duplicates
    issue_types: Vec<IssueCategory>,
    other_issue_description: String,
    is_urgent: bool,
    is_affecting_operations: bool,
    #[serde(skip)]
    attachments: Vec<Attachment>,
    current_step: WizardStep,
    submission_state: SubmissionState,
}

impl FormSession {
    /// Creates an empty session bound to `ticket_id`.
    ///
    /// # Errors
    ///
    /// Returns `SupportError::Internal` if the ticket id is blank.
    pub fn new(ticket_id: impl Into<String>) -> Result<Self> {
        let ticket_id = ticket_id.into();
        if ticket_id.trim().is_empty() {
            return Err(SupportError::internal("ticket id must not be empty"));
        }

        Ok(Self::empty(ticket_id))
    }

    fn empty(ticket_id: String) -> Self {
        Self {
            ticket_id,
            restaurant_name: String::new(),
            responsible_name: String::new(),
            contact_email: String::new(),
            problem_domain: String::new(),
            problem_description: String::new(),
            issue_types: Vec::new(),
            other_issue_description: String::new(),
            is_urgent: false,
            is_affecting_operations: false,
            attachments: Vec::new(),
            current_step: WizardStep::default(),
            submission_state: SubmissionState::default(),
        }
    }

    /// Clears every field back to a fresh `Idle` session, keeping the ticket id.
    ///
    /// Used when no new ticket id can be generated after a success.
    pub fn reset_keeping_ticket(&mut self) {
        let ticket_id = std::mem::take(&mut self.ticket_id);
        *self = Self::empty(ticket_id);
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    pub fn ticket_id(&self) -> &str {
        &self.ticket_id
    }

    /// Current value of a text field.
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::RestaurantName => &self.restaurant_name,
            TextField::ResponsibleName => &self.responsible_name,
            TextField::ContactEmail => &self.contact_email,
            TextField::ProblemDomain => &self.problem_domain,
            TextField::ProblemDescription => &self.problem_description,
            TextField::OtherIssueDescription => &self.other_issue_description,
        }
    }

    /// Current value of a checkbox flag.
    pub fn flag(&self, field: FlagField) -> bool {
        match field {
            FlagField::IsUrgent => self.is_urgent,
            FlagField::IsAffectingOperations => self.is_affecting_operations,
        }
    }

    pub fn is_urgent(&self) -> bool {
        self.is_urgent
    }

    pub fn is_affecting_operations(&self) -> bool {
        self.is_affecting_operations
    }

    /// Selected categories in the order they were ticked.
    pub fn issue_types(&self) -> &[IssueCategory] {
        &self.issue_types
    }

    pub fn has_issue_type(&self, category: IssueCategory) -> bool {
        self.issue_types.contains(&category)
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Attachments that go out with the relay.
    ///
    /// Empty unless the image-change category is selected.
    pub fn relayable_attachments(&self) -> &[Attachment] {
        if self.accepts_attachments() {
            &self.attachments
        } else {
            &[]
        }
    }

    /// Whether the current selection allows adding images.
    pub fn accepts_attachments(&self) -> bool {
        self.issue_types.iter().any(IssueCategory::accepts_attachments)
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.submission_state
    }

    // ============================================================================
    // Field mutation (no validation here)
    // ============================================================================

    /// Assigns a text field.
    pub fn set_field(&mut self, field: TextField, value: impl Into<String>) {
        self.touch();
        let value = value.into();
        debug!(ticket_id = %self.ticket_id, field = %field, len = value.len(), "Field updated");
        match field {
            TextField::RestaurantName => self.restaurant_name = value,
            TextField::ResponsibleName => self.responsible_name = value,
            TextField::ContactEmail => self.contact_email = value,
            TextField::ProblemDomain => self.problem_domain = value,
            TextField::ProblemDescription => self.problem_description = value,
            TextField::OtherIssueDescription => self.other_issue_description = value,
        }
    }

    /// Assigns a checkbox flag.
    pub fn set_flag(&mut self, field: FlagField, value: bool) {
        self.touch();
        debug!(ticket_id = %self.ticket_id, field = %field, value, "Flag updated");
        match field {
            FlagField::IsUrgent => self.is_urgent = value,
            FlagField::IsAffectingOperations => self.is_affecting_operations = value,
        }
    }

    /// Assigns a field addressed by its form input name.
    ///
    /// # Errors
    ///
    /// - `UnknownField` if no field has this name
    /// - `InvalidFieldValue` if a text field gets a flag or vice versa
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<()> {
        let value = value.into();
        if let Ok(field) = TextField::from_str(name) {
            return match value {
                FieldValue::Text(text) => {
                    self.set_field(field, text);
                    Ok(())
                }
                FieldValue::Flag(_) => Err(SupportError::InvalidFieldValue {
                    field: name.to_string(),
                }),
            };
        }

        if let Ok(field) = FlagField::from_str(name) {
            return match value {
                FieldValue::Flag(flag) => {
                    self.set_flag(field, flag);
                    Ok(())
                }
                FieldValue::Text(_) => Err(SupportError::InvalidFieldValue {
                    field: name.to_string(),
                }),
            };
        }

        Err(SupportError::UnknownField(name.to_string()))
    }

    /// Adds or removes a category.
    ///
    /// Adding a present category or removing an absent one changes nothing.
    pub fn toggle_issue_type(&mut self, category: IssueCategory, included: bool) {
        self.touch();
        let present = self.has_issue_type(category);
        if included && !present {
            self.issue_types.push(category);
        } else if !included && present {
            self.issue_types.retain(|c| *c != category);
        }
        debug!(ticket_id = %self.ticket_id, %category, included, "Issue type toggled");
    }

    /// Same as [`toggle_issue_type`](Self::toggle_issue_type), addressed by label.
    ///
    /// # Errors
    ///
    /// Returns `UnknownIssueCategory` if the label is not in the catalog.
    pub fn toggle_issue_type_label(&mut self, label: &str, included: bool) -> Result<()> {
        let category = IssueCategory::from_str(label)
            .map_err(|_| SupportError::UnknownIssueCategory(label.to_string()))?;
        self.toggle_issue_type(category, included);
        Ok(())
    }

    /// Appends decoded attachments, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `AttachmentsNotAccepted` unless the image-change category is selected.
    pub fn push_attachments(&mut self, attachments: Vec<Attachment>) -> Result<()> {
        if !self.accepts_attachments() {
            return Err(SupportError::AttachmentsNotAccepted);
        }
        self.touch();
        self.attachments.extend(attachments);
        Ok(())
    }

    /// Removes the attachment at `index`.
    ///
    /// An out-of-range index (e.g. a stale double removal) is a no-op.
    pub fn remove_attachment(&mut self, index: usize) -> Option<Attachment> {
        self.touch();
        if index < self.attachments.len() {
            Some(self.attachments.remove(index))
        } else {
            debug!(
                ticket_id = %self.ticket_id,
                index,
                len = self.attachments.len(),
                "Ignoring stale attachment removal"
            );
            None
        }
    }

    // ============================================================================
    // Wizard navigation
    // ============================================================================

    pub fn next_step(&mut self) -> WizardStep {
        self.touch();
        self.current_step = self.current_step.next();
        self.current_step
    }

    pub fn previous_step(&mut self) -> WizardStep {
        self.touch();
        self.current_step = self.current_step.previous();
        self.current_step
    }

    /// Jumps to a 1-based step number.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStep` for numbers outside 1..=3; the cursor stays put.
    pub fn go_to_step(&mut self, number: u8) -> Result<WizardStep> {
        let step = WizardStep::from_number(number)?;
        self.touch();
        self.current_step = step;
        Ok(step)
    }

    // ============================================================================
    // Submission transitions
    // ============================================================================

    /// Moves `Idle`/`Failed` to `Submitting` if the form is valid.
    ///
    /// On any error the state is left untouched.
    ///
    /// # Errors
    ///
    /// - `SubmissionInProgress` while submitting or right after success
    /// - `Validation` if a rule fails
    pub fn begin_submission(&mut self) -> Result<()> {
        if !self.submission_state.accepts_submit() {
            return Err(SupportError::SubmissionInProgress {
                ticket_id: self.ticket_id.clone(),
            });
        }
        self.validate()?;
        self.submission_state = SubmissionState::Submitting;
        Ok(())
    }

    /// `Submitting` → `Succeeded`.
    pub fn complete_submission(&mut self) {
        if self.submission_state == SubmissionState::Submitting {
            self.submission_state = SubmissionState::Succeeded;
        }
    }

    /// `Submitting` → `Failed`; every field keeps its value.
    pub fn fail_submission(&mut self) {
        if self.submission_state == SubmissionState::Submitting {
            self.submission_state = SubmissionState::Failed;
        }
    }

    /// Runs the submission rules without changing state.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        super::validation::validate(self)
    }

    /// Any user action after a failure returns the form to `Idle`.
    fn touch(&mut self) {
        if self.submission_state == SubmissionState::Failed {
            self.submission_state = SubmissionState::Idle;
        }
    }
}
