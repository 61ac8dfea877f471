//! Intake form domain module.
//!
//! # Module Structure
//!
//! - `catalog`: the ten issue categories (`IssueCategory`)
//! - `field`: form field identifiers (`TextField`, `FlagField`, `FieldValue`)
//! - `step`: wizard cursor (`WizardStep`)
//! - `submission`: submission lifecycle (`SubmissionState`, `SubmissionReceipt`)
//! - `model`: the aggregate (`FormSession`)
//! - `validation`: submission-time rules
//!
//! # Usage
//!
//! ```
//! use suporte_core::intake::{FormSession, IssueCategory, TextField};
//!
//! let mut session = FormSession::new("TKT-ABC12345").unwrap();
//! session.set_field(TextField::RestaurantName, "Sabor Real");
//! session.toggle_issue_type(IssueCategory::PriceChange, true);
//! assert!(session.validate().is_err());
//! ```

mod catalog;
mod field;
mod model;
mod step;
mod submission;
mod validation;

pub use catalog::IssueCategory;
pub use field::{FieldValue, FlagField, TextField};
pub use model::FormSession;
pub use step::WizardStep;
pub use submission::{SubmissionReceipt, SubmissionState};
pub use validation::{is_well_formed_email, validate};
