//! Form field identifiers.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Free-text fields of the intake form.
///
/// The string form is the camelCase name the form inputs use
/// (`restaurantName`, `contactEmail`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    RestaurantName,
    ResponsibleName,
    ContactEmail,
    ProblemDomain,
    ProblemDescription,
    OtherIssueDescription,
}

impl TextField {
    /// Fields that must be non-empty on every submission, in form order.
    pub const REQUIRED: [TextField; 5] = [
        TextField::RestaurantName,
        TextField::ResponsibleName,
        TextField::ContactEmail,
        TextField::ProblemDomain,
        TextField::ProblemDescription,
    ];

    /// Label of the input as shown on the form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::RestaurantName => "Nome do Restaurante",
            Self::ResponsibleName => "Nome do Responsável",
            Self::ContactEmail => "E-mail de Contato",
            Self::ProblemDomain => "Domínio Afetado",
            Self::ProblemDescription => "Descrição Detalhada",
            Self::OtherIssueDescription => "Detalhes do \"Outros\"",
        }
    }
}

/// Checkbox flags of the intake form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum FlagField {
    IsUrgent,
    IsAffectingOperations,
}

/// A value coming from a form input, addressed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}
