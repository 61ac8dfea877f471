//! The fixed catalog of issue categories offered by the form.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// One of the ten problem classifications a user can select.
///
/// The display label doubles as the wire value: it is what the support team
/// reads in the composed message, so it must stay byte-identical.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
pub enum IssueCategory {
    /// Unlocks image attachments
    #[strum(serialize = "Alteração de imagens na plataforma")]
    #[serde(rename = "Alteração de imagens na plataforma")]
    ImageChange,
    #[strum(serialize = "Alteração de preços")]
    #[serde(rename = "Alteração de preços")]
    PriceChange,
    #[strum(serialize = "Problemas para realizar pedidos")]
    #[serde(rename = "Problemas para realizar pedidos")]
    OrderingProblems,
    #[strum(serialize = "Dificuldade para fechar mesa")]
    #[serde(rename = "Dificuldade para fechar mesa")]
    TableClosing,
    #[strum(serialize = "Plataforma indisponível ou instável")]
    #[serde(rename = "Plataforma indisponível ou instável")]
    PlatformUnavailable,
    #[strum(serialize = "Problemas com login ou acesso")]
    #[serde(rename = "Problemas com login ou acesso")]
    LoginAccess,
    #[strum(serialize = "Dúvidas sobre funcionalidades")]
    #[serde(rename = "Dúvidas sobre funcionalidades")]
    FeatureQuestions,
    #[strum(serialize = "Solicitação de novas funcionalidades")]
    #[serde(rename = "Solicitação de novas funcionalidades")]
    FeatureRequest,
    #[strum(serialize = "Erros ou bugs no sistema")]
    #[serde(rename = "Erros ou bugs no sistema")]
    SystemBugs,
    /// Sentinel: asks for a free-text detail
    #[strum(serialize = "Outros")]
    #[serde(rename = "Outros")]
    Other,
}

impl IssueCategory {
    /// All categories in display order.
    pub fn catalog() -> impl Iterator<Item = IssueCategory> {
        Self::iter()
    }

    /// The label shown to the user and written into the message.
    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// Whether selecting this category enables image attachments.
    pub fn accepts_attachments(&self) -> bool {
        matches!(self, Self::ImageChange)
    }
}
