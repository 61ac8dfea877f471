use crate::intake::{FormSession, IssueCategory, TextField};

/// Affirmative marker for yes/no flags.
pub const YES_ANSWER: &str = "✅ Sim";
/// Negative marker for yes/no flags.
pub const NO_ANSWER: &str = "❌ Não";

const NOTE_WITHOUT_ATTACHMENTS: &str =
    "Caso necessite enviar prints ou arquivos, aguarde nosso contato para orientações.";

/// Renders the text summary sent through the messaging handoff.
///
/// Pure: the same session always yields the same bytes. The only variable
/// parts are the session's own fields and `company_name`.
pub fn compose_message(session: &FormSession, company_name: &str) -> String {
    let selected_issues = session
        .issue_types()
        .iter()
        .map(IssueCategory::label)
        .collect::<Vec<_>>()
        .join(", ");

    let other_issue_text = if session.has_issue_type(IssueCategory::Other) {
        format!(
            "\n*Detalhes do \"Outros\":* {}",
            session.text(TextField::OtherIssueDescription)
        )
    } else {
        String::new()
    };

    let mut message = String::new();
    message.push_str(&format!(
        "*SOLICITAÇÃO DE SUPORTE TÉCNICO - {company_name}*\n\n"
    ));
    message.push_str(&format!("*Ticket:* {}\n", session.ticket_id()));
    message.push_str(&format!(
        "*Restaurante:* {}\n",
        session.text(TextField::RestaurantName)
    ));
    message.push_str(&format!(
        "*Responsável:* {}\n",
        session.text(TextField::ResponsibleName)
    ));
    message.push_str(&format!(
        "*E-mail de contato:* {}\n",
        session.text(TextField::ContactEmail)
    ));
    message.push_str(&format!(
        "*Domínio afetado:* {}\n\n",
        session.text(TextField::ProblemDomain)
    ));
    message.push_str(&format!(
        "*Tipo(s) de Problema(s):* {selected_issues}{other_issue_text}\n\n"
    ));
    message.push_str(&format!(
        "*Descrição Detalhada:*\n{}\n\n",
        session.text(TextField::ProblemDescription)
    ));
    message.push_str(&format!("*Urgente:* {}\n", answer(session.is_urgent())));
    message.push_str(&format!(
        "*Afetando operações:* {}\n\n",
        answer(session.is_affecting_operations())
    ));
    message.push_str(&format!(
        "*Observação:* {}",
        closing_note(session.relayable_attachments().len())
    ));

    message
}

fn answer(flag: bool) -> &'static str {
    if flag { YES_ANSWER } else { NO_ANSWER }
}

fn closing_note(relayed_attachments: usize) -> String {
    match relayed_attachments {
        0 => NOTE_WITHOUT_ATTACHMENTS.to_string(),
        1 => "1 imagem anexada foi enviada por e-mail para a equipe de suporte.".to_string(),
        n => format!("{n} imagens anexadas foram enviadas por e-mail para a equipe de suporte."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachment::Attachment;
    use crate::message::{encode_uri_component, handoff_uri};

    fn snapshot() -> FormSession {
        let mut session = FormSession::new("TKT-ABC12345").unwrap();
        session.set_field(TextField::RestaurantName, "Sabor Real");
        session.set_field(TextField::ResponsibleName, "Marta Silva");
        session.set_field(TextField::ContactEmail, "marta@saborreal.pt");
        session.set_field(TextField::ProblemDomain, "saborreal.websolutions.com");
        session.set_field(TextField::ProblemDescription, "O preço do prato do dia não muda.");
        session.toggle_issue_type(IssueCategory::PriceChange, true);
        session.set_flag(crate::intake::FlagField::IsUrgent, true);
        session
    }

    #[test]
    fn test_compose_exact_layout() {
        let expected = "*SOLICITAÇÃO DE SUPORTE TÉCNICO - WebSolutions*\n\n\
            *Ticket:* TKT-ABC12345\n\
            *Restaurante:* Sabor Real\n\
            *Responsável:* Marta Silva\n\
            *E-mail de contato:* marta@saborreal.pt\n\
            *Domínio afetado:* saborreal.websolutions.com\n\n\
            *Tipo(s) de Problema(s):* Alteração de preços\n\n\
            *Descrição Detalhada:*\nO preço do prato do dia não muda.\n\n\
            *Urgente:* ✅ Sim\n\
            *Afetando operações:* ❌ Não\n\n\
            *Observação:* Caso necessite enviar prints ou arquivos, aguarde nosso contato para orientações.";

        assert_eq!(compose_message(&snapshot(), "WebSolutions"), expected);
    }

    #[test]
    fn test_compose_is_deterministic() {
        let session = snapshot();
        let first = compose_message(&session, "WebSolutions");
        let second = compose_message(&session, "WebSolutions");
        assert_eq!(first.as_bytes(), second.as_bytes());
        assert!(first.contains(&format!("Urgente:* {YES_ANSWER}")));
        assert!(first.contains(&format!("Afetando operações:* {NO_ANSWER}")));
    }

    #[test]
    fn test_other_detail_line_only_with_other() {
        let mut session = snapshot();
        session.set_field(TextField::OtherIssueDescription, "Impressora");
        assert!(!compose_message(&session, "WebSolutions").contains("Detalhes do"));

        session.toggle_issue_type(IssueCategory::Other, true);
        let message = compose_message(&session, "WebSolutions");
        assert!(message.contains(
            "*Tipo(s) de Problema(s):* Alteração de preços, Outros\n*Detalhes do \"Outros\":* Impressora\n\n"
        ));
    }

    #[test]
    fn test_closing_note_counts_relayed_images() {
        let mut session = snapshot();
        session.toggle_issue_type(IssueCategory::ImageChange, true);
        let image = Attachment {
            file_name: "menu.png".to_string(),
            mime_type: "image/png".to_string(),
            size_bytes: 3,
            data_url: "data:image/png;base64,AAAA".to_string(),
        };
        session
            .push_attachments(vec![image.clone(), image])
            .unwrap();

        let message = compose_message(&session, "WebSolutions");
        assert!(message.ends_with(
            "*Observação:* 2 imagens anexadas foram enviadas por e-mail para a equipe de suporte."
        ));
        assert!(!message.contains("base64"));
    }

    #[test]
    fn test_encoded_message_keeps_ticket_readable() {
        let message = compose_message(&snapshot(), "WebSolutions");
        let uri = handoff_uri("https://wa.me/351933737672", &message);
        assert!(uri.starts_with("https://wa.me/351933737672?text="));
        assert!(uri.contains("TKT-ABC12345"));
        assert!(uri.contains(&encode_uri_component("*Urgente:* ✅ Sim")));
        assert!(!uri.contains('\n'));
    }
}
