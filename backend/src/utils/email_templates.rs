use crate::handlers::contact_dtos::ContactSubmission;

pub const DEFAULT_SUBJECT: &str = "Novo contato pelo site";

pub struct RenderedEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn with_line_breaks(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\n', "<br/>")
}

pub fn render_contact_email(submission: &ContactSubmission) -> RenderedEmail {
    let phone = submission.phone.as_deref().unwrap_or("-");
    let subject = submission
        .subject
        .clone()
        .unwrap_or_else(|| DEFAULT_SUBJECT.to_string());

    let text = format!(
        "Nome: {}\nEmail: {}\nTelefone: {}\n\n{}",
        submission.name, submission.email, phone, submission.message
    );

    let html = format!(
        r#"<div style="font-family:Arial,sans-serif">
  <h2>{heading}</h2>
  <p><b>Nome:</b> {name}</p>
  <p><b>Email:</b> {email}</p>
  <p><b>Telefone:</b> {phone}</p>
  <p><b>Assunto:</b> {subject}</p>
  <hr/>
  <p>{message}</p>
</div>"#,
        heading = DEFAULT_SUBJECT,
        name = escape_html(&submission.name),
        email = escape_html(&submission.email),
        phone = escape_html(phone),
        subject = escape_html(submission.subject.as_deref().unwrap_or("—")),
        message = with_line_breaks(&escape_html(&submission.message)),
    );

    RenderedEmail { subject, text, html }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Carla Souza".into(),
            email: "carla@construtora.com.br".into(),
            phone: None,
            subject: None,
            message: "Linha 1\nLinha 2".into(),
        }
    }

    #[test]
    fn defaults_fill_missing_optional_fields() {
        let email = render_contact_email(&submission());
        assert_eq!(email.subject, "Novo contato pelo site");
        assert_eq!(
            email.text,
            "Nome: Carla Souza\nEmail: carla@construtora.com.br\nTelefone: -\n\nLinha 1\nLinha 2"
        );
        assert!(email.html.contains("<p><b>Telefone:</b> -</p>"));
        assert!(email.html.contains("<p><b>Assunto:</b> —</p>"));
    }

    #[test]
    fn html_converts_newlines() {
        let email = render_contact_email(&submission());
        assert!(email.html.contains("<p>Linha 1<br/>Linha 2</p>"));
    }

    #[test]
    fn html_escapes_submitted_markup() {
        let mut s = submission();
        s.name = "<script>alert(1)</script>".into();
        s.subject = Some("Preço & prazo".into());
        let email = render_contact_email(&s);
        assert!(!email.html.contains("<script>"));
        assert!(email.html.contains("&lt;script&gt;"));
        assert!(email.html.contains("Preço &amp; prazo"));
        assert_eq!(email.subject, "Preço & prazo");
    }
}
