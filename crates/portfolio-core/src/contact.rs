//! Contact form payload, validation and the `mailto:` fallback draft.

use thiserror::Error;

pub const STATUS_MISSING_FIELDS: &str = "Veuillez remplir tous les champs requis.";
pub const STATUS_SENDING: &str = "Envoi en cours...";
pub const STATUS_SENT: &str = "Message envoyé avec succès ! Je vous répondrai rapidement.";
pub const STATUS_SENT_MAILTO: &str = "Message envoyé via votre client email. Merci de votre message !";
pub const SUBMIT_LABEL: &str = "Envoyer le message";
pub const SUBMIT_LABEL_BUSY: &str = "Envoi...";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Success,
    Error,
}

impl StatusKind {
    pub fn class_name(self) -> &'static str {
        match self {
            StatusKind::Loading => "form-status loading",
            StatusKind::Success => "form-status success",
            StatusKind::Error => "form-status error",
        }
    }

    /// Success and error messages clear themselves after a delay.
    #[inline]
    pub fn auto_clears(self) -> bool {
        !matches!(self, StatusKind::Loading)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Build from raw form values; every field is required.
    pub fn from_fields(
        name: Option<String>,
        email: Option<String>,
        subject: Option<String>,
        message: Option<String>,
    ) -> Result<Self, ContactError> {
        fn required(v: Option<String>, field: &'static str) -> Result<String, ContactError> {
            match v {
                Some(s) if !s.is_empty() => Ok(s),
                _ => Err(ContactError::MissingField(field)),
            }
        }
        Ok(Self {
            name: required(name, "name")?,
            email: required(email, "email")?,
            subject: required(subject, "subject")?,
            message: required(message, "message")?,
        })
    }

    /// Key/value pairs handed to the email relay template.
    pub fn template_params<'a>(&'a self, recipient: &'a str) -> [(&'static str, &'a str); 6] {
        [
            ("from_name", self.name.as_str()),
            ("from_email", self.email.as_str()),
            ("subject", self.subject.as_str()),
            ("message", self.message.as_str()),
            ("to_email", recipient),
            ("reply_to", self.email.as_str()),
        ]
    }

    pub fn mailto_draft(&self, owner_name: &str, site: &str) -> MailtoDraft {
        MailtoDraft {
            subject: format!("[Portfolio] {}", self.subject),
            body: format!(
                "Bonjour {owner_name},\n\nVoici un nouveau message depuis votre portfolio :\n\n\
                 Nom: {}\nEmail: {}\nSujet: {}\n\nMessage:\n{}\n\n---\nMessage envoyé depuis {site}",
                self.name, self.email, self.subject, self.message
            ),
        }
    }
}

/// Unencoded subject and body; the caller percent-encodes them into a URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailtoDraft {
    pub subject: String,
    pub body: String,
}

impl MailtoDraft {
    pub fn to_url(&self, recipient: &str, encode: impl Fn(&str) -> String) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode(&self.subject),
            encode(&self.body)
        )
    }
}
