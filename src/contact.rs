//! The contact form. Submitting only acknowledges locally; nothing is sent.

use std::fmt;

use log::info;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(ContactField),
    #[error("please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub message: &'static str,
}

pub const THANK_YOU: &str = "Thank you for your message! I'll get back to you soon.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(field) = ContactField::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            return Err(ContactError::MissingField(field));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// Validates and, on success, clears every field. Input is kept on error
    /// so the visitor can correct it.
    pub fn submit(&mut self) -> Result<Acknowledgement, ContactError> {
        self.validate()?;
        info!(
            "contact form acknowledged ({} chars of message)",
            self.message.chars().count()
        );
        *self = Self::default();
        Ok(Acknowledgement { message: THANK_YOU })
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Ada");
        form.set(ContactField::Email, "ada@example.com");
        form.set(ContactField::Subject, "Project Discussion");
        form.set(ContactField::Message, "Hello!");
        form
    }

    #[test]
    fn test_submit_clears_fields() {
        let mut form = filled();
        let ack = form.submit().expect("complete form should submit");
        assert_eq!(ack.message, THANK_YOU);
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_missing_field_keeps_input() {
        let mut form = filled();
        form.set(ContactField::Subject, "   ");
        assert_eq!(
            form.submit(),
            Err(ContactError::MissingField(ContactField::Subject))
        );
        assert_eq!(form.get(ContactField::Name), "Ada");
        assert_eq!(form.get(ContactField::Message), "Hello!");
    }

    #[test]
    fn test_email_shape() {
        for bad in ["ada", "@example.com", "ada@", "ada@example", "a@b@c.com", "ada @x.io"] {
            let mut form = filled();
            form.set(ContactField::Email, bad);
            assert_eq!(form.submit(), Err(ContactError::InvalidEmail), "{bad}");
        }
        for good in ["ada@example.com", "a.b+c@mail.co.uk"] {
            let mut form = filled();
            form.set(ContactField::Email, good);
            assert!(form.submit().is_ok(), "{good}");
        }
    }
}
