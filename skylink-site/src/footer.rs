use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use skylink_catalog::FooterLinks;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@(([^<>()\[\]\\.,;:\s@"]+\.)+[^<>()\[\]\\.,;:\s@"]{2,})$"#,
    )
    .expect("email pattern is a valid regex")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NewsletterError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Footer newsletter signup.
///
/// A successful subscribe clears the field and shows a confirmation until
/// [`Newsletter::expire_confirmation`] is called; a rejected one only sets
/// the error message.
#[derive(Debug, Clone, Default)]
pub struct Newsletter {
    email: String,
    subscribed: bool,
    error: Option<String>,
}

impl Newsletter {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn subscribe(&mut self) -> Result<(), NewsletterError> {
        self.error = None;

        if !is_valid_email(&self.email) {
            let err = NewsletterError::InvalidEmail;
            tracing::debug!("newsletter signup rejected");
            self.error = Some(err.to_string());
            return Err(err);
        }

        tracing::info!("newsletter signup accepted");
        self.subscribed = true;
        self.email.clear();
        Ok(())
    }

    pub fn expire_confirmation(&mut self) {
        self.subscribed = false;
    }
}

#[derive(Debug, Clone)]
pub struct Footer {
    pub links: FooterLinks,
    pub newsletter: Newsletter,
}

impl Footer {
    pub fn new(links: FooterLinks) -> Self {
        Self { links, newsletter: Newsletter::default() }
    }

    pub fn view(&self) -> FooterView {
        FooterView {
            links: self.links.clone(),
            email: self.newsletter.email.clone(),
            subscribed: self.newsletter.subscribed,
            error: self.newsletter.error.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterView {
    pub links: FooterLinks,
    pub email: String,
    pub subscribed: bool,
    pub error: Option<String>,
}
