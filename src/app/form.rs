use std::{fs, io::Write as _, path::Path};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const FIELD_MAX: usize = 120;
const MESSAGE_MAX: usize = 600;

/// Which form row the cursor sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Name,
    Email,
    Subject,
    Message,
    Submit,
}

impl FormFocus {
    pub const ALL: [FormFocus; 5] = [
        FormFocus::Name,
        FormFocus::Email,
        FormFocus::Subject,
        FormFocus::Message,
        FormFocus::Submit,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FormFocus::Name => "Name",
            FormFocus::Email => "Email",
            FormFocus::Subject => "Subject",
            FormFocus::Message => "Message",
            FormFocus::Submit => "Send Message",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            FormFocus::Name => FormFocus::Email,
            FormFocus::Email => FormFocus::Subject,
            FormFocus::Subject => FormFocus::Message,
            FormFocus::Message => FormFocus::Submit,
            FormFocus::Submit => FormFocus::Name,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            FormFocus::Name => FormFocus::Submit,
            FormFocus::Email => FormFocus::Name,
            FormFocus::Subject => FormFocus::Email,
            FormFocus::Message => FormFocus::Subject,
            FormFocus::Submit => FormFocus::Message,
        }
    }
}

/// Outcome banner shown under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormNotice {
    Sent,
    MissingFields,
}

impl FormNotice {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            FormNotice::Sent => "Message sent! I'll get back to you soon.",
            FormNotice::MissingFields => "All fields are required.",
        }
    }
}

/// One accepted submission. Recorded locally, never sent anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn field(&self, focus: FormFocus) -> Option<&str> {
        match focus {
            FormFocus::Name => Some(&self.name),
            FormFocus::Email => Some(&self.email),
            FormFocus::Subject => Some(&self.subject),
            FormFocus::Message => Some(&self.message),
            FormFocus::Submit => None,
        }
    }

    /// Appends a typed character to the focused field. Control characters
    /// are ignored and each field is length-capped.
    pub fn insert(&mut self, focus: FormFocus, ch: char) {
        if ch.is_control() {
            return;
        }
        let cap = if focus == FormFocus::Message {
            MESSAGE_MAX
        } else {
            FIELD_MAX
        };
        if let Some(field) = self.field_mut(focus)
            && field.chars().count() < cap
        {
            field.push(ch);
        }
    }

    pub fn backspace(&mut self, focus: FormFocus) {
        if let Some(field) = self.field_mut(focus) {
            field.pop();
        }
    }

    /// Required-presence check: every field non-blank after trimming.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// Turns the draft into a submission and clears the form, or returns
    /// `None` (leaving the draft intact) when a required field is blank.
    pub fn submit(&mut self, submitted_at: DateTime<Utc>) -> Option<Submission> {
        if !self.is_complete() {
            return None;
        }
        let submission = Submission {
            name: std::mem::take(&mut self.name).trim().to_string(),
            email: std::mem::take(&mut self.email).trim().to_string(),
            subject: std::mem::take(&mut self.subject).trim().to_string(),
            message: std::mem::take(&mut self.message).trim().to_string(),
            submitted_at,
        };
        Some(submission)
    }

    fn field_mut(&mut self, focus: FormFocus) -> Option<&mut String> {
        match focus {
            FormFocus::Name => Some(&mut self.name),
            FormFocus::Email => Some(&mut self.email),
            FormFocus::Subject => Some(&mut self.subject),
            FormFocus::Message => Some(&mut self.message),
            FormFocus::Submit => None,
        }
    }
}

/// Appends one submission as a JSON line next to the settings file.
pub fn append_submission(path: &Path, submission: &Submission) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating submissions directory failed")?;
    }
    let line = serde_json::to_string(submission).context("serializing submission failed")?;
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("opening submissions log failed")?;
    writeln!(file, "{line}").context("writing submissions log failed")
}
