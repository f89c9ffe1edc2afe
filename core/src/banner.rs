//! The single transient error slot shown above the list.
//!
//! # Design
//! A shown message carries its own deadline instead of a background task
//! that clears it later. Reading the banner after the deadline yields
//! `NoErrors`, and showing a newer message simply replaces the deadline, so
//! an older timer can never wipe a newer message. Deadlines use
//! `tokio::time::Instant` so paused test clocks drive expiry.

use std::fmt;
use std::time::Duration;

use tokio::time::Instant;

/// How long a message stays up without user interaction.
pub const BANNER_TIMEOUT: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ErrorMessage {
    #[default]
    NoErrors,
    LoadFailed,
    CreateFailed,
    UpdateFailed,
    DeleteFailed,
    TitleRequired,
}

impl ErrorMessage {
    pub fn text(self) -> &'static str {
        match self {
            ErrorMessage::NoErrors => "",
            ErrorMessage::LoadFailed => "Unable to load todos",
            ErrorMessage::CreateFailed => "Unable to add a todo",
            ErrorMessage::UpdateFailed => "Unable to update a todo",
            ErrorMessage::DeleteFailed => "Unable to delete a todo",
            ErrorMessage::TitleRequired => "Title should not be empty",
        }
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[derive(Debug, Clone)]
pub struct Banner {
    shown: Option<(ErrorMessage, Instant)>,
    ttl: Duration,
}

impl Default for Banner {
    fn default() -> Self {
        Self::new(BANNER_TIMEOUT)
    }
}

impl Banner {
    pub fn new(ttl: Duration) -> Self {
        Self { shown: None, ttl }
    }

    /// Shows `message`, replacing whatever was up and restarting the timer.
    pub fn show(&mut self, message: ErrorMessage) {
        if message == ErrorMessage::NoErrors {
            self.shown = None;
            return;
        }
        self.shown = Some((message, Instant::now() + self.ttl));
    }

    pub fn dismiss(&mut self) {
        self.shown = None;
    }

    /// The message visible right now.
    pub fn current(&self) -> ErrorMessage {
        match self.shown {
            Some((message, deadline)) if Instant::now() < deadline => message,
            _ => ErrorMessage::NoErrors,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.current() != ErrorMessage::NoErrors
    }

    /// When the visible message clears itself, if one is visible.
    pub fn expires_at(&self) -> Option<Instant> {
        self.shown
            .filter(|(_, deadline)| Instant::now() < *deadline)
            .map(|(_, deadline)| deadline)
    }
}
