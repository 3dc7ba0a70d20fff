//! Transient feedback: the current notification and active visual cues.
//!
//! Both carry an expiry instant and are filtered lazily against the `now`
//! passed to the accessors, so nothing has to run when they lapse.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};
use tamago_types::{ActiveCue, Cue, Notification};

use crate::config::FeedbackConfig;

/// Holds at most one notification and one expiry per cue kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    notification: Option<Notification>,
    cues: BTreeMap<Cue, DateTime<Utc>>,
    cue_duration: TimeDelta,
    notification_duration: TimeDelta,
}

impl Feedback {
    /// Create empty feedback with the configured lifetimes.
    pub fn new(config: &FeedbackConfig) -> Self {
        Self {
            notification: None,
            cues: BTreeMap::new(),
            cue_duration: millis(config.cue_duration_ms),
            notification_duration: millis(config.notification_duration_ms),
        }
    }

    /// Show `message`, replacing any current notification.
    pub fn notify(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.notification = Some(Notification {
            message: message.into(),
            expires_at: expiry(now, self.notification_duration),
        });
    }

    /// Start `cue`, restarting it if already active.
    pub fn trigger(&mut self, cue: Cue, now: DateTime<Utc>) {
        self.cues.insert(cue, expiry(now, self.cue_duration));
    }

    /// The notification if it has not expired at `now`.
    pub fn active_notification(&self, now: DateTime<Utc>) -> Option<&Notification> {
        self.notification.as_ref().filter(|n| now < n.expires_at)
    }

    /// Cues still active at `now`.
    pub fn active_cues(&self, now: DateTime<Utc>) -> Vec<ActiveCue> {
        self.cues
            .iter()
            .filter(|(_, expires_at)| now < **expires_at)
            .map(|(cue, expires_at)| ActiveCue {
                cue: *cue,
                expires_at: *expires_at,
            })
            .collect()
    }

    /// Drop everything that has expired at `now`.
    pub fn prune(&mut self, now: DateTime<Utc>) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| now >= n.expires_at)
        {
            self.notification = None;
        }
        self.cues.retain(|_, expires_at| now < *expires_at);
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.notification = None;
        self.cues.clear();
    }
}

fn millis(ms: u64) -> TimeDelta {
    i64::try_from(ms)
        .ok()
        .and_then(TimeDelta::try_milliseconds)
        .unwrap_or(TimeDelta::MAX)
}

fn expiry(now: DateTime<Utc>, lifetime: TimeDelta) -> DateTime<Utc> {
    now.checked_add_signed(lifetime)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
