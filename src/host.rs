//! What the dashboard hands the window manager and what it gets back.

use std::fmt;

/// Opaque session key as the dashboard issues it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Active,
    Resolved,
}

impl SessionStatus {
    pub fn label(self) -> &'static str {
        match self {
            SessionStatus::Active => "active",
            SessionStatus::Resolved => "resolved",
        }
    }
}

/// Host-owned session descriptor. The window manager reads it and never
/// changes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session<Id> {
    pub id: Id,
    pub customer_name: String,
    pub title: String,
    pub status: SessionStatus,
}

impl<Id> Session<Id> {
    pub fn new(id: Id, customer_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            title: title.into(),
            status: SessionStatus::Active,
        }
    }

    pub fn with_status(mut self, status: SessionStatus) -> Self {
        self.status = status;
        self
    }
}

/// Notifications queued for the host and drained with
/// `WindowManager::take_host_events`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent<Id> {
    Focus(Id),
    /// The window was hidden through its close affordance. The session stays.
    RequestClose(Id),
    /// The host should drop the session from its list.
    RequestEndSession(Id),
}

impl<Id> HostEvent<Id> {
    pub fn session(&self) -> &Id {
        match self {
            HostEvent::Focus(id) | HostEvent::RequestClose(id) | HostEvent::RequestEndSession(id) => {
                id
            }
        }
    }
}

/// Imperative commands the dashboard may issue at any time.
pub trait WindowCommands<Id> {
    /// Lay every visible, undocked window out on the grid.
    fn organize_windows(&mut self);
    /// Raise, reveal and un-minimize one window.
    fn restore_window(&mut self, id: &Id);
    /// Hide every window without ending any session.
    fn hide_all_windows(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_defaults_to_active() {
        let s = Session::new(SessionId::from("c-1"), "Ada", "Refund");
        assert_eq!(s.status, SessionStatus::Active);
        assert_eq!(s.id.to_string(), "c-1");
        let s = s.with_status(SessionStatus::Resolved);
        assert_eq!(s.status.label(), "resolved");
    }

    #[test]
    fn events_expose_their_session() {
        let e = HostEvent::RequestEndSession(7u32);
        assert_eq!(*e.session(), 7);
    }
}
