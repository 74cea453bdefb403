//! Sample ticket queue for the demo dashboard.

use crate::host::{Session, SessionId, SessionStatus};

const CUSTOMERS: [&str; 12] = [
    "Ada Byron",
    "Grace Hopper",
    "Alan Turing",
    "Edsger Dijkstra",
    "Barbara Liskov",
    "Ken Thompson",
    "Margaret Hamilton",
    "Dennis Ritchie",
    "Frances Allen",
    "John Backus",
    "Radia Perlman",
    "Leslie Lamport",
];

const SUBJECTS: [&str; 9] = [
    "Deposit not credited",
    "Withdrawal pending",
    "Bonus terms question",
    "Account verification",
    "Login issue",
    "Payment declined",
    "Limit change request",
    "Game crashed mid-round",
    "Refund request",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketKind {
    Ticket,
    Chat,
}

impl TicketKind {
    pub fn label(self) -> &'static str {
        match self {
            TicketKind::Ticket => "ticket",
            TicketKind::Chat => "chat",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: SessionId,
    pub kind: TicketKind,
    pub customer: String,
    pub title: String,
    pub status: SessionStatus,
}

impl Ticket {
    pub fn is_chat(&self) -> bool {
        self.kind == TicketKind::Chat
    }

    /// A chat nobody has picked up yet.
    pub fn is_waiting_chat(&self) -> bool {
        self.is_chat() && self.status == SessionStatus::Active
    }

    pub fn session(&self) -> Session<SessionId> {
        Session::new(self.id.clone(), self.customer.clone(), self.title.clone())
            .with_status(self.status)
    }
}

/// Deterministic queue holding at least `open_chats` unresolved chats. Every
/// third entry is a plain ticket and every seventh is already resolved.
pub fn demo_tickets(open_chats: usize) -> Vec<Ticket> {
    let mut tickets = Vec::new();
    let mut chats = 0;
    let mut n = 0usize;
    while chats < open_chats || tickets.len() < 12 {
        let kind = if n % 3 == 2 {
            TicketKind::Ticket
        } else {
            TicketKind::Chat
        };
        let status = if n % 7 == 6 {
            SessionStatus::Resolved
        } else {
            SessionStatus::Active
        };
        if kind == TicketKind::Chat && status == SessionStatus::Active {
            chats += 1;
        }
        let prefix = match kind {
            TicketKind::Ticket => "T",
            TicketKind::Chat => "C",
        };
        tickets.push(Ticket {
            id: SessionId::new(format!("{prefix}-{}", 1001 + n)),
            kind,
            customer: CUSTOMERS[n % CUSTOMERS.len()].to_string(),
            title: SUBJECTS[n % SUBJECTS.len()].to_string(),
            status,
        });
        n += 1;
    }
    tickets
}
