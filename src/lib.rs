//! Floating chat-window manager for a support-agent dashboard.
//!
//! [`window::WindowManager`] is the core: it keeps one window per chat
//! session, routes pointer gestures and tells the host what happened through
//! [`host::HostEvent`]. Everything under `runner`, `panel` and `drivers` is the
//! terminal dashboard that hosts it.

pub mod config;
pub mod constants;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod host;
pub mod input;
pub mod keybindings;
pub mod layout;
pub mod panel;
pub mod runner;
pub mod state;
pub mod theme;
pub mod tickets;
pub mod tracing_sub;
pub mod ui;
pub mod window;
