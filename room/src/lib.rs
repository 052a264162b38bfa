//! Room layer for the collaborative whiteboard.
//!
//! Sits between the drawing core and the transport. It owns the wire
//! protocol (JSON-encoded room events), the session reconciler that
//! applies inbound events to the replicated room state, and the client
//! facade that composes the reconciler with the input engine. The
//! transport itself (socket lifecycle, reconnection timers) stays with
//! the host; this crate only decides what to send and how to react to
//! what arrives.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`client`] | `RoomClient`: input engine + session, one event surface |
//! | [`session`] | `RoomSession`: connection phases and inbound reconciliation |
//! | [`wire`] | Wire protocol events and JSON codec |
//! | [`types`] | Participants and chat messages |
//! | [`identity`] | Random display-name and color assignment |

pub mod client;
pub mod identity;
pub mod session;
pub mod types;
pub mod wire;
