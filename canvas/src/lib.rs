//! Drawing core for the collaborative whiteboard.
//!
//! This crate is host-independent: it owns the drawing data model, the
//! replicated event log that is the single source of truth for what the
//! canvas shows, the gesture state machine that turns pointer events into
//! outbound drawing intents, and pure rasterization of committed ops onto
//! a [`surface::Surface`]. The host layer is responsible only for wiring
//! pointer and transport events in and processing the resulting
//! [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Canvas engine: pointer handlers returning actions |
//! | [`log`] | Ordered drawing event log (append / undo / clear / replay) |
//! | [`op`] | Drawing operations and tools |
//! | [`geom`] | Points and colors |
//! | [`input`] | Gesture state machine |
//! | [`surface`] | Raster surface contract and a software bitmap |
//! | [`render`] | Pure rasterization of ops onto a surface |
//! | [`consts`] | Shared numeric constants |

pub mod consts;
pub mod engine;
pub mod geom;
pub mod input;
pub mod log;
pub mod op;
pub mod render;
pub mod surface;
