//! `uniknow-core` — shared domain primitives for the UniKnow client.
//!
//! This crate contains **pure** types only (no IO, no HTTP): the response
//! envelope, typed identifiers, the role/permission model, the user profile
//! with its partial-merge semantics, and the notification boundary trait.

pub mod envelope;
pub mod id;
pub mod notify;
pub mod role;
pub mod user;

pub use envelope::{Envelope, Page, SUCCESS_CODE};
pub use id::{ApprovalId, CaseId, TenantId, UserId};
pub use notify::{Notifier, NullNotifier};
pub use role::Role;
pub use user::{UserProfile, UserProfilePatch};
