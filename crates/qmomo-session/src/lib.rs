//! # qmomo-session: Session State for the qmomo Storefront
//!
//! The stateful layer between the pure domain core and the UI shell.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront UI (out of scope)                         │
//! └─────────────────────────────┬───────────────────────────────────────────┘
//! ┌─────────────────────────────▼───────────────────────────────────────────┐
//! │               ★ qmomo-session (THIS CRATE) ★                            │
//! │                                                                         │
//! │   ┌────────────────────┐       ┌────────────────────┐                  │
//! │   │      Session       │       │    SessionState    │                  │
//! │   │  Catalog + Cart +  │◄──────│  Arc<Mutex<...>>   │                  │
//! │   │   UserProfile      │       │  for concurrent    │                  │
//! │   │  facade methods    │       │  command layers    │                  │
//! │   └────────────────────┘       └────────────────────┘                  │
//! └─────────────────────────────┬───────────────────────────────────────────┘
//! ┌─────────────────────────────▼───────────────────────────────────────────┐
//! │                         qmomo-core (pure)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every state mutation goes through [`Session`]'s methods, which delegate
//! to the core operations; this is what preserves the domain invariants.
//! The facade logs with `tracing` so an embedding shell gets structured
//! operation logs for free.

pub mod session;
pub mod state;

pub use session::{CheckoutOutcome, Session};
pub use state::SessionState;
