//! Model-View-Intent (MVI) primitives.
//!
//! Every state change in the UI goes through a reducer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ publish ──→ View
//!    ↑                                          │
//!    └──────────────── trigger ─────────────────┘
//! ```
//!
//! - **State**: immutable snapshot, replaced on every transition
//! - **Intent**: a requested transition (a trigger press)
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
