//! The to-do list core.
//!
//! Pure state and logic, independent of any terminal:
//!
//! - [`task`] - Task data and the ordered [`TaskStore`]
//! - [`session`] - The [`EditSession`] mode (idle or editing an index)
//! - [`hint`] - Transient hints with a cancelable expiry timer
//! - [`error`] - Recoverable error taxonomy mapped to hint messages
//! - [`events`] - Structured events for host-side observers
//! - [`list`] - The [`TodoList`] component and its key router

pub mod error;
pub mod events;
pub mod hint;
pub mod list;
pub mod session;
pub mod task;

pub use error::{StateViolation, TodoError, TodoResult};
pub use events::{TodoEvent, TodoObserver};
pub use hint::{Clock, ExpiryTimer, HintNotifier, ManualClock, SystemClock};
pub use list::{Focus, KeyContext, TodoKey, TodoList, TodoOptions};
pub use session::EditSession;
pub use task::{Task, TaskStore};
