//! Small building blocks shared by the views.

mod badge;
mod button;
mod input;

pub use badge::StatusBadge;
pub use button::{Button, ButtonVariant};
pub use input::Input;
