pub mod content;
pub mod scheduler;
pub mod timer;

pub use content::{ContentKind, Direction, DisplayContent};
pub use scheduler::{DisplayScheduler, DisplaySettings};
pub use timer::AutoSwitchTimer;
