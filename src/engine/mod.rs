pub mod conflict;
pub mod drag;
pub mod rollup;
pub mod visibility;

pub use conflict::{conflicted_ids, overdue_ids};
pub use drag::{DragKind, DragSession};
pub use rollup::{is_parent, rollup};
pub use visibility::{visible_tasks, VisibleTask};
