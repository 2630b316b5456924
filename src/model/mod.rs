pub mod project;
pub mod task;
pub mod timeline;

pub use project::Project;
pub use task::{Attachment, AttachmentKind, Task, TaskPatch, TaskStatus};
pub use timeline::{TimelineRange, TimelineViewport};
