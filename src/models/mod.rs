pub mod project;
pub mod status_update;

pub use project::{Project, ProjectFields, ProjectStatus, ProjectType};
pub use status_update::{NewStatusUpdate, StatusUpdate, StatusUpdateFields};
