pub mod gate;
pub mod nav;
pub mod pipeline;
pub mod watch;

pub use nav::NavigationMonitor;
pub use pipeline::Annotator;
pub use watch::{StructureWatcher, WatchOutcome};
