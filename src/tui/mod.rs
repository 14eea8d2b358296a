pub mod events;
pub mod layout;
pub mod run;
pub mod state;
pub mod update;
pub mod views;

pub use layout::centered_rect;
pub use run::run;
pub use state::{App, Tab};
pub use update::{apply, Intent};
