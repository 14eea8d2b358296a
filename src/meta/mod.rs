pub mod aggregate;
pub mod brush;
pub mod cursor;
pub mod exec;

pub use aggregate::{file_dots, group_commits, summarize, FileDots};
pub use brush::{brushed, language_breakdown, BrushRect, LanguageStat};
pub use cursor::{TimeCursor, TimeScale};
pub use exec::{exec_commits, exec_stats};
