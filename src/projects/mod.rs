pub mod exec;
pub mod filter;
pub mod load;

pub use exec::exec;
pub use filter::{match_query, toggle_year, visible, year_slices};
pub use load::{fetch_json, load_projects};
