pub mod checklist;
pub mod reset;
pub mod selection;
pub mod util;
pub mod vault;
pub mod wizard;
