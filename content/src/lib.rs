// static page content
//
// everything here is a process-wide constant; the view layer only ever holds
// &'static references into these tables
pub mod contact;
pub mod experience;
pub mod highlight;
pub mod section;
pub mod stat;
pub mod tech;

pub use section::Section;
pub use tech::TechRecord;
