// Reusable components live here.

pub mod code_block;
pub mod content_section;
pub mod footer;
pub mod hero;
pub mod icons;
