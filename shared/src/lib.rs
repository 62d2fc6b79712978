//! Framework-free core of the Técnicas de Java site: the lesson store, the
//! highlighter and copy confirmation behind the code viewer, and the anchor
//! navigation controller. The Yew frontend binds these to the browser.

pub mod clipboard;
pub mod content;
pub mod highlight;
pub mod navigation;

pub use content::{Example, Section, SectionColor};
