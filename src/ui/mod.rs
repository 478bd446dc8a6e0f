//! Output surfaces shared by the dashboard components.
//!
//! - `notice.rs`: the single status line ("Notice: …" / "Error! …")
//! - `display.rs`: named panels holding rendered response text
//!
//! Both keep only the latest value; concurrent writers race and the last
//! one wins.

pub mod display;
pub mod notice;

pub use display::{panels, DisplayBoard};
pub use notice::{Notice, NoticeBoard, NoticeLevel};
