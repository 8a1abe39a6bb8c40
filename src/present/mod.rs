mod countdown;
pub mod format;
mod page;

pub use countdown::{CountdownStyle, CountdownView};
pub use page::{ButtonState, PageData, PageView};
