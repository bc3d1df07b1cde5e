
pub mod screen;
pub mod tally;

pub use screen::ScreenCMD;

pub use tally::TallyCMD;
