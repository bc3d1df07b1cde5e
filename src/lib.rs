pub mod command;
pub mod nhmmer;
pub mod utils;

pub use nhmmer::Nhmmer;
pub use nhmmer::NhmmerParams;
pub use nhmmer::NhmmerResults;
