pub mod artifacts;
pub mod invoke;
pub mod params;
pub mod report;
pub mod table;

pub use params::NhmmerParams;

pub use invoke::Nhmmer;

pub use report::NhmmerResults;
pub use report::ReportSummary;

pub use artifacts::collect_input_ids;
pub use artifacts::extract_artifacts;

pub use table::read_hit_ids;
