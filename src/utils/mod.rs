mod detect_software;

pub use detect_software::check_nhmmer;
