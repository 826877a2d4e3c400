pub mod appraise;
pub mod cli;
pub mod combine;
pub mod config;
pub mod error;
pub mod extract;
pub mod numeric;
pub mod pages;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod util;
pub mod variant;

pub use appraise::appraise;
pub use combine::combine;
pub use extract::extract;
pub use variant::classify;
