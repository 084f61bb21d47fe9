pub mod absences;
pub mod audit;
pub mod reviews;
