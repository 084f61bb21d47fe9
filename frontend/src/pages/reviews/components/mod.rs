pub mod decision_modal;
pub mod detail;
pub mod history;
pub mod queue;
