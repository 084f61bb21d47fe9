//! Shared absence-request logic for the Talentrack web client.
//!
//! Nothing in this crate touches the browser or the UI runtime: pages in the
//! frontend call into these functions and render whatever comes back.

pub mod date_range;
pub mod decision;
pub mod form;
pub mod format;
pub mod model;
pub mod status;

pub use date_range::{day_count_preview, parse_iso_date, CalendarDay, DateRange, Days};
pub use decision::{
    ActionEncoding, Decision, DecisionAction, DecisionBody, DecisionError, DecisionOutcome,
    DecisionResponse, ReviewerRole, WireAction,
};
pub use form::{AbsenceDraft, FormError, NewAbsenceRequest};
pub use model::{
    render_amount, AbsenceRequest, AbsenceType, ApprovalRecord, ListEnvelope, VacationBalance,
};
pub use status::RequestStatus;
