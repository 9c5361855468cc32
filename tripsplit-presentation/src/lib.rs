#![warn(clippy::uninlined_format_args)]

pub mod error_presenter;
pub mod payment_presenter;
pub mod summary_presenter;

pub use error_presenter::{format_ledger_error, format_parse_error, format_summary_error};
pub use payment_presenter::PaymentListPresenter;
pub use summary_presenter::SummaryPresenter;
