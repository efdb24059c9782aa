//! Validation checks over the record store.
//!
//! Each check scans the store and appends findings (or, for the listing
//! passes, fills a listing). Checks tolerate missing optional fields by
//! skipping the comparison; absent data is never itself reported except
//! where a check's definition says otherwise. Execution order is fixed by
//! [`super::Report::run_checks`].

mod dates;
mod family;
mod identity;
mod listings;
mod relations;
