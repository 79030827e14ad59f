//! Beneficiary enrollment periods and the renewal anchor computation

mod anchor;
mod data;

pub use anchor::anchor_year_start;
pub use data::BeneficiaryEnrollment;
