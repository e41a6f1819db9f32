//! Domain primitives, ports, and services.
//!
//! Purpose: define the strongly typed model behind the on-duty dashboard
//! and the ports that keep it independent of HTTP and the hosted
//! directory. Types are immutable; invariants and serialisation contracts
//! (serde) live in each type's Rustdoc.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`] — API error response payload.
//! - [`StaffProfile`] / [`DisplayName`] — who is signed in.
//! - [`CollaboratorId`] / [`FullName`] — directory lookup key and answer.
//! - [`HospitalInfo`] — compiled-in institutional record.
//! - [`DashboardView`] and friends — renderable dashboard payload.
//! - [`ports`] — hexagonal boundary traits and their fixtures.

pub mod collaborator;
pub mod collaborator_names;
pub mod dashboard;
pub mod dashboard_service;
pub mod error;
pub mod hospital;
pub mod ports;
pub mod reminders;
pub mod staff;

pub use self::collaborator::{CollaboratorId, CollaboratorIdError, FullName};
pub use self::collaborator_names::CollaboratorNameService;
pub use self::dashboard::{
    DashboardView, FooterView, HeaderView, RemindersView, long_date_pt_br,
};
pub use self::dashboard_service::DashboardService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::hospital::{HOSPITAL_INFO, HospitalInfo};
pub use self::reminders::{Reminder, RemindersState};
pub use self::staff::{DisplayName, StaffProfile, StaffValidationError};
