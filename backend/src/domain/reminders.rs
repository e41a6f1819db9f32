//! Reminders data model for the duty dashboard.
//!
//! The reminders widget ships before its data source does. The state enum
//! keeps "no source wired yet" distinct from "source returned nothing" so
//! the real feature can land without changing the render contract.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One actionable reminder for the staff member on duty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// Stable reminder identifier.
    pub id: Uuid,
    /// Short imperative text shown in the list.
    pub message: String,
    /// Day the reminder falls due, when it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "2025-03-12")]
    pub due_date: Option<NaiveDate>,
}

/// Source state of the reminders widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemindersState {
    /// No reminders source is wired; the widget renders its placeholder.
    NotYetImplemented,
    /// Reminders loaded for the current staff member.
    Loaded(Vec<Reminder>),
}

impl RemindersState {
    /// Reminders to display, in source order.
    pub fn items(&self) -> &[Reminder] {
        match self {
            Self::NotYetImplemented => &[],
            Self::Loaded(items) => items.as_slice(),
        }
    }
}
