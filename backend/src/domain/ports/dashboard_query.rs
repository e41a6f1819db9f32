//! Driving port for composing the dashboard.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::dashboard::DashboardView;
use crate::domain::error::Error;
use crate::domain::hospital::HOSPITAL_INFO;
use crate::domain::reminders::RemindersState;

/// Port for rendering the full dashboard payload.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardQuery: Send + Sync {
    /// Render the dashboard for the current request.
    async fn dashboard(&self) -> Result<DashboardView, Error>;
}

/// Fixture query rendering a frozen dashboard.
///
/// Pins the date and leaves the profile absent so handler tests and local
/// smoke checks see stable output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureDashboardQuery;

#[async_trait]
impl DashboardQuery for FixtureDashboardQuery {
    async fn dashboard(&self) -> Result<DashboardView, Error> {
        // A compile-time constant date; surface invalid values as an
        // internal error so automated checks catch accidental regressions.
        let today = NaiveDate::from_ymd_opt(2025, 3, 10)
            .ok_or_else(|| Error::internal("invalid fixture dashboard date"))?;
        Ok(DashboardView::render(
            today,
            None,
            &HOSPITAL_INFO,
            &RemindersState::NotYetImplemented,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_renders_the_fallback_greeting_on_a_fixed_day() {
        let view = FixtureDashboardQuery
            .dashboard()
            .await
            .expect("fixture renders");
        assert_eq!(view.header.greeting, "Bem-vindo(a), Dr(a). Médico!");
        assert_eq!(view.header.current_date, "segunda-feira, 10 de março de 2025");
        assert!(view.reminders.items.is_empty());
    }
}
