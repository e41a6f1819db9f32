//! Dashboard composition service.
//!
//! Implements [`DashboardQuery`] by joining the clock, the authentication
//! context, the compiled-in institutional record, and the reminders state
//! into one renderable view.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::warn;

use crate::domain::dashboard::DashboardView;
use crate::domain::error::Error;
use crate::domain::hospital::HOSPITAL_INFO;
use crate::domain::ports::{AuthenticationContext, DashboardQuery};
use crate::domain::reminders::RemindersState;
use crate::domain::staff::StaffProfile;

/// Dashboard service implementing the driving port.
#[derive(Clone)]
pub struct DashboardService<A> {
    auth_context: Arc<A>,
    clock: Arc<dyn Clock>,
}

impl<A> DashboardService<A> {
    /// Create a new service over the authentication context and clock.
    pub fn new(auth_context: Arc<A>, clock: Arc<dyn Clock>) -> Self {
        Self {
            auth_context,
            clock,
        }
    }
}

impl<A> DashboardService<A>
where
    A: AuthenticationContext,
{
    /// Read the signed-in profile, treating a context fault as nobody
    /// signed in so the dashboard always renders.
    async fn resolve_profile(&self) -> Option<StaffProfile> {
        match self.auth_context.current_profile().await {
            Ok(profile) => profile,
            Err(error) => {
                warn!(error = %error, "authentication context unavailable; rendering fallback greeting");
                None
            }
        }
    }
}

#[async_trait]
impl<A> DashboardQuery for DashboardService<A>
where
    A: AuthenticationContext,
{
    async fn dashboard(&self) -> Result<DashboardView, Error> {
        let profile = self.resolve_profile().await;
        let today = self.clock.local().date_naive();

        // TODO: swap in a reminders source port once the scheduling
        // service exposes one; until then the widget stays a placeholder.
        let reminders = RemindersState::NotYetImplemented;

        Ok(DashboardView::render(
            today,
            profile.as_ref(),
            &HOSPITAL_INFO,
            &reminders,
        ))
    }
}
