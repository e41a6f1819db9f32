//! Dashboard view models.
//!
//! Rendering is a pure function of the current date, the optional staff
//! profile, the institutional record, and the reminders state. HTTP
//! handlers serialise these views verbatim; no presentation decisions are
//! left to adapters.

use chrono::{Locale, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::hospital::HospitalInfo;
use super::reminders::{Reminder, RemindersState};
use super::staff::StaffProfile;

/// Form of address used when no profile is available.
const GREETING_FALLBACK_NAME: &str = "Médico";

/// Heading of the reminders widget.
const REMINDERS_TITLE: &str = "Lembretes";

/// Copy shown while the reminders list is empty.
const NO_REMINDERS_MESSAGE: &str = "Nenhum lembrete por enquanto.";

/// Long-form pt-BR date layout, e.g. `segunda-feira, 10 de março de 2025`.
const LONG_DATE_FORMAT: &str = "%A, %-d de %B de %Y";

/// Render a date the way the header shows it: full weekday and month
/// names in Brazilian Portuguese, no leading zero on the day.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use plantao_backend::domain::long_date_pt_br;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date");
/// assert_eq!(long_date_pt_br(date), "segunda-feira, 10 de março de 2025");
/// ```
pub fn long_date_pt_br(date: NaiveDate) -> String {
    date.format_localized(LONG_DATE_FORMAT, Locale::pt_BR)
        .to_string()
}

/// Header strip: greeting plus today's date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    /// Personalised greeting line.
    #[schema(example = "Bem-vindo(a), Dr(a). Ana!")]
    pub greeting: String,
    /// Current date in long pt-BR form.
    #[schema(example = "segunda-feira, 10 de março de 2025")]
    pub current_date: String,
}

impl HeaderView {
    /// Compose the header for `today`, falling back to a generic form of
    /// address when no profile is supplied.
    pub fn render(today: NaiveDate, profile: Option<&StaffProfile>) -> Self {
        let name = profile.map_or(GREETING_FALLBACK_NAME, |p| p.display_name().as_ref());
        Self {
            greeting: format!("Bem-vindo(a), Dr(a). {name}!"),
            current_date: long_date_pt_br(today),
        }
    }
}

/// Reminders widget contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemindersView {
    /// Widget heading.
    #[schema(example = "Lembretes")]
    pub title: String,
    /// Reminders to list, in source order.
    pub items: Vec<Reminder>,
    /// Empty-state copy; absent whenever `items` is non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Nenhum lembrete por enquanto.")]
    pub empty_message: Option<String>,
}

impl RemindersView {
    /// Project the reminders state into widget contents.
    pub fn render(state: &RemindersState) -> Self {
        let items = state.items().to_vec();
        let empty_message = items
            .is_empty()
            .then(|| NO_REMINDERS_MESSAGE.to_owned());
        Self {
            title: REMINDERS_TITLE.to_owned(),
            items,
            empty_message,
        }
    }
}

/// Footer strip: institutional contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FooterView {
    /// Institution name.
    pub name: String,
    /// Street address line.
    pub address: String,
    /// City and state line.
    pub city: String,
    /// Postal code (CEP).
    pub postal_code: String,
    /// Switchboard phone number.
    pub phone: String,
    /// Registered company number (CNPJ).
    pub tax_id: String,
    /// Administration contact mailbox.
    pub email: String,
    /// Public website address.
    pub website: String,
    /// Logo asset path served by the frontend shell.
    pub logo_path: String,
}

impl From<&HospitalInfo> for FooterView {
    fn from(info: &HospitalInfo) -> Self {
        Self {
            name: info.name.to_owned(),
            address: info.address.to_owned(),
            city: info.city.to_owned(),
            postal_code: info.postal_code.to_owned(),
            phone: info.phone.to_owned(),
            tax_id: info.tax_id.to_owned(),
            email: info.email.to_owned(),
            website: info.website.to_owned(),
            logo_path: info.logo_path.to_owned(),
        }
    }
}

/// Complete dashboard payload returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// Greeting strip.
    pub header: HeaderView,
    /// Reminders widget.
    pub reminders: RemindersView,
    /// Institutional footer.
    pub footer: FooterView,
}

impl DashboardView {
    /// Render the full dashboard for one request.
    pub fn render(
        today: NaiveDate,
        profile: Option<&StaffProfile>,
        hospital: &HospitalInfo,
        reminders: &RemindersState,
    ) -> Self {
        Self {
            header: HeaderView::render(today, profile),
            reminders: RemindersView::render(reminders),
            footer: FooterView::from(hospital),
        }
    }
}
