//! Institutional identity shown by the dashboard footer.

/// Contact and identity record for the hospital running this deployment.
///
/// Fields are plain display strings with no invariants beyond being
/// present; formatting (CNPJ mask, phone mask) is applied at authoring
/// time, not derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HospitalInfo {
    /// Institution name as printed in the footer.
    pub name: &'static str,
    /// Street address line.
    pub address: &'static str,
    /// City and state line.
    pub city: &'static str,
    /// Postal code (CEP).
    pub postal_code: &'static str,
    /// Switchboard phone number.
    pub phone: &'static str,
    /// Registered company number (CNPJ), pre-masked.
    pub tax_id: &'static str,
    /// Contact mailbox monitored by the administration office.
    pub email: &'static str,
    /// Public website address.
    pub website: &'static str,
    /// Path to the institutional logo asset served by the frontend shell.
    pub logo_path: &'static str,
}

/// Compiled-in record for the current deployment.
///
/// Updating the footer means editing this constant and redeploying; there
/// is deliberately no runtime source for it.
pub const HOSPITAL_INFO: HospitalInfo = HospitalInfo {
    name: "Hospital São Lucas",
    address: "Av. Paulista, 1500",
    city: "São Paulo - SP",
    postal_code: "01310-200",
    phone: "(11) 3254-7600",
    tax_id: "61.345.678/0001-09",
    email: "contato@hsaolucas.com.br",
    website: "https://www.hsaolucas.com.br",
    logo_path: "/assets/logo-hsl.svg",
};
