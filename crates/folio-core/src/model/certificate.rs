// ── Certificate domain types ──

use indexmap::IndexSet;

use super::ids::CertificateId;

/// A professional certification. `id` is the only handle used for
/// selection and is unique within the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateEntry {
    pub id: CertificateId,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub image_ref: String,
    pub external_link: String,
    pub tags: IndexSet<String>,
}

impl CertificateEntry {
    /// "Issuer • Date" subtitle line.
    pub fn byline(&self) -> String {
        match (self.issuer.is_empty(), self.date.is_empty()) {
            (false, false) => format!("{} • {}", self.issuer, self.date),
            (false, true) => self.issuer.clone(),
            (true, false) => self.date.clone(),
            (true, true) => String::new(),
        }
    }
}
