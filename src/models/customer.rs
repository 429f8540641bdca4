//! Customer account types.

use serde::Deserialize;

use crate::core::TextFilter;

/// A customer account as returned by `GET /api/customers`.
#[derive(Clone, Debug, Deserialize)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: String,
    pub country: String,
    /// Unpaid invoice balance in cents.
    pub outstanding_cents: i64,
    pub active: bool,
}

impl Customer {
    /// Whether the account carries an unpaid balance.
    pub fn has_outstanding(&self) -> bool {
        self.outstanding_cents > 0
    }
}

impl TextFilter for Customer {
    fn filter_fields(&self) -> Vec<&str> {
        vec![
            &self.name,
            &self.contact_name,
            &self.email,
            &self.city,
            &self.country,
        ]
    }
}
