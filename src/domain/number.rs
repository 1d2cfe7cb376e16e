use serde::Deserialize;

use crate::domain::user::User;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Country {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// A dedicated number rented by the account.
pub struct Number {
    pub id: u64,
    pub user: Option<User>,
    pub purchased_at: String,
    pub expire_at: String,
    pub phone: String,
    pub country: Option<Country>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
/// Dedicated numbers available for purchase and their price.
pub struct AvailableNumbers {
    pub numbers: Vec<String>,
    pub price: f64,
}
