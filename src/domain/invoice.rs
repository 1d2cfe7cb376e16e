use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Invoice {
    pub id: u64,
    pub bundle: f64,
    pub currency: String,
    pub vat: f64,
    pub payment_method: String,
}
