use serde::{Deserialize, Serialize};

/// Response of `bootstrap-static/`. Only the player catalog is read.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BootstrapResponse {
    pub elements: Vec<Element>,
}

/// One player ("element") in the bulk catalog.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Element {
    pub id: i64,
    pub web_name: String,
    /// Current price in tenths of a currency unit.
    pub now_cost: i64,
}
