use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Body of `POST /customers`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
}
