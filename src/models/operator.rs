use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Person qualified to perform one or more process steps.
/// Maps to `operator_master`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Operator {
    #[sqlx(rename = "operator_staff_no")]
    pub staff_no: String,
    #[sqlx(rename = "operator_name")]
    pub name: String,
    /// Manufacturing readiness level of the operator, when recorded
    #[sqlx(rename = "operator_mrl")]
    pub qualification_level: Option<String>,
}

impl Operator {
    pub fn new(
        staff_no: impl Into<String>,
        name: impl Into<String>,
        qualification_level: Option<&str>,
    ) -> Self {
        Self {
            staff_no: staff_no.into(),
            name: name.into(),
            qualification_level: qualification_level.map(str::to_string),
        }
    }
}
