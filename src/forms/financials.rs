//! Filters of the financial reporting screen.

use serde::Deserialize;
use validator::Validate;

use crate::domain::types::ClassId;
use crate::forms::FormError;

/// Query string of `GET /api/financials` and its CSV export.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct FinancialsQueryForm {
    #[serde(default)]
    pub class_id: Option<i64>,
    /// Calendar year of the monthly series; the current year when missing.
    #[serde(default)]
    #[validate(range(min = 2000, max = 2100))]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinancialsQuery {
    pub class_id: Option<ClassId>,
    pub year: Option<i32>,
}

impl TryFrom<FinancialsQueryForm> for FinancialsQuery {
    type Error = FormError;

    fn try_from(form: FinancialsQueryForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let class_id = match form.class_id {
            None | Some(0) => None,
            Some(id) => Some(ClassId::new(id).map_err(|_| FormError::InvalidClassId)?),
        };
        Ok(Self {
            class_id,
            year: form.year,
        })
    }
}
