use serde::Deserialize;

use crate::domain::types::ClassId;
use crate::forms::FormError;

/// Query string of `GET /api/calendar`.
#[derive(Debug, Default, Deserialize)]
pub struct CalendarQueryForm {
    /// Selected class, `0` or missing for all upcoming events.
    #[serde(default)]
    pub class_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarQuery {
    pub class_id: Option<ClassId>,
}

impl TryFrom<CalendarQueryForm> for CalendarQuery {
    type Error = FormError;

    fn try_from(form: CalendarQueryForm) -> Result<Self, Self::Error> {
        let class_id = match form.class_id {
            None | Some(0) => None,
            Some(id) => Some(ClassId::new(id).map_err(|_| FormError::InvalidClassId)?),
        };
        Ok(Self { class_id })
    }
}
