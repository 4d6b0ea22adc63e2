//! Class roster screen.

use chrono::{DateTime, Datelike, Utc};

use crate::domain::types::ClassId;
use crate::dto::roster::RosterPageData;
use crate::gateway::AdminReader;
use crate::normalize::roster::reconcile_roster;
use crate::services::ServiceResult;

/// Loads the roster of `class_id`. Ages derived from birth dates use the
/// calendar year of `now`.
pub fn load_class_roster<R>(
    repo: &R,
    class_id: i64,
    now: DateTime<Utc>,
) -> ServiceResult<RosterPageData>
where
    R: AdminReader + ?Sized,
{
    let class_id = ClassId::new(class_id)?;

    let payload = repo.get_class_roster(class_id).map_err(|err| {
        log::error!("Failed to load roster of class {class_id}: {err}");
        err
    })?;

    let roster = reconcile_roster(payload, now.year());

    Ok(RosterPageData {
        class_id: class_id.get(),
        total_students: roster.students.len(),
        roster,
    })
}
