//! Resolution of one source row to database identifiers.

use tracing::trace;

use userimport_model::{
    EmailToIdMapping, FilterValueMapping, ImportError, ImportableUser, Result, UserRecord,
};

/// Resolve the email and every filter value of `record`.
///
/// Filter ids follow the record's column order. A record without an email
/// field resolves as an empty email and fails the email lookup.
pub fn resolve_user(
    record: &UserRecord,
    emails: &EmailToIdMapping,
    filters: &FilterValueMapping,
) -> Result<ImportableUser> {
    let email = record.email().unwrap_or_default();
    let Some(id) = emails.get(email) else {
        return Err(ImportError::UnresolvedEmail {
            email: email.to_string(),
            line: record.line(),
        });
    };

    let filter_ids = record
        .attributes()
        .map(|(filter, value)| {
            filters
                .get(filter, value)
                .map(str::to_string)
                .ok_or_else(|| ImportError::UnresolvedFilterValue {
                    filter: filter.to_string(),
                    value: value.to_string(),
                    line: record.line(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    trace!(line = record.line(), filters = filter_ids.len(), "resolved user");
    Ok(ImportableUser::new(id, filter_ids))
}
