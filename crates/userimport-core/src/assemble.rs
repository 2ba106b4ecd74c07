use userimport_model::{ImportableUser, Result};

/// Collect resolved users in order, stopping at the first error.
///
/// No deduplication or sorting takes place.
pub fn assemble_users<I>(resolved: I) -> Result<Vec<ImportableUser>>
where
    I: IntoIterator<Item = Result<ImportableUser>>,
{
    let resolved = resolved.into_iter();
    let mut users = Vec::with_capacity(resolved.size_hint().0);
    for user in resolved {
        users.push(user?);
    }
    Ok(users)
}
