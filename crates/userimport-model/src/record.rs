//! Format-agnostic representation of one source row.

/// Column holding the user's email in every source file.
pub const EMAIL_COLUMN: &str = "email";

/// Named fields of one source row, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    line: u64,
    fields: Vec<(String, String)>,
}

impl UserRecord {
    pub fn new(line: u64, fields: Vec<(String, String)>) -> Self {
        Self { line, fields }
    }

    /// Pair `columns` with `values` positionally.
    pub fn from_columns<I, S>(line: u64, columns: &[String], values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<(String, String)> = columns
            .iter()
            .cloned()
            .zip(values.into_iter().map(Into::into))
            .collect();
        Self { line, fields }
    }

    /// 1-based line of the row in its source.
    pub fn line(&self) -> u64 {
        self.line
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn email(&self) -> Option<&str> {
        self.get(EMAIL_COLUMN)
    }

    /// Every non-email field, in column order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .filter(|(name, _)| name != EMAIL_COLUMN)
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_skip_email_and_keep_order() {
        let columns = vec![
            "Ville".to_string(),
            EMAIL_COLUMN.to_string(),
            "Tranche de salaire".to_string(),
        ];
        let record = UserRecord::from_columns(3, &columns, ["Paris", "a@mail.com", "26 - 30"]);
        assert_eq!(record.line(), 3);
        assert_eq!(record.email(), Some("a@mail.com"));
        let attributes: Vec<_> = record.attributes().collect();
        assert_eq!(
            attributes,
            vec![("Ville", "Paris"), ("Tranche de salaire", "26 - 30")]
        );
    }
}
