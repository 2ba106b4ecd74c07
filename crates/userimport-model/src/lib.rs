pub mod error;
pub mod lookup;
pub mod options;
pub mod record;
pub mod user;

pub use error::{ImportError, Result};
pub use lookup::{EmailToIdMapping, FilterValueMapping, FilterValues};
pub use options::MatchingMode;
pub use record::{EMAIL_COLUMN, UserRecord};
pub use user::ImportableUser;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn importable_user_serializes_with_import_keys() {
        let user = ImportableUser::new("123abc456", vec!["abc123def".to_string()]);
        let json = serde_json::to_string(&user).expect("serialize user");
        assert_eq!(json, r#"{"_id":"123abc456","attributs":["abc123def"]}"#);
    }

    #[test]
    fn importable_user_deserializes() {
        let user: ImportableUser =
            serde_json::from_str(r#"{"_id":"u1","attributs":["a","b"]}"#).expect("deserialize");
        assert_eq!(user.id(), "u1");
        assert_eq!(user.filter_ids(), ["a", "b"]);
    }
}
