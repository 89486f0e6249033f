use serde::{Deserialize, Serialize};
use crate::core::library::LibraryError;
use crate::patrons::domain::model::PatronEntity;

// PatronDto is the flat wire and storage representation of a patron.
// Field names follow the stored document schema.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct PatronDto {
    pub fname: String,
    pub lname: String,
    pub age: i64,
    #[serde(rename = "memberID")]
    pub member_id: String,
    #[serde(default)]
    pub borrowed_books: Vec<String>,
}

impl PatronDto {
    pub(crate) fn new(fname: &str, lname: &str, age: i64, member_id: &str) -> Self {
        Self {
            fname: fname.to_string(),
            lname: lname.to_string(),
            age,
            member_id: member_id.to_string(),
            borrowed_books: vec![],
        }
    }
}

impl From<&PatronEntity> for PatronDto {
    fn from(other: &PatronEntity) -> Self {
        Self {
            fname: other.fname().to_string(),
            lname: other.lname().to_string(),
            age: other.age(),
            member_id: other.member_id().to_string(),
            borrowed_books: other.get_borrowed_books().to_vec(),
        }
    }
}

// A stored document is untrusted input; reconstruction re-runs name
// validation and fails the same way construction does.
impl TryFrom<&PatronDto> for PatronEntity {
    type Error = LibraryError;

    fn try_from(other: &PatronDto) -> Result<Self, Self::Error> {
        let mut patron = PatronEntity::new(
            other.fname.as_str(), other.lname.as_str(), other.age, other.member_id.as_str())?;
        patron.set_borrowed_books(other.borrowed_books.as_slice());
        Ok(patron)
    }
}

#[cfg(test)]
mod tests {
    use crate::patrons::domain::model::PatronEntity;
    use crate::patrons::dto::PatronDto;

    #[tokio::test]
    async fn test_should_serialize_with_document_field_names() {
        let dto = PatronDto::new("John", "Doe", 25, "P001");
        let json = serde_json::to_value(&dto).expect("should serialize");
        assert_eq!("John", json["fname"]);
        assert_eq!("Doe", json["lname"]);
        assert_eq!(25, json["age"]);
        assert_eq!("P001", json["memberID"]);
        assert!(json["borrowed_books"].as_array().expect("should be array").is_empty());
    }

    #[tokio::test]
    async fn test_should_deserialize_without_borrowed_books() {
        let dto: PatronDto = serde_json::from_str(
            r#"{"fname":"John","lname":"Doe","age":25,"memberID":"P001"}"#)
            .expect("should deserialize");
        assert!(dto.borrowed_books.is_empty());
    }

    #[tokio::test]
    async fn test_should_convert_between_dto_and_entity() {
        let mut entity = PatronEntity::new("John", "Doe", 25, "P001").expect("should build patron");
        entity.add_borrowed_book("Test Book");
        let dto = PatronDto::from(&entity);
        assert_eq!(vec!["test book".to_string()], dto.borrowed_books);

        let back = PatronEntity::try_from(&dto).expect("should convert");
        assert_eq!(entity, back);
        assert_eq!(entity.get_borrowed_books(), back.get_borrowed_books());
    }

    #[tokio::test]
    async fn test_should_fail_conversion_for_invalid_stored_name() {
        let dto = PatronDto::new("J0hn", "Doe", 25, "P001");
        assert!(PatronEntity::try_from(&dto).is_err());
    }
}
