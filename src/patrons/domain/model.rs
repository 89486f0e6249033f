use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// PatronEntity abstracts one registered library member. Names are
// validated at construction; borrowed titles are held lower-cased with
// case-insensitive duplicates suppressed.
#[derive(Debug, Clone)]
pub(crate) struct PatronEntity {
    fname: String,
    lname: String,
    age: i64,
    member_id: String,
    borrowed_books: Vec<String>,
}

fn is_alphabetic_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(char::is_alphabetic)
}

impl PatronEntity {
    pub fn new(fname: &str, lname: &str, age: i64, member_id: &str) -> LibraryResult<Self> {
        if !is_alphabetic_name(fname) {
            return Err(LibraryError::invalid_name(
                format!("first name must be alphabetic, got {:?}", fname).as_str()));
        }
        if !is_alphabetic_name(lname) {
            return Err(LibraryError::invalid_name(
                format!("last name must be alphabetic, got {:?}", lname).as_str()));
        }
        Ok(PatronEntity {
            fname: fname.to_string(),
            lname: lname.to_string(),
            age,
            member_id: member_id.to_string(),
            borrowed_books: vec![],
        })
    }

    pub fn fname(&self) -> &str {
        self.fname.as_str()
    }

    pub fn lname(&self) -> &str {
        self.lname.as_str()
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn member_id(&self) -> &str {
        self.member_id.as_str()
    }

    // Appends the lower-cased title unless it is already borrowed.
    // A second add with any casing of the same title is a no-op.
    pub fn add_borrowed_book(&mut self, title: &str) {
        let title = title.to_lowercase();
        if !self.borrowed_books.iter().any(|b| *b == title) {
            self.borrowed_books.push(title);
        }
    }

    // Removes the matching entry if present; an absent title is a no-op.
    pub fn return_borrowed_book(&mut self, title: &str) {
        let title = title.to_lowercase();
        self.borrowed_books.retain(|b| *b != title);
    }

    pub fn get_borrowed_books(&self) -> &[String] {
        self.borrowed_books.as_slice()
    }

    // Used when reconstructing a persisted record; titles pass through
    // the same normalization as a live borrow.
    pub fn set_borrowed_books(&mut self, titles: &[String]) {
        self.borrowed_books.clear();
        for title in titles {
            self.add_borrowed_book(title.as_str());
        }
    }
}

// Identity covers name, age and member id; the borrowed list does not
// participate in equality.
impl PartialEq for PatronEntity {
    fn eq(&self, other: &Self) -> bool {
        self.fname == other.fname
            && self.lname == other.lname
            && self.age == other.age
            && self.member_id == other.member_id
    }
}

impl Eq for PatronEntity {}

impl Identifiable for PatronEntity {
    fn id(&self) -> String {
        self.member_id.to_string()
    }
}
