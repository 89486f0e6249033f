pub mod book_by_author_cmd;
pub mod book_languages_cmd;
pub mod borrow_book_cmd;
pub mod get_ebooks_cmd;
pub mod get_patron_cmd;
pub mod register_patron_cmd;
pub mod return_book_cmd;
