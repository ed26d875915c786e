pub mod mock_contact_repository;
pub mod mock_note_repository;

#[allow(unused_imports)]
pub use mock_contact_repository::MockContactRepository;
#[allow(unused_imports)]
pub use mock_note_repository::MockNoteRepository;
