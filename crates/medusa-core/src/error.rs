pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("duplicate record id: {id}")]
    DuplicateRecordId { id: String },

    #[error("record at index {index} has an empty id")]
    EmptyRecordId { index: usize },
}
