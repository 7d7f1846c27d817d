//! Diesel schema for todo persistence.

diesel::table! {
    /// Todo records.
    todos (id) {
        /// Storage-assigned identity.
        id -> Int8,
        /// Todo title.
        #[max_length = 255]
        title -> Varchar,
        /// Free-form description, empty when not supplied.
        description -> Text,
        /// Completion status.
        status -> Bool,
        /// Insertion timestamp, never updated.
        created_date -> Timestamptz,
    }
}
