//! Diesel table definitions for the trivia schema.
//!
//! These must match the migrations exactly; Diesel uses them for
//! compile-time query validation.

diesel::table! {
    /// Trivia questions.
    questions (id) {
        /// Primary key, assigned by the database.
        id -> Int4,
        /// The question text.
        question -> Text,
        /// The expected answer.
        answer -> Text,
        /// Difficulty rating, 1 and up.
        difficulty -> Int4,
        /// Category identifier stored as text.
        category -> Text,
    }
}

diesel::table! {
    /// Question categories.
    categories (id) {
        /// Primary key.
        id -> Int4,
        /// Category label. The column is named `type` in SQL.
        #[sql_name = "type"]
        kind -> Text,
    }
}
