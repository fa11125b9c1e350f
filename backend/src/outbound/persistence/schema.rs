//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match `backend/migrations` exactly.

diesel::table! {
    /// Trivia categories, seeded by the initial migration.
    categories (id) {
        /// Primary key.
        id -> Int4,
        /// Display label.
        #[sql_name = "type"]
        label -> Varchar,
    }
}

diesel::table! {
    /// Trivia questions.
    questions (id) {
        /// Primary key assigned by the sequence.
        id -> Int4,
        /// Question text.
        question -> Text,
        /// Answer text.
        answer -> Text,
        /// Owning category (foreign key to `categories.id`).
        category -> Int4,
        /// Difficulty rating, 1 to 5.
        difficulty -> Int4,
    }
}

diesel::joinable!(questions -> categories (category));
diesel::allow_tables_to_appear_in_same_query!(categories, questions);
