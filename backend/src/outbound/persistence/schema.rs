//! Diesel table definitions for the trivia database.
//!
//! Must match the deployed schema. Regenerate with `diesel print-schema`
//! against a live database when the tables change.

diesel::table! {
    /// Trivia questions.
    ///
    /// `id` is a serial primary key; `category` references `categories.id`
    /// without a foreign key constraint.
    questions (id) {
        id -> Int4,
        question -> Text,
        answer -> Text,
        category -> Int4,
        difficulty -> Int4,
    }
}

diesel::table! {
    /// Question categories. Read-only for the API.
    categories (id) {
        id -> Int4,
        /// Display label. The column is named `type` in the database.
        #[sql_name = "type"]
        kind -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(questions, categories);
