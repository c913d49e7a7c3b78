//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; Diesel uses them for
//! compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Registered chefs, keyed by email.
    chefs (email) {
        /// Primary key: validated email address.
        email -> Varchar,
        /// Bcrypt hash of the chef's password.
        password -> Varchar,
    }
}

diesel::table! {
    /// Recipe records.
    recipes (id) {
        /// Primary key: store-assigned BIGSERIAL.
        id -> Int8,
        /// Recipe name.
        name -> Varchar,
        /// Recipe category.
        category -> Varchar,
        /// Free-form description.
        description -> Text,
        /// Owning chef's email.
        chef_email -> Varchar,
        /// Server-assigned creation/update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Ordered ingredient list elements.
    recipe_ingredients (recipe_id, position) {
        recipe_id -> Int8,
        position -> Int4,
        ingredient -> Text,
    }
}

diesel::table! {
    /// Ordered direction list elements.
    recipe_directions (recipe_id, position) {
        recipe_id -> Int8,
        position -> Int4,
        direction -> Text,
    }
}

diesel::joinable!(recipes -> chefs (chef_email));
diesel::joinable!(recipe_ingredients -> recipes (recipe_id));
diesel::joinable!(recipe_directions -> recipes (recipe_id));

diesel::allow_tables_to_appear_in_same_query!(
    chefs,
    recipes,
    recipe_ingredients,
    recipe_directions,
);
