//! Recipe aggregate and its validated content.
//!
//! `RecipeDraft` is the client-controlled portion (name, category,
//! description, element lists) validated once at the boundary; `Recipe` adds
//! the store-assigned identifier, the owning chef, and the server-assigned
//! timestamp. Neither the id nor the timestamp ever comes from client input.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::domain::ChefEmail;

/// Store-assigned numeric recipe identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipeId(i64);

impl RecipeId {
    /// Wrap a raw identifier.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw identifier value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecipeId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Validation errors returned by [`RecipeDraft::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeValidationError {
    BlankName,
    BlankCategory,
    BlankDescription,
    MissingIngredients,
    MissingDirections,
}

impl fmt::Display for RecipeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankName => write!(f, "name must not be blank"),
            Self::BlankCategory => write!(f, "category must not be blank"),
            Self::BlankDescription => write!(f, "description must not be blank"),
            Self::MissingIngredients => write!(f, "at least one ingredient is required"),
            Self::MissingDirections => write!(f, "at least one direction is required"),
        }
    }
}

impl std::error::Error for RecipeValidationError {}

/// Client-supplied recipe content, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    name: String,
    category: String,
    description: String,
    ingredients: Vec<String>,
    directions: Vec<String>,
}

impl RecipeDraft {
    /// Validate and construct a draft.
    ///
    /// Name, category and description must be non-blank after trimming;
    /// ingredient and direction lists must contain at least one entry.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        ingredients: Vec<String>,
        directions: Vec<String>,
    ) -> Result<Self, RecipeValidationError> {
        let name = name.into();
        let category = category.into();
        let description = description.into();
        if name.trim().is_empty() {
            return Err(RecipeValidationError::BlankName);
        }
        if category.trim().is_empty() {
            return Err(RecipeValidationError::BlankCategory);
        }
        if description.trim().is_empty() {
            return Err(RecipeValidationError::BlankDescription);
        }
        if ingredients.is_empty() {
            return Err(RecipeValidationError::MissingIngredients);
        }
        if directions.is_empty() {
            return Err(RecipeValidationError::MissingDirections);
        }
        Ok(Self {
            name,
            category,
            description,
            ingredients,
            directions,
        })
    }

    /// Recipe name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Recipe category.
    pub fn category(&self) -> &str {
        self.category.as_str()
    }

    /// Free-form description.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Ordered ingredient list.
    pub fn ingredients(&self) -> &[String] {
        self.ingredients.as_slice()
    }

    /// Ordered direction list.
    pub fn directions(&self) -> &[String] {
        self.directions.as_slice()
    }
}

/// A recipe as held by the catalog: validated content plus ownership, the
/// server-assigned timestamp and, once persisted, the store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    id: Option<RecipeId>,
    content: RecipeDraft,
    author: ChefEmail,
    updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Assemble a not-yet-persisted recipe; the store assigns the id on save.
    pub fn new(content: RecipeDraft, author: ChefEmail, updated_at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            content,
            author,
            updated_at,
        }
    }

    /// Assemble a recipe carrying a known identifier.
    pub fn persisted(
        id: RecipeId,
        content: RecipeDraft,
        author: ChefEmail,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            content,
            author,
            updated_at,
        }
    }

    /// Store-assigned identifier, absent until first save.
    pub fn id(&self) -> Option<RecipeId> {
        self.id
    }

    /// Validated content.
    pub fn content(&self) -> &RecipeDraft {
        &self.content
    }

    /// Recipe name.
    pub fn name(&self) -> &str {
        self.content.name()
    }

    /// Recipe category.
    pub fn category(&self) -> &str {
        self.content.category()
    }

    /// Free-form description.
    pub fn description(&self) -> &str {
        self.content.description()
    }

    /// Ordered ingredient list.
    pub fn ingredients(&self) -> &[String] {
        self.content.ingredients()
    }

    /// Ordered direction list.
    pub fn directions(&self) -> &[String] {
        self.content.directions()
    }

    /// Email of the owning chef.
    pub fn author(&self) -> &ChefEmail {
        &self.author
    }

    /// Server-assigned creation/update timestamp.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Ownership check: exact equality of the caller's email and the owner's.
    pub fn is_owned_by(&self, email: &ChefEmail) -> bool {
        &self.author == email
    }
}
