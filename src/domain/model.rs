use crate::core::codec::DishFormat;
use serde::{Deserialize, Deserializer, Serialize};

/// One dish owned by a user in a recipe catalog.
///
/// A plain record: every field is public, nothing is validated and no
/// relationship to the owning user is enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DishRecord {
    /// Identity of the dish, assigned by whoever stores it.
    #[serde(alias = "Id", deserialize_with = "unset_as_default")]
    pub id: i32,

    #[serde(alias = "Name", deserialize_with = "unset_as_default")]
    pub name: String,

    /// Identity of the user that has the dish.
    #[serde(alias = "OwnerId", deserialize_with = "unset_as_default")]
    pub owner_id: i32,

    /// Free-form description of the cooking process.
    #[serde(alias = "CookingInstructions", deserialize_with = "unset_as_default")]
    pub cooking_instructions: String,

    /// Link to the small photo (icon).
    #[serde(alias = "SmallPhotoLink", deserialize_with = "unset_as_default")]
    pub small_photo_link: String,

    /// Link to the big photo.
    #[serde(alias = "BigPhotoLink", deserialize_with = "unset_as_default")]
    pub big_photo_link: String,
}

/// `null` and empty CSV cells read as the field's default, same as a
/// missing field.
fn unset_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl DishRecord {
    /// Empty record: zero ids, empty strings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn owner_id(&self) -> i32 {
        self.owner_id
    }

    pub fn set_owner_id(&mut self, owner_id: i32) {
        self.owner_id = owner_id;
    }

    pub fn cooking_instructions(&self) -> &str {
        &self.cooking_instructions
    }

    pub fn set_cooking_instructions(&mut self, instructions: impl Into<String>) {
        self.cooking_instructions = instructions.into();
    }

    pub fn small_photo_link(&self) -> &str {
        &self.small_photo_link
    }

    pub fn set_small_photo_link(&mut self, link: impl Into<String>) {
        self.small_photo_link = link.into();
    }

    pub fn big_photo_link(&self) -> &str {
        &self.big_photo_link
    }

    pub fn set_big_photo_link(&mut self, link: impl Into<String>) {
        self.big_photo_link = link.into();
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_owner_id(mut self, owner_id: i32) -> Self {
        self.owner_id = owner_id;
        self
    }

    pub fn with_cooking_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.cooking_instructions = instructions.into();
        self
    }

    pub fn with_small_photo_link(mut self, link: impl Into<String>) -> Self {
        self.small_photo_link = link.into();
        self
    }

    pub fn with_big_photo_link(mut self, link: impl Into<String>) -> Self {
        self.big_photo_link = link.into();
        self
    }
}

/// Records encoded in a single format, ready to be written as one file.
#[derive(Debug, Clone)]
pub struct RenderedOutput {
    pub format: DishFormat,
    pub file_name: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct ExportResult {
    pub records: Vec<DishRecord>,
    pub outputs: Vec<RenderedOutput>,
}
