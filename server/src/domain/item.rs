//! Item listings, partial updates and free-text search.

use std::fmt;

use super::{BookingSnapshot, Comment, ItemId, RequestId, UserId};

/// Validation errors returned when building item records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyName,
    EmptyDescription,
}

impl fmt::Display for ItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "item name must not be blank"),
            Self::EmptyDescription => write!(f, "item description must not be blank"),
        }
    }
}

impl std::error::Error for ItemValidationError {}

/// An item listed by its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Item identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Whether the item can currently be booked.
    pub available: bool,
    /// User who listed the item.
    pub owner_id: UserId,
    /// Request this item answers, if any.
    pub request_id: Option<RequestId>,
}

impl Item {
    /// Whether `user_id` owns this item.
    #[must_use]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

/// Payload for listing a new item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Whether the item can be booked.
    pub available: bool,
    /// Listing user.
    pub owner_id: UserId,
    /// Request this item answers, if any.
    pub request_id: Option<RequestId>,
}

/// Item fields supplied by a client when listing an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Whether the item can be booked.
    pub available: bool,
    /// Request this item answers, if any.
    pub request_id: Option<RequestId>,
}

impl ItemDraft {
    /// Check the draft and attach its owner.
    pub fn into_new_item(self, owner_id: UserId) -> Result<NewItem, ItemValidationError> {
        if self.name.trim().is_empty() {
            return Err(ItemValidationError::EmptyName);
        }
        if self.description.trim().is_empty() {
            return Err(ItemValidationError::EmptyDescription);
        }
        Ok(NewItem {
            name: self.name,
            description: self.description,
            available: self.available,
            owner_id,
            request_id: self.request_id,
        })
    }
}

/// Partial update for an item; absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement availability.
    pub available: Option<bool>,
}

impl ItemPatch {
    /// Reject present-but-blank text fields.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(ItemValidationError::EmptyName);
        }
        if self
            .description
            .as_deref()
            .is_some_and(|description| description.trim().is_empty())
        {
            return Err(ItemValidationError::EmptyDescription);
        }
        Ok(())
    }

    /// Apply the patch on top of `item`.
    #[must_use]
    pub fn apply(&self, item: Item) -> Item {
        Item {
            name: self.name.clone().unwrap_or(item.name),
            description: self.description.clone().unwrap_or(item.description),
            available: self.available.unwrap_or(item.available),
            ..item
        }
    }
}

/// Normalised free-text query over available items.
///
/// Blank input yields no query, which callers answer with an empty list.
///
/// # Examples
/// ```
/// use shareit_server::domain::ItemSearch;
///
/// assert!(ItemSearch::parse("   ").is_none());
/// let search = ItemSearch::parse(" DrIlL ").expect("non-blank text");
/// assert_eq!(search.text(), "drill");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSearch(String);

impl ItemSearch {
    /// Trim and lowercase `text`, returning `None` when nothing is left.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_lowercase()))
    }

    /// Lowercased search text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.0.as_str()
    }

    /// Whether `item` is available and mentions the text in its name or
    /// description, ignoring case.
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        item.available
            && (item.name.to_lowercase().contains(self.text())
                || item.description.to_lowercase().contains(self.text()))
    }
}

/// An item with its booking neighbours and comments.
///
/// Booking neighbours are only filled in for the item's owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetails {
    /// The item itself.
    pub item: Item,
    /// Most recent booking, shown to the owner only.
    pub last_booking: Option<BookingSnapshot>,
    /// Upcoming booking, shown to the owner only.
    pub next_booking: Option<BookingSnapshot>,
    /// Comments in creation order.
    pub comments: Vec<Comment>,
}
