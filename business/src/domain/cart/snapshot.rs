use std::collections::HashMap;

use super::codec::{self, ITEMS_FIELD};
use super::errors::CartError;
use super::model::{Cart, LineItem};
use super::repository::CartStore;
use crate::domain::shared::value_objects::UserId;

/// Stored state of a cart key.
///
/// `Absent` (no record at all) and `Empty` (record present, zero items) are kept
/// apart: reading an absent cart is an error, reading an empty one is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartSnapshot {
    Absent,
    Empty,
    Items(Vec<LineItem>),
}

impl CartSnapshot {
    /// Reads and decodes the record stored under `user_id`.
    pub async fn load(store: &dyn CartStore, user_id: &UserId) -> Result<Self, CartError> {
        let fields = store.read_fields(user_id).await?;
        Self::from_fields(&fields)
    }

    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, CartError> {
        if fields.is_empty() {
            return Ok(Self::Absent);
        }

        let items = match fields.get(ITEMS_FIELD) {
            Some(value) => codec::decode(value)?,
            None => Vec::new(),
        };

        if items.is_empty() {
            Ok(Self::Empty)
        } else {
            Ok(Self::Items(items))
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn into_cart(self) -> Cart {
        match self {
            Self::Absent | Self::Empty => Cart::empty(),
            Self::Items(items) => Cart::new(items),
        }
    }
}
