use poem_openapi::Object;

use business::domain::cart::model::{Cart, ItemDelta, LineItem};

// Field names match the JSON bodies existing clients already send.

#[derive(Debug, Clone, Object)]
pub struct CartItemDto {
    /// Stock keeping unit, matched case-sensitively
    #[oai(rename = "Sku")]
    pub sku: String,
    /// Quantity to add/remove, or held in the cart
    #[oai(rename = "Quantity")]
    pub quantity: i64,
}

impl From<CartItemDto> for ItemDelta {
    fn from(dto: CartItemDto) -> Self {
        ItemDelta::new(dto.sku, dto.quantity)
    }
}

impl From<LineItem> for CartItemDto {
    fn from(item: LineItem) -> Self {
        Self {
            sku: item.sku,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddItemsRequest {
    #[oai(rename = "UserID")]
    pub user_id: String,
    #[oai(rename = "Items", default)]
    pub items: Vec<CartItemDto>,
}

#[derive(Debug, Clone, Object)]
pub struct RemoveItemsRequest {
    #[oai(rename = "UserID")]
    pub user_id: String,
    #[oai(rename = "Items", default)]
    pub items: Vec<CartItemDto>,
    /// Drop the listed SKUs entirely, whatever quantity is given
    #[oai(rename = "RemoveAll", default)]
    pub remove_all: bool,
}

#[derive(Debug, Clone, Object)]
pub struct DeleteCartRequest {
    #[oai(rename = "UserID")]
    pub user_id: String,
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Line items in cart order
    #[oai(rename = "Items")]
    pub items: Vec<CartItemDto>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            items: cart.items.into_iter().map(CartItemDto::from).collect(),
        }
    }
}
