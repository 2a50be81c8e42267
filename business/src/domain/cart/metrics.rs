/// Cart operations reported to the metrics sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartOperation {
    GetCart,
    AddItems,
    RemoveItems,
    DeleteCart,
}

impl CartOperation {
    pub const ALL: [CartOperation; 4] = [
        CartOperation::GetCart,
        CartOperation::AddItems,
        CartOperation::RemoveItems,
        CartOperation::DeleteCart,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CartOperation::GetCart => "get_cart",
            CartOperation::AddItems => "add_item",
            CartOperation::RemoveItems => "remove_item",
            CartOperation::DeleteCart => "delete_cart",
        }
    }
}

pub trait CartMetrics: Send + Sync {
    fn record_call(&self, operation: CartOperation);
    fn record_error(&self, operation: CartOperation);
}
