use super::errors::CartError;
use super::model::LineItem;

/// Hash field holding the serialized line items of a cart.
pub const ITEMS_FIELD: &str = "items";

/// Serializes line items as a JSON array. An empty cart encodes to `[]`.
pub fn encode(items: &[LineItem]) -> Result<String, CartError> {
    serde_json::to_string(items).map_err(|e| CartError::MalformedData(e.to_string()))
}

/// Parses a stored items value.
///
/// Blank text and a JSON `null` (written by older clients for emptied carts)
/// both decode to no items.
pub fn decode(text: &str) -> Result<Vec<LineItem>, CartError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let items: Option<Vec<LineItem>> =
        serde_json::from_str(text).map_err(|e| CartError::MalformedData(e.to_string()))?;
    Ok(items.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_encode_empty_sequence_as_explicit_array() {
        assert_eq!(encode(&[]).unwrap(), "[]");
    }

    #[test]
    fn should_encode_with_stored_field_names() {
        let encoded = encode(&[LineItem::new("A", 2)]).unwrap();

        assert_eq!(encoded, r#"[{"Sku":"A","Quantity":2}]"#);
    }

    #[test]
    fn should_decode_existing_records() {
        let items = decode(r#"[{"Sku":"A","Quantity":2},{"Sku":"B","Quantity":1}]"#).unwrap();

        assert_eq!(items, vec![LineItem::new("A", 2), LineItem::new("B", 1)]);
    }

    #[test]
    fn should_decode_other_field_name_casings() {
        let items = decode(r#"[{"sku":"A","quantity":2},{"SKU":"B","QUANTITY":1}]"#).unwrap();

        assert_eq!(items, vec![LineItem::new("A", 2), LineItem::new("B", 1)]);
        assert_eq!(encode(&items).unwrap(), r#"[{"Sku":"A","Quantity":2},{"Sku":"B","Quantity":1}]"#);
    }

    #[test]
    fn should_decode_blank_text_as_no_items() {
        assert!(decode("").unwrap().is_empty());
        assert!(decode("   ").unwrap().is_empty());
    }

    #[test]
    fn should_decode_null_as_no_items() {
        assert!(decode("null").unwrap().is_empty());
    }

    #[test]
    fn should_reject_malformed_text() {
        let result = decode("{not json");

        assert!(matches!(result, Err(CartError::MalformedData(_))));
    }

    #[test]
    fn should_reject_wrong_shape() {
        let result = decode(r#"{"Sku":"A","Quantity":2}"#);

        assert!(matches!(result, Err(CartError::MalformedData(_))));
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(items in proptest::collection::vec((".*", any::<i64>()), 0..16)) {
            let items: Vec<LineItem> = items
                .into_iter()
                .map(|(sku, quantity)| LineItem::new(sku, quantity))
                .collect();

            let decoded = decode(&encode(&items).unwrap()).unwrap();

            prop_assert_eq!(decoded, items);
        }
    }
}
