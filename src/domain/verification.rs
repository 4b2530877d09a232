use crate::domain::inventory::InventoryItem;

/// Required-fields verification, parameterized over the entity kind
///
/// Each verifiable entity decides which of its fields are mandatory;
/// callers only depend on the capability, not on the concrete type.
#[allow(dead_code)]
pub trait VerifyRequiredFields {
    /// True when every required field carries a usable value
    fn has_required_fields(&self) -> bool;
}

#[allow(dead_code)]
impl VerifyRequiredFields for InventoryItem {
    fn has_required_fields(&self) -> bool {
        !self.upc.trim().is_empty()
            && self
                .name
                .as_deref()
                .is_some_and(|name| !name.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(upc: &str, name: Option<&str>) -> InventoryItem {
        InventoryItem {
            id: 0,
            upc: upc.to_string(),
            name: name.map(str::to_string),
            description: None,
            manufacturer: None,
            quantity: 0,
            status: String::new(),
        }
    }

    #[test]
    fn upc_and_name_present() {
        assert!(item("11223344", Some("Widget")).has_required_fields());
    }

    #[test]
    fn missing_name_fails() {
        assert!(!item("11223344", None).has_required_fields());
    }

    #[test]
    fn blank_name_fails() {
        assert!(!item("11223344", Some("   ")).has_required_fields());
    }

    #[test]
    fn blank_upc_fails() {
        assert!(!item("  ", Some("Widget")).has_required_fields());
    }
}
