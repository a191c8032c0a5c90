use rust_decimal::Decimal;

use super::item::{Item, ItemPatch, UNSET_TEXT};
use crate::utils::formatting::{format_cart_descriptions, format_cart_summary};

pub const DEFAULT_DATE_LABEL: &str = "January 1, 2020";

pub const NOTHING_REMOVED: &str = "Item not found in cart. Nothing removed.";
pub const NOTHING_MODIFIED: &str = "Item not found in cart. Nothing modified.";

/// Result of a lookup-by-name mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOutcome {
    Found,
    NotFound,
}

impl CartOutcome {
    pub fn is_found(self) -> bool {
        matches!(self, CartOutcome::Found)
    }
}

/// Ordered collection of items for one customer.
///
/// Items keep insertion order. Names are not required to be unique; lookups
/// by name always act on the first match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    owner: String,
    date_label: String,
    items: Vec<Item>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(UNSET_TEXT, DEFAULT_DATE_LABEL)
    }
}

impl Cart {
    pub fn new(owner: impl Into<String>, date_label: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            date_label: date_label.into(),
            items: Vec::new(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn date_label(&self) -> &str {
        &self.date_label
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes the first item named `name`, shifting later items up.
    pub fn remove_item(&mut self, name: &str) -> CartOutcome {
        match self.items.iter().position(|item| item.name == name) {
            Some(index) => {
                self.items.remove(index);
                CartOutcome::Found
            }
            None => CartOutcome::NotFound,
        }
    }

    /// Applies `patch` to the first item whose name matches `patch.name`.
    /// Later items sharing the name are left alone.
    pub fn modify_item(&mut self, patch: &ItemPatch) -> CartOutcome {
        match self.items.iter_mut().find(|item| item.name == patch.name) {
            Some(item) => {
                patch.apply_to(item);
                CartOutcome::Found
            }
            None => CartOutcome::NotFound,
        }
    }

    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of line totals, saturating at `Decimal::MAX`.
    pub fn total_cost(&self) -> Decimal {
        self.items
            .iter()
            .map(Item::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// `<owner>'s Shopping Cart - <date>`
    pub fn header(&self) -> String {
        format!("{}'s Shopping Cart - {}", self.owner, self.date_label)
    }

    pub fn render_summary(&self) -> String {
        format_cart_summary(self)
    }

    pub fn render_descriptions(&self) -> String {
        format_cart_descriptions(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new("John Doe", "May 11, 2025");
        cart.add_item(Item::new(
            "Nike Romaleos",
            Decimal::from(189),
            2,
            "Volt color, Weightlifting shoes",
        ));
        cart.add_item(Item::new("Chocolate Chips", Decimal::from(3), 5, "Semi-sweet"));
        cart
    }

    fn names(cart: &Cart) -> Vec<&str> {
        cart.items().iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_default_cart() {
        let cart = Cart::default();
        assert_eq!(cart.owner(), "none");
        assert_eq!(cart.date_label(), "January 1, 2020");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_item_keeps_insertion_order() {
        let mut cart = sample_cart();
        cart.add_item(Item::new("Powerbeats", Decimal::from(128), 1, "Bluetooth headphones"));

        assert_eq!(cart.len(), 3);
        assert_eq!(names(&cart), ["Nike Romaleos", "Chocolate Chips", "Powerbeats"]);
        assert_eq!(cart.total_quantity(), 8);
    }

    #[test]
    fn test_add_item_allows_duplicate_names() {
        let mut cart = sample_cart();
        cart.add_item(Item::new("Chocolate Chips", Decimal::from(4), 1, "Dark"));
        assert_eq!(cart.len(), 3);
    }

    #[test]
    fn test_remove_item_found() {
        let mut cart = sample_cart();
        assert_eq!(cart.remove_item("Nike Romaleos"), CartOutcome::Found);
        assert_eq!(names(&cart), ["Chocolate Chips"]);
    }

    #[test]
    fn test_remove_item_not_found() {
        let mut cart = sample_cart();
        let before = cart.clone();
        assert_eq!(cart.remove_item("NonExistentItem"), CartOutcome::NotFound);
        assert_eq!(cart, before);

        let mut empty = Cart::default();
        assert_eq!(empty.remove_item("anything"), CartOutcome::NotFound);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_remove_is_case_sensitive() {
        let mut cart = sample_cart();
        assert_eq!(cart.remove_item("nike romaleos"), CartOutcome::NotFound);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_remove_only_first_duplicate() {
        let mut cart = Cart::new("Alice", "March 1, 2020");
        cart.add_item(Item::new("A", Decimal::from(1), 1, "first"));
        cart.add_item(Item::new("B", Decimal::from(2), 1, "other"));
        cart.add_item(Item::new("A", Decimal::from(3), 1, "second"));

        assert!(cart.remove_item("A").is_found());
        assert_eq!(names(&cart), ["B", "A"]);
        assert_eq!(cart.items()[1].description, "second");
    }

    #[test]
    fn test_modify_item_found() {
        let mut cart = sample_cart();
        let patch = ItemPatch::new("Nike Romaleos")
            .with_price(Decimal::from(200))
            .with_quantity(3);

        assert_eq!(cart.modify_item(&patch), CartOutcome::Found);

        let item = cart.find("Nike Romaleos").unwrap();
        assert_eq!(item.price, Decimal::from(200));
        assert_eq!(item.quantity, 3);
        assert_eq!(item.description, "Volt color, Weightlifting shoes");
    }

    #[test]
    fn test_modify_item_not_found() {
        let mut cart = sample_cart();
        let before = cart.clone();
        let patch = ItemPatch::new("NonExistentItem").with_price(Decimal::from(100));

        assert_eq!(cart.modify_item(&patch), CartOutcome::NotFound);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_modify_with_empty_patch_is_noop() {
        let mut cart = sample_cart();
        let before = cart.clone();
        assert!(cart.modify_item(&ItemPatch::new("Chocolate Chips")).is_found());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_modify_quantity_only() {
        let mut cart = sample_cart();
        cart.modify_item(&ItemPatch::new("Chocolate Chips").with_quantity(9));

        let item = cart.find("Chocolate Chips").unwrap();
        assert_eq!(item.quantity, 9);
        assert_eq!(item.price, Decimal::from(3));
        assert_eq!(item.description, "Semi-sweet");
    }

    #[test]
    fn test_modify_patches_only_first_duplicate() {
        let mut cart = Cart::new("Alice", "March 1, 2020");
        cart.add_item(Item::new("A", Decimal::from(1), 1, "first"));
        cart.add_item(Item::new("A", Decimal::from(1), 1, "second"));

        cart.modify_item(&ItemPatch::new("A").with_quantity(7).with_description("changed"));

        assert_eq!(cart.items()[0].quantity, 7);
        assert_eq!(cart.items()[0].description, "changed");
        assert_eq!(cart.items()[1].quantity, 1);
        assert_eq!(cart.items()[1].description, "second");
    }

    #[test]
    fn test_totals() {
        let cart = sample_cart();
        assert_eq!(cart.total_quantity(), 7);
        assert_eq!(cart.total_cost(), Decimal::from(393));

        let empty = Cart::default();
        assert_eq!(empty.total_quantity(), 0);
        assert_eq!(empty.total_cost(), Decimal::ZERO);
    }

    #[test]
    fn test_total_cost_with_cents() {
        let mut cart = Cart::default();
        cart.add_item(Item::new("Gum", Decimal::new(125, 2), 3, "Mint"));
        cart.add_item(Item::new("Soda", Decimal::new(199, 2), 2, "Cola"));
        assert_eq!(cart.total_cost(), Decimal::new(773, 2));
    }

    #[test]
    fn test_huge_prices_do_not_panic() {
        let mut cart = Cart::new("Alice", "March 1, 2020");
        cart.add_item(Item::new("Big", Decimal::MAX, 2, "d"));
        assert_eq!(cart.total_cost(), Decimal::MAX);
        assert!(cart.render_summary().contains("Total: $"));

        let half = Decimal::MAX / Decimal::from(2);
        let mut cart = Cart::new("Alice", "March 1, 2020");
        cart.add_item(Item::new("Half", half, 1, "d"));
        cart.add_item(Item::new("Other half", half, 1, "d"));
        cart.add_item(Item::new("Extra", Decimal::from(10), 1, "d"));
        assert_eq!(cart.total_cost(), Decimal::MAX);
    }

    #[test]
    fn test_total_quantity_does_not_overflow() {
        let mut cart = Cart::default();
        cart.add_item(Item::new("A", Decimal::ZERO, u32::MAX, "none"));
        cart.add_item(Item::new("B", Decimal::ZERO, u32::MAX, "none"));
        assert_eq!(cart.total_quantity(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_header() {
        assert_eq!(sample_cart().header(), "John Doe's Shopping Cart - May 11, 2025");
    }
}
