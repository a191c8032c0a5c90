use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{
    cart::{Cart, CartOutcome, NOTHING_MODIFIED, NOTHING_REMOVED},
    item::{Item, ItemPatch},
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CartServiceError {
    #[error("{}", NOTHING_REMOVED)]
    NothingRemoved { name: String },

    #[error("{}", NOTHING_MODIFIED)]
    NothingModified { name: String },
}

/// The shopping session: owns the one cart the menu works on.
pub struct CartService {
    cart: Cart,
}

impl CartService {
    pub fn new(cart: Cart) -> Self {
        Self { cart }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add_item(&mut self, item: Item) {
        info!(
            "Adding '{}' x{} @ {} to {}'s cart",
            item.name,
            item.quantity,
            item.price,
            self.cart.owner()
        );
        self.cart.add_item(item);
        debug!("Cart now holds {} lines", self.cart.len());
    }

    pub fn remove_item(&mut self, name: &str) -> Result<(), CartServiceError> {
        match self.cart.remove_item(name) {
            CartOutcome::Found => {
                info!("Removed '{}' from cart", name);
                Ok(())
            }
            CartOutcome::NotFound => {
                warn!("Remove requested for '{}' which is not in the cart", name);
                Err(CartServiceError::NothingRemoved {
                    name: name.to_string(),
                })
            }
        }
    }

    pub fn modify_item(&mut self, patch: ItemPatch) -> Result<(), CartServiceError> {
        if patch.is_empty() {
            debug!("Patch for '{}' carries no changes", patch.name);
        }

        match self.cart.modify_item(&patch) {
            CartOutcome::Found => {
                info!("Modified '{}': {:?}", patch.name, patch);
                Ok(())
            }
            CartOutcome::NotFound => {
                warn!("Modify requested for '{}' which is not in the cart", patch.name);
                Err(CartServiceError::NothingModified { name: patch.name })
            }
        }
    }

    pub fn change_quantity(&mut self, name: &str, quantity: u32) -> Result<(), CartServiceError> {
        self.modify_item(ItemPatch::new(name).with_quantity(quantity))
    }

    pub fn total_quantity(&self) -> u64 {
        self.cart.total_quantity()
    }

    pub fn total_cost(&self) -> Decimal {
        self.cart.total_cost()
    }

    pub fn summary(&self) -> String {
        self.cart.render_summary()
    }

    pub fn descriptions(&self) -> String {
        self.cart.render_descriptions()
    }

    /// Pre-loads a few demo items.
    pub fn seed_sample_items(&mut self) {
        for item in sample_items() {
            self.add_item(item);
        }
    }
}

pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new(
            "Nike Romaleos",
            Decimal::from(189),
            2,
            "Volt color, Weightlifting shoes",
        ),
        Item::new("Chocolate Chips", Decimal::from(3), 5, "Semi-sweet"),
        Item::new(
            "Powerbeats 2 Headphones",
            Decimal::from(128),
            1,
            "Bluetooth headphones",
        ),
    ]
}
