use rust_decimal::Decimal;

use crate::utils::formatting::format_money;

/// Placeholder text used for an unset name or description.
pub const UNSET_TEXT: &str = "none";

/// Largest price accepted from user input. Any such price times
/// `u32::MAX` still fits comfortably in a `Decimal`.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub description: String,
}

impl Default for Item {
    fn default() -> Self {
        Self {
            name: UNSET_TEXT.to_string(),
            price: Decimal::ZERO,
            quantity: 0,
            description: UNSET_TEXT.to_string(),
        }
    }
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        quantity: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            description: description.into(),
        }
    }

    /// Price multiplied by quantity, saturating at `Decimal::MAX`.
    pub fn line_total(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }

    /// e.g. `Bottled Water 10 @ $1 = $10`
    pub fn cost_line(&self) -> String {
        format!(
            "{} {} @ ${} = ${}",
            self.name,
            self.quantity,
            format_money(self.price),
            format_money(self.line_total())
        )
    }

    pub fn description_line(&self) -> String {
        format!("{}: {}", self.name, self.description)
    }
}

/// Partial update for an item already in a cart, matched by `name`.
///
/// Fields left as `None` are not touched. The name itself is never changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: String,
    pub price: Option<Decimal>,
    pub quantity: Option<u32>,
    pub description: Option<String>,
}

impl ItemPatch {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when applying the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.price.is_none() && self.quantity.is_none() && self.description.is_none()
    }

    pub fn apply_to(&self, item: &mut Item) {
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
    }
}

/// Reads an item-shaped value the legacy way: a field still holding its
/// default (`"none"`, `0`, `0`) means "leave unchanged".
impl From<Item> for ItemPatch {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            price: (!item.price.is_zero()).then_some(item.price),
            quantity: (item.quantity != 0).then_some(item.quantity),
            description: (item.description != UNSET_TEXT).then_some(item.description),
        }
    }
}
