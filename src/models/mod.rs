pub mod cart;
pub mod item;

pub use cart::{Cart, CartOutcome};
pub use item::{Item, ItemPatch};
