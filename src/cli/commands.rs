use std::{io::Write, str::FromStr};

use anyhow::Result;
use console::Emoji;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    cli::prompt::Prompt,
    models::{
        cart::Cart,
        item::{Item, MAX_PRICE},
    },
    services::CartService,
    utils::formatting::{format_heading, format_notice, today_label},
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");

pub const MENU: &str = "\
MENU
a - Add item to cart
r - Remove item from cart
c - Change item quantity
i - Output items' descriptions
o - Output shopping cart
q - Quit";

pub const INVALID_OPTION: &str = "Invalid option. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    AddItem,
    RemoveItem,
    ChangeQuantity,
    ShowDescriptions,
    ShowCart,
    Quit,
}

impl FromStr for MenuCommand {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "a" => Ok(MenuCommand::AddItem),
            "r" => Ok(MenuCommand::RemoveItem),
            "c" => Ok(MenuCommand::ChangeQuantity),
            "i" => Ok(MenuCommand::ShowDescriptions),
            "o" => Ok(MenuCommand::ShowCart),
            "q" => Ok(MenuCommand::Quit),
            other => Err(InputError::UnknownOption {
                input: other.to_string(),
            }),
        }
    }
}

impl MenuCommand {
    fn heading(self) -> &'static str {
        match self {
            MenuCommand::AddItem => "ADD ITEM TO CART",
            MenuCommand::RemoveItem => "REMOVE ITEM FROM CART",
            MenuCommand::ChangeQuantity => "CHANGE ITEM QUANTITY",
            MenuCommand::ShowDescriptions => "OUTPUT ITEMS' DESCRIPTIONS",
            MenuCommand::ShowCart => "OUTPUT SHOPPING CART",
            MenuCommand::Quit => "QUIT",
        }
    }
}

/// Raw text that could not be turned into a typed value.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid number '{input}': price must be a non-negative amount like 3 or 9.99")]
    InvalidPrice { input: String },

    #[error("Invalid number '{input}': price may not exceed {max}")]
    PriceTooLarge { input: String, max: Decimal },

    #[error("Invalid number '{input}': quantity must be a whole number of 0 or more")]
    InvalidQuantity { input: String },

    #[error("Unknown menu option '{input}'")]
    UnknownOption { input: String },
}

pub fn parse_price(raw: &str) -> Result<Decimal, InputError> {
    let invalid = || InputError::InvalidPrice {
        input: raw.trim().to_string(),
    };
    let price = Decimal::from_str(raw.trim()).map_err(|_| invalid())?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(invalid());
    }
    if price > MAX_PRICE {
        return Err(InputError::PriceTooLarge {
            input: raw.trim().to_string(),
            max: MAX_PRICE,
        });
    }
    Ok(price)
}

pub fn parse_quantity(raw: &str) -> Result<u32, InputError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| InputError::InvalidQuantity {
            input: raw.trim().to_string(),
        })
}

/// Works out the cart header, asking for whatever was not supplied up front.
/// A blank date answer falls back to today's date.
pub fn open_cart<P: Prompt, W: Write>(
    prompt: &mut P,
    out: &mut W,
    owner: Option<String>,
    date_label: Option<String>,
) -> Result<Cart> {
    let owner = match owner {
        Some(owner) => owner,
        None => prompt.input("Enter customer's name")?.trim().to_string(),
    };
    let date_label = match date_label {
        Some(date) => date,
        None => {
            let answer = prompt.input("Enter today's date")?.trim().to_string();
            if answer.is_empty() {
                today_label()
            } else {
                answer
            }
        }
    };

    writeln!(out)?;
    writeln!(out, "Customer name: {}", owner)?;
    writeln!(out, "Today's date: {}", date_label)?;

    info!("Opened cart for {} on {}", owner, date_label);
    Ok(Cart::new(owner, date_label))
}

/// The text menu driving one shopping session.
pub struct CliApp<P, W> {
    service: CartService,
    prompt: P,
    out: W,
}

impl<P: Prompt, W: Write> CliApp<P, W> {
    pub fn new(service: CartService, prompt: P, out: W) -> Self {
        Self {
            service,
            prompt,
            out,
        }
    }

    pub fn service(&self) -> &CartService {
        &self.service
    }

    pub fn into_parts(self) -> (CartService, P, W) {
        (self.service, self.prompt, self.out)
    }

    /// Shows the menu until the user quits. Fails only when input or
    /// output does.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "{}", MENU)?;
            writeln!(self.out)?;

            let choice = self.prompt.input("Choose an option")?;
            match choice.parse::<MenuCommand>() {
                Ok(MenuCommand::Quit) => {
                    info!("Session ended by user");
                    return Ok(());
                }
                Ok(command) => self.execute(command)?,
                Err(e) => {
                    debug!("{}", e);
                    writeln!(self.out, "{}", format_notice(INVALID_OPTION))?;
                }
            }
        }
    }

    pub fn execute(&mut self, command: MenuCommand) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", format_heading(command.heading()))?;

        match command {
            MenuCommand::AddItem => self.handle_add_item(),
            MenuCommand::RemoveItem => self.handle_remove_item(),
            MenuCommand::ChangeQuantity => self.handle_change_quantity(),
            MenuCommand::ShowDescriptions => {
                let report = self.service.descriptions();
                writeln!(self.out, "{}", report)?;
                Ok(())
            }
            MenuCommand::ShowCart => {
                let report = self.service.summary();
                writeln!(self.out, "{}", report)?;
                Ok(())
            }
            MenuCommand::Quit => Ok(()),
        }
    }

    fn handle_add_item(&mut self) -> Result<()> {
        let name = self.prompt.input("Enter the item name")?;
        let description = self.prompt.input("Enter the item description")?;
        let price = self.read_parsed("Enter the item price", parse_price)?;
        let quantity = self.read_parsed("Enter the item quantity", parse_quantity)?;

        let item = Item::new(name.trim(), price, quantity, description.trim());
        writeln!(self.out, "{}Added {} to cart", CHECKMARK, item.name)?;
        self.service.add_item(item);
        Ok(())
    }

    fn handle_remove_item(&mut self) -> Result<()> {
        let name = self.prompt.input("Enter name of item to remove")?;

        match self.service.remove_item(name.trim()) {
            Ok(()) => writeln!(self.out, "{}Removed {} from cart", CHECKMARK, name.trim())?,
            Err(e) => writeln!(self.out, "{}{}", CROSS, e)?,
        }
        Ok(())
    }

    fn handle_change_quantity(&mut self) -> Result<()> {
        let name = self.prompt.input("Enter the item name")?;
        let quantity = self.read_parsed("Enter the new quantity", parse_quantity)?;

        match self.service.change_quantity(name.trim(), quantity) {
            Ok(()) => writeln!(
                self.out,
                "{}{} quantity set to {}",
                CHECKMARK,
                name.trim(),
                quantity
            )?,
            Err(e) => writeln!(self.out, "{}{}", CROSS, e)?,
        }
        Ok(())
    }

    /// Asks until the answer parses.
    fn read_parsed<T>(
        &mut self,
        prompt: &str,
        parse: fn(&str) -> Result<T, InputError>,
    ) -> Result<T> {
        loop {
            let raw = self.prompt.input(prompt)?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!("Rejected input for '{}': {}", prompt, e);
                    writeln!(self.out, "{}{}", CROSS, format_notice(&e.to_string()))?;
                }
            }
        }
    }
}
