//! Interactive cart and wishlist session.
//!
//! Reads one command per line, from a prompt when attached to a terminal
//! and from stdin or `--script` otherwise. A failing command is reported
//! and the session carries on.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::str::FromStr;

use anyhow::{Context as _, Result};
use dialoguer::{Confirm, Input};
use rewear_commerce::cart::{ChargeRates, OrderSummary, Store};
use rewear_commerce::catalog::Catalog;
use rewear_commerce::{CommerceError, ProductId};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use super::SessionArgs;
use crate::context::Context;
use crate::output::Output;

const HELP: &[(&str, &str)] = &[
    ("add <id> [qty] [size]", "Add to cart (size may contain spaces)"),
    ("remove <id>", "Remove a product from the cart"),
    ("qty <id> <n>", "Set quantity; 0 removes"),
    ("wish <id>", "Add to wishlist"),
    ("unwish <id>", "Remove from wishlist"),
    ("move-to-wishlist <id>", "Move from cart to wishlist"),
    ("move-to-cart <id>", "Move from wishlist to cart"),
    ("cart", "Show the cart"),
    ("wishlist", "Show the wishlist"),
    ("summary", "Show the order summary"),
    ("checkout", "Place the order"),
    ("clear", "Empty the cart"),
    ("help", "Show this help"),
    ("quit", "End the session"),
];

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Add {
        id: ProductId,
        quantity: i64,
        size: Option<String>,
    },
    Remove(ProductId),
    Quantity {
        id: ProductId,
        quantity: i64,
    },
    Wish(ProductId),
    Unwish(ProductId),
    MoveToWishlist(ProductId),
    MoveToCart(ProductId),
    Cart,
    Wishlist,
    Summary,
    Checkout,
    Clear,
    Help,
    Quit,
}

/// Why a command line could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}'. Type 'help' for commands.")]
    UnknownCommand(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Invalid {argument} '{value}'")]
    InvalidNumber {
        argument: &'static str,
        value: String,
    },

    #[error("'{0}' takes no arguments")]
    UnexpectedArgument(&'static str),
}

impl FromStr for SessionCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        if word.is_empty() {
            return Err(ParseError::Empty);
        }

        let command = match word.to_ascii_lowercase().as_str() {
            "add" => {
                let (id, rest) = take_id("add", rest)?;
                let (quantity, size) = match split_word(rest) {
                    Some((first, after)) => match first.parse::<i64>() {
                        Ok(quantity) => (quantity, after),
                        Err(_) => (1, rest),
                    },
                    None => (1, ""),
                };
                SessionCommand::Add {
                    id,
                    quantity,
                    size: (!size.is_empty()).then(|| size.to_string()),
                }
            }
            "remove" | "rm" => SessionCommand::Remove(only_id("remove", rest)?),
            "qty" => {
                let (id, rest) = take_id("qty", rest)?;
                if rest.is_empty() {
                    return Err(ParseError::MissingArgument {
                        command: "qty",
                        argument: "a quantity",
                    });
                }
                let quantity = rest.parse().map_err(|_| ParseError::InvalidNumber {
                    argument: "quantity",
                    value: rest.to_string(),
                })?;
                SessionCommand::Quantity { id, quantity }
            }
            "wish" => SessionCommand::Wish(only_id("wish", rest)?),
            "unwish" => SessionCommand::Unwish(only_id("unwish", rest)?),
            "move-to-wishlist" => {
                SessionCommand::MoveToWishlist(only_id("move-to-wishlist", rest)?)
            }
            "move-to-cart" => SessionCommand::MoveToCart(only_id("move-to-cart", rest)?),
            "cart" => no_args("cart", rest, SessionCommand::Cart)?,
            "wishlist" => no_args("wishlist", rest, SessionCommand::Wishlist)?,
            "summary" => no_args("summary", rest, SessionCommand::Summary)?,
            "checkout" => no_args("checkout", rest, SessionCommand::Checkout)?,
            "clear" => no_args("clear", rest, SessionCommand::Clear)?,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            _ => return Err(ParseError::UnknownCommand(word.to_string())),
        };
        Ok(command)
    }
}

fn split_word(s: &str) -> Option<(&str, &str)> {
    if s.is_empty() {
        return None;
    }
    Some(match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (s, ""),
    })
}

fn take_id<'a>(command: &'static str, rest: &'a str) -> Result<(ProductId, &'a str), ParseError> {
    let (word, rest) = split_word(rest).ok_or(ParseError::MissingArgument {
        command,
        argument: "a product id",
    })?;
    let id = word.parse().map_err(|_| ParseError::InvalidNumber {
        argument: "product id",
        value: word.to_string(),
    })?;
    Ok((id, rest))
}

fn only_id(command: &'static str, rest: &str) -> Result<ProductId, ParseError> {
    let (id, rest) = take_id(command, rest)?;
    if !rest.is_empty() {
        return Err(ParseError::UnexpectedArgument(command));
    }
    Ok(id)
}

fn no_args(
    command: &'static str,
    rest: &str,
    parsed: SessionCommand,
) -> Result<SessionCommand, ParseError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(ParseError::UnexpectedArgument(command))
    }
}

/// What a command did, for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Outcome {
    Done { message: String },
    Unchanged { message: String },
    Cart,
    Wishlist,
    Summary { summary: OrderSummary },
    Placed { summary: OrderSummary },
    Help,
    Quit,
}

/// A store bound to the catalog it sells from.
pub struct Session<'a> {
    catalog: &'a Catalog,
    store: Store,
    rates: ChargeRates,
}

impl<'a> Session<'a> {
    pub fn new(catalog: &'a Catalog, rates: ChargeRates) -> Self {
        Self {
            catalog,
            store: Store::for_catalog(catalog),
            rates,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Apply one command to the store.
    pub fn execute(&mut self, command: SessionCommand) -> Result<Outcome, CommerceError> {
        let outcome = match command {
            SessionCommand::Add { id, quantity, size } => {
                let product = self.catalog.require(id)?;
                self.store
                    .add_to_cart_checked(product, quantity, size.as_deref())?;
                let what = match &size {
                    Some(size) => format!("{} ({})", product.name, size),
                    None => product.name.clone(),
                };
                done(format!("Added {} x {} to cart", quantity, what))
            }
            SessionCommand::Remove(id) => {
                let product = self.catalog.require(id)?;
                if !self.store.is_in_cart(id) {
                    return Ok(unchanged(format!("{} is not in the cart", product.name)));
                }
                self.store.remove_from_cart(id);
                done(format!("Removed {} from cart", product.name))
            }
            SessionCommand::Quantity { id, quantity } => {
                let product = self.catalog.require(id)?;
                if !self.store.is_in_cart(id) {
                    return Ok(unchanged(format!("{} is not in the cart", product.name)));
                }
                self.store.update_cart_quantity(id, quantity);
                if quantity <= 0 {
                    done(format!("Removed {} from cart", product.name))
                } else {
                    done(format!("Set {} quantity to {}", product.name, quantity))
                }
            }
            SessionCommand::Wish(id) => {
                let product = self.catalog.require(id)?;
                if self.store.is_in_wishlist(id) {
                    return Ok(unchanged(format!("{} is already in the wishlist", product.name)));
                }
                self.store.add_to_wishlist(product);
                done(format!("Added {} to wishlist", product.name))
            }
            SessionCommand::Unwish(id) => {
                let product = self.catalog.require(id)?;
                if !self.store.is_in_wishlist(id) {
                    return Ok(unchanged(format!("{} is not in the wishlist", product.name)));
                }
                self.store.remove_from_wishlist(id);
                done(format!("Removed {} from wishlist", product.name))
            }
            SessionCommand::MoveToWishlist(id) => {
                let product = self.catalog.require(id)?;
                if !self.store.is_in_cart(id) {
                    return Ok(unchanged(format!("{} is not in the cart", product.name)));
                }
                self.store.move_to_wishlist(id);
                done(format!("Moved {} to wishlist", product.name))
            }
            SessionCommand::MoveToCart(id) => {
                let product = self.catalog.require(id)?;
                if !self.store.is_in_wishlist(id) {
                    return Ok(unchanged(format!("{} is not in the wishlist", product.name)));
                }
                self.store.move_to_cart(id);
                done(format!("Moved {} to cart", product.name))
            }
            SessionCommand::Cart => Outcome::Cart,
            SessionCommand::Wishlist => Outcome::Wishlist,
            SessionCommand::Summary => Outcome::Summary {
                summary: OrderSummary::for_store(&self.store, &self.rates),
            },
            SessionCommand::Checkout => Outcome::Placed {
                summary: self.store.checkout(&self.rates)?,
            },
            SessionCommand::Clear => {
                if self.store.is_cart_empty() {
                    return Ok(unchanged("Cart is already empty".to_string()));
                }
                self.store.clear_cart();
                done("Cart cleared".to_string())
            }
            SessionCommand::Help => Outcome::Help,
            SessionCommand::Quit => Outcome::Quit,
        };
        Ok(outcome)
    }
}

fn done(message: String) -> Outcome {
    Outcome::Done { message }
}

fn unchanged(message: String) -> Outcome {
    Outcome::Unchanged { message }
}

enum LineSource {
    Prompt,
    Reader(Box<dyn BufRead>),
}

impl LineSource {
    fn next_line(&mut self) -> Result<Option<String>> {
        match self {
            LineSource::Prompt => {
                let line: String = Input::new()
                    .with_prompt("rewear")
                    .allow_empty(true)
                    .interact_text()
                    .context("Failed to read command")?;
                Ok(Some(line))
            }
            LineSource::Reader(reader) => {
                let mut line = String::new();
                let read = reader.read_line(&mut line).context("Failed to read command")?;
                Ok((read > 0).then_some(line))
            }
        }
    }
}

/// Run the session command.
pub fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let mut session = Session::new(&catalog, ctx.config.charge_rates());

    let interactive = args.script.is_none() && ctx.output.is_interactive();
    let mut source = match &args.script {
        Some(path) => {
            let path = ctx.resolve_path(path);
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?;
            LineSource::Reader(Box::new(BufReader::new(file)))
        }
        None if interactive => LineSource::Prompt,
        None => LineSource::Reader(Box::new(BufReader::new(io::stdin()))),
    };

    tracing::info!(session = %session.store().session_id(), interactive, "session started");
    if interactive {
        ctx.output.header("Rewear session");
        ctx.output.info("Type 'help' for commands, 'quit' to leave.");
    }

    while let Some(line) = source.next_line()? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                report_error(&ctx.output, line, &e.to_string());
                continue;
            }
        };

        if command == SessionCommand::Clear
            && interactive
            && !args.yes
            && !session.store().is_cart_empty()
        {
            let confirmed = Confirm::new()
                .with_prompt("Remove everything from the cart?")
                .default(false)
                .interact()?;
            if !confirmed {
                ctx.output.warn("Clear cancelled");
                continue;
            }
        }

        match session.execute(command) {
            Ok(Outcome::Quit) => break,
            Ok(outcome) => show(&ctx.output, &session, line, &outcome),
            Err(e) => report_error(&ctx.output, line, &e.to_string()),
        }
    }

    tracing::info!(
        session = %session.store().session_id(),
        cart_items = session.store().cart_items_count(),
        "session ended"
    );
    Ok(())
}

fn report_error(output: &Output, line: &str, message: &str) {
    if output.is_json() {
        output.json(&json!({ "input": line, "error": message }));
    } else {
        output.warn(message);
    }
}

fn show(output: &Output, session: &Session<'_>, line: &str, outcome: &Outcome) {
    let store = session.store();
    if output.is_json() {
        output.json(&json!({
            "input": line,
            "result": outcome,
            "session": store.snapshot(),
        }));
        return;
    }

    match outcome {
        Outcome::Done { message } => {
            output.success(message);
            output.kv(
                "Cart",
                &format!("{} items, {}", store.cart_items_count(), store.cart_total()),
            );
        }
        Outcome::Unchanged { message } => output.info(message),
        Outcome::Cart => show_cart(output, store),
        Outcome::Wishlist => show_wishlist(output, store),
        Outcome::Summary { summary } => show_summary(output, "Order Summary", summary),
        Outcome::Placed { summary } => {
            show_summary(output, "Order Placed", summary);
            output.success("Thank you for shopping sustainably!");
        }
        Outcome::Help => {
            output.header("Commands");
            for &(usage, about) in HELP {
                output.table_row(&[usage, about], &[24, 40]);
            }
        }
        Outcome::Quit => {}
    }
}

fn show_cart(output: &Output, store: &Store) {
    output.header(&format!("Cart ({} items)", store.cart_items_count()));
    if store.is_cart_empty() {
        output.info("Your cart is empty");
        return;
    }
    for item in store.cart_items() {
        let product = item.product();
        let id = format!("#{}", product.id);
        let quantity = format!("x{}", item.quantity());
        let line_total = item.line_total().display();
        output.table_row(
            &[
                id.as_str(),
                product.name.as_str(),
                item.size().unwrap_or("-"),
                quantity.as_str(),
                line_total.as_str(),
            ],
            &[4, 34, 14, 5, 10],
        );
    }
    output.kv("Subtotal", &store.cart_total().display());
}

fn show_wishlist(output: &Output, store: &Store) {
    output.header(&format!("Wishlist ({})", store.wishlist_count()));
    if store.wishlist_items().is_empty() {
        output.info("Your wishlist is empty");
        return;
    }
    output.product_heading();
    for item in store.wishlist_items() {
        output.product_row(item.product());
    }
}

fn show_summary(output: &Output, title: &str, summary: &OrderSummary) {
    output.header(title);
    output.kv("Items", &summary.item_count.to_string());
    output.kv("Subtotal", &summary.subtotal.display());
    let shipping = if summary.has_free_shipping() {
        "Free".to_string()
    } else {
        summary.shipping.display()
    };
    output.kv("Shipping", &shipping);
    output.kv("Tax", &summary.tax.display());
    output.kv("Total", &summary.grand_total.display());
}
