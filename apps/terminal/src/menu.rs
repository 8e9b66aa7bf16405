//! # Menus and Screens
//!
//! The interactive flow: main menu, inventory management, point of sale.
//!
//! ## Screen Map
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                         Screen Map                             │
//! │                                                                │
//! │  System Menu                                                   │
//! │  ├── 1. Inventory Management                                   │
//! │  │      ├── 1. Add Product                                     │
//! │  │      ├── 2. View Products                                   │
//! │  │      ├── 3. Edit Product                                    │
//! │  │      ├── 4. Delete Product                                  │
//! │  │      └── 5. Back to Main Menu                               │
//! │  ├── 2. Point of Sale (POS)                                    │
//! │  │      ├── select product + quantity, repeat or cart full     │
//! │  │      └── receipt ──► payment (retry on shortfall) ──► change│
//! │  └── 3. Exit                                                   │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every core rejection is printed and the operator re-prompted; nothing
//! here terminates the program except Exit and a closed stdin.

use std::io;

use tracing::{debug, info, warn};

use bodega_core::{Catalog, CheckoutError, CheckoutSession, ProductDraft, Receipt};

use crate::input;

/// Runs the main menu loop until the operator exits.
pub fn run(catalog: &mut Catalog) -> io::Result<()> {
    loop {
        input::clear_screen();
        println!("\nSystem Menu");
        println!("1. Inventory Management");
        println!("2. Point of Sale (POS)");
        println!("3. Exit");

        match input::prompt_usize("Enter your choice: ")? {
            1 => inventory_menu(catalog)?,
            2 => pos_session(catalog)?,
            3 => {
                println!("Exiting the system...");
                return Ok(());
            }
            other => {
                debug!(choice = other, "Unknown main menu choice");
                println!("Invalid choice! Please enter a valid option.");
                input::pause("Press Enter to continue...")?;
            }
        }
    }
}

// =============================================================================
// Inventory Management
// =============================================================================

fn inventory_menu(catalog: &mut Catalog) -> io::Result<()> {
    loop {
        input::clear_screen();
        println!("\nInventory Management System");
        println!("1. Add Product");
        println!("2. View Products");
        println!("3. Edit Product");
        println!("4. Delete Product");
        println!("5. Back to Main Menu");

        match input::prompt_usize("Enter your choice: ")? {
            1 => add_product(catalog)?,
            2 => view_products(catalog)?,
            3 => edit_product(catalog)?,
            4 => delete_product(catalog)?,
            5 => {
                println!("Returning to Main Menu...");
                return Ok(());
            }
            _ => {
                println!("Invalid choice! Please enter a valid option.");
                input::pause("Press Enter to continue...")?;
            }
        }
    }
}

/// Prompts for a product draft: name, stock level, unit price.
fn prompt_draft(name_prompt: &str, qty_prompt: &str, price_prompt: &str) -> io::Result<ProductDraft> {
    let name = input::prompt_nonempty(name_prompt)?;
    let quantity = input::prompt_i64(qty_prompt)?;
    let price = input::prompt_money(price_prompt)?;
    Ok(ProductDraft::new(name, quantity, price))
}

fn add_product(catalog: &mut Catalog) -> io::Result<()> {
    if catalog.is_full() {
        println!("Inventory is full! Cannot add more products.");
        return input::pause("Press Enter to continue...");
    }

    let draft = prompt_draft("Enter product name: ", "Enter quantity: ", "Enter price: ")?;
    match catalog.add(draft) {
        Ok(product) => {
            info!(name = %product.name, id = %product.id, "Product added");
            println!("Product added successfully!");
        }
        Err(err) => {
            warn!(%err, "Add rejected");
            println!("Could not add product: {err}");
        }
    }
    input::pause("Press Enter to continue...")
}

fn view_products(catalog: &Catalog) -> io::Result<()> {
    if catalog.is_empty() {
        println!("No products in the inventory.");
    } else {
        println!("\nInventory List:");
        for (number, product) in catalog.products().iter().enumerate() {
            println!(
                "{}. Name: {}, Quantity: {}, Price: {}",
                number + 1,
                product.name,
                product.quantity,
                product.price()
            );
        }
    }
    input::pause("\nPress Enter to return to the inventory menu...")
}

fn edit_product(catalog: &mut Catalog) -> io::Result<()> {
    if catalog.is_empty() {
        println!("No products in the inventory.");
        return input::pause("Press Enter to continue...");
    }

    let index = input::prompt_usize("Enter the product number to edit: ")?;
    let current = match catalog.get(index) {
        Ok(product) => product,
        Err(err) => {
            println!("{err}");
            return input::pause("Press Enter to continue...");
        }
    };

    let draft = prompt_draft(
        &format!("Enter new name (current: {}): ", current.name),
        &format!("Enter new quantity (current: {}): ", current.quantity),
        &format!("Enter new price (current: {}): ", current.price()),
    )?;

    match catalog.edit(index, draft) {
        Ok(product) => {
            info!(name = %product.name, id = %product.id, "Product updated");
            println!("Product updated successfully!");
        }
        Err(err) => {
            warn!(%err, "Edit rejected");
            println!("Could not update product: {err}");
        }
    }
    input::pause("Press Enter to continue...")
}

fn delete_product(catalog: &mut Catalog) -> io::Result<()> {
    if catalog.is_empty() {
        println!("No products in the inventory.");
        return input::pause("Press Enter to continue...");
    }

    let index = input::prompt_usize("Enter the product number to delete: ")?;
    match catalog.delete(index) {
        Ok(product) => {
            info!(name = %product.name, id = %product.id, "Product deleted");
            println!("Product deleted successfully!");
        }
        Err(err) => {
            warn!(%err, "Delete rejected");
            println!("{err}");
        }
    }
    input::pause("Press Enter to continue...")
}

// =============================================================================
// Point of Sale
// =============================================================================

/// One full checkout: selection loop, receipt, payment, change.
///
/// The session (and its cart) lives only inside this function; a new sale
/// starts from an empty cart.
fn pos_session(catalog: &mut Catalog) -> io::Result<()> {
    input::clear_screen();
    println!("Welcome to the POS system!");

    if catalog.is_empty() {
        println!("No products are available for sale.");
        return input::pause("Press Enter to return to the main menu...");
    }

    let mut session = CheckoutSession::new();

    loop {
        display_products(catalog);

        let index = input::prompt_usize("Enter the number of the item to purchase: ")?;
        let quantity = input::prompt_i64("Enter quantity to purchase: ")?;

        match session.select_and_purchase(catalog, index, quantity) {
            Ok(added) => {
                // added is non-empty on success; all entries share one name
                let name = &added[0].name;
                info!(name = %name, quantity, "Added to cart");
                println!("{quantity} {name}(s) added to the cart.");
            }
            Err(err) => {
                debug!(%err, "Purchase rejected");
                println!("{err}");
            }
        }

        if session.is_full() {
            println!("The cart is full.");
            break;
        }
        if !input::prompt_yes_no("Do you want to purchase another item? (y/n): ")? {
            break;
        }
    }

    let receipt = session.build_receipt();
    render_receipt(&receipt);

    if !receipt.is_empty() {
        settle(&receipt)?;
    }

    println!("Thank you for shopping with us!");
    input::pause("\nPress Enter to return to the main menu...")
}

fn display_products(catalog: &Catalog) {
    println!("Available Products:");
    for (number, product) in catalog.products().iter().enumerate() {
        println!(
            "{}. {} - {} (Stock: {})",
            number + 1,
            product.name,
            product.price(),
            product.quantity
        );
    }
}

/// One receipt line per purchased unit, then the subtotal.
fn render_receipt(receipt: &Receipt) {
    println!("\nReceipt:");
    for line in &receipt.lines {
        println!("{} - {}", line.name, line.price());
    }
    println!("\nSubtotal: {}", receipt.subtotal());
}

/// Prompts for payment until it covers the subtotal or the operator gives
/// up. A shortfall does not abandon the sale outright: the operator may
/// retry with a new amount.
fn settle(receipt: &Receipt) -> io::Result<()> {
    loop {
        let tendered = input::prompt_money("Enter payment amount: ")?;

        match CheckoutSession::settle_payment(receipt.subtotal(), tendered) {
            Ok(settlement) => {
                info!(
                    subtotal = settlement.subtotal.cents(),
                    tendered = settlement.tendered.cents(),
                    change = settlement.change.cents(),
                    "Sale settled"
                );
                println!("Total: {}", settlement.subtotal);
                println!("Payment: {}", settlement.tendered);
                println!("Change: {}", settlement.change);
                return Ok(());
            }
            Err(err @ CheckoutError::InsufficientPayment { .. }) => {
                warn!(%err, "Payment rejected");
                println!("Insufficient payment. Transaction cannot be completed.");
                if !input::prompt_yes_no("Try another amount? (y/n): ")? {
                    println!("Sale abandoned; no payment was taken.");
                    return Ok(());
                }
            }
            Err(err) => {
                // settle_payment only reports payment errors today; anything
                // else would be a new core variant worth surfacing loudly
                warn!(%err, "Unexpected settlement rejection");
                println!("{err}");
                return Ok(());
            }
        }
    }
}
