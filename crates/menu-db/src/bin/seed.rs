//! # Seed Data Generator
//!
//! Populates the database with a small sample menu and a few offers for
//! development.
//!
//! ## Usage
//! ```bash
//! # Seed ./menu_dev.db
//! cargo run -p menu-db --bin seed
//!
//! # Specify database path
//! cargo run -p menu-db --bin seed -- --db ./data/menu.db
//! ```
//!
//! Offer windows are placed relative to today: one running, one expired,
//! one upcoming, so every branch of the active-offer logic has data.

use chrono::{Duration, Local};
use menu_core::{FoodItem, FoodKind, Money, Offer};
use menu_db::{Database, DbConfig};
use std::env;

/// (name, price in cents, calories)
const MEALS: &[(&str, i64, i32)] = &[
    ("Margherita Pizza", 1050, 800),
    ("Cheeseburger", 899, 650),
    ("Caesar Salad", 725, 350),
    ("Tomato Soup", 500, 220),
    ("Club Sandwich", 850, 540),
];

/// (name, price in cents, volume in ml)
const DRINKS: &[(&str, i64, i32)] = &[
    ("Cola", 250, 330),
    ("Sparkling Water", 150, 500),
    ("Orange Juice", 325, 250),
    ("Iced Tea", 275, 400),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./menu_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Menu Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./menu_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Menu Seed Data Generator");
    println!("========================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.food_items().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} food items", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let mut saved = Vec::new();
    for (name, cents, calories) in MEALS {
        let item = FoodItem::meal(*name, Money::from_cents(*cents)).with_kind(FoodKind::Meal {
            calories: Some(*calories),
        });
        saved.push(db.food_items().save(&item).await?);
    }
    for (name, cents, volume_ml) in DRINKS {
        let item = FoodItem::drink(*name, Money::from_cents(*cents)).with_kind(FoodKind::Drink {
            volume_ml: Some(*volume_ml),
        });
        saved.push(db.food_items().save(&item).await?);
    }
    println!("✓ Inserted {} food items", saved.len());

    let today = Local::now().date_naive();
    let windows = [
        (20.0, "Lunch special", today - Duration::days(7), today + Duration::days(7)),
        (50.0, "Last month's promo", today - Duration::days(40), today - Duration::days(10)),
        (15.0, "Coming soon", today + Duration::days(3), today + Duration::days(30)),
    ];

    let mut offers = 0;
    for (item, (pct, description, start, end)) in saved.iter().zip(windows.iter()) {
        let offer = Offer::new(item.id, *pct, Some(description.to_string()), *start, *end);
        db.offers().save(&offer).await?;
        offers += 1;
    }
    println!("✓ Inserted {} offers", offers);

    let active = db.offers().find_active_offers(today).await?;
    println!("  Active today: {}", active.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
