//! CLI module - Command-line interface for PartFinder
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Args, Parser, Subcommand};

use crate::models::Availability;
use crate::results::{PartFilters, SortKey};

/// PartFinder - Auto parts search by vehicle
#[derive(Parser)]
#[command(name = "partfinder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API until Ctrl+C
    #[command(alias = "daemon")]
    Serve,

    /// Check that the API is reachable
    Health,

    /// List vehicle makes
    Makes,

    /// List models for a make
    Models {
        /// Vehicle make, e.g. Toyota
        make: String,
    },

    /// Search parts for a vehicle
    #[command(alias = "s")]
    Search(SearchArgs),

    /// Show recent searches
    #[command(alias = "h")]
    History {
        /// User whose history to show (defaults to client.user_id)
        #[arg(long)]
        user: Option<i32>,

        /// Re-run the Nth listed search (1 = newest)
        #[arg(long)]
        repeat: Option<usize>,
    },

    /// Show the demo cart with totals
    Cart(CartArgs),

    /// List part categories
    Categories,

    /// List selectable model years
    Years,

    /// Create default config file
    Init,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    #[arg(long, default_value = "")]
    pub make: String,

    #[arg(long, default_value = "")]
    pub model: String,

    #[arg(long, default_value = "")]
    pub year: String,

    #[arg(long, default_value = "")]
    pub category: String,

    /// Free-text refinement
    #[arg(long, default_value = "")]
    pub query: String,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// relevance, price-low, price-high, rating or name
    #[arg(long, default_value = "relevance")]
    pub sort: SortKey,

    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Mark a part id as favourite (repeatable)
    #[arg(long = "favorite")]
    pub favorites: Vec<u32>,

    /// Add a part id to the cart and show totals (repeatable)
    #[arg(long = "add")]
    pub add_to_cart: Vec<u32>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only these brands (repeatable)
    #[arg(long = "brand")]
    pub brands: Vec<String>,

    /// in-stock, limited-stock or out-of-stock (repeatable)
    #[arg(long = "availability", value_parser = parse_availability)]
    pub availability: Vec<Availability>,

    #[arg(long)]
    pub min_price: Option<f64>,

    #[arg(long)]
    pub max_price: Option<f64>,

    #[arg(long)]
    pub min_rating: Option<f64>,

    #[arg(long)]
    pub oem: bool,

    #[arg(long)]
    pub warranty: bool,

    #[arg(long)]
    pub free_shipping: bool,
}

impl FilterArgs {
    #[must_use]
    pub fn to_filters(&self) -> PartFilters {
        let defaults = PartFilters::default();
        let mut availability: Vec<Availability> = Vec::new();
        for value in &self.availability {
            if !availability.contains(value) {
                availability.push(*value);
            }
        }

        PartFilters {
            price_range: (
                self.min_price.unwrap_or(defaults.price_range.0),
                self.max_price.unwrap_or(defaults.price_range.1),
            ),
            min_rating: self.min_rating.unwrap_or(0.0),
            oem_only: self.oem,
            warranty_only: self.warranty,
            free_shipping_only: self.free_shipping,
            brands: self.brands.iter().cloned().collect(),
            availability,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct CartArgs {
    /// Increase quantity by one (repeatable)
    #[arg(long)]
    pub increment: Vec<u32>,

    /// Decrease quantity by one; zero removes the row (repeatable)
    #[arg(long)]
    pub decrement: Vec<u32>,

    /// Remove a row (repeatable)
    #[arg(long)]
    pub remove: Vec<u32>,

    /// Empty the cart
    #[arg(long)]
    pub clear: bool,
}

fn parse_availability(value: &str) -> Result<Availability, String> {
    Availability::parse(value).ok_or_else(|| {
        format!("unknown availability '{value}' (expected in-stock, limited-stock or out-of-stock)")
    })
}

pub use commands::*;
