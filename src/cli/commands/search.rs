use super::api_client;
use super::cart::print_cart;
use crate::cli::SearchArgs;
use crate::config::Config;
use crate::models::{Cart, Part, SearchCriteria, SearchForm};
use crate::results::{FavoriteChange, ResultsView};

pub async fn cmd_search(config: &Config, args: &SearchArgs) -> anyhow::Result<()> {
    let form = SearchForm {
        make: args.make.clone(),
        model: args.model.clone(),
        year: args.year.clone(),
        category: args.category.clone(),
        query: args.query.clone(),
    };

    let (criteria, parts) = api_client(config)?.search(&form).await?;
    show_results(criteria, parts, args);
    Ok(())
}

/// Applies the view flags to a fresh response and prints the requested page.
pub(super) fn show_results(criteria: SearchCriteria, parts: Vec<Part>, args: &SearchArgs) {
    let mut view = ResultsView::new(criteria, parts);

    println!("{}", view.heading());

    if view.is_empty() {
        println!("No parts found. Try adjusting your search criteria.");
        return;
    }

    view.set_filters(args.filters.to_filters());
    view.set_sort(args.sort);
    view.go_to_page(args.page);

    for id in &args.favorites {
        if view.find(*id).is_some() && view.toggle_favorite(*id) == FavoriteChange::Added {
            println!("♥ Saved part #{id} to favourites");
        }
    }

    let page = view.current_page();
    println!(
        "{} | Sort: {} | Filters active: {}",
        page.summary("parts"),
        view.sort_key().label(),
        view.filters().active_count()
    );
    println!("{:-<70}", "");

    if page.items.is_empty() {
        println!("No parts match the current filters.");
    }

    for part in page.items {
        print_part(part, view.is_favorite(part.id));
    }

    if page.total_pages > 1 {
        println!("{:-<70}", "");
        let mut nav = format!("Page {} of {}", page.page, page.total_pages);
        if page.has_previous() {
            nav.push_str(&format!(" | prev: --page {}", page.page - 1));
        }
        if page.has_next() {
            nav.push_str(&format!(" | next: --page {}", page.page + 1));
        }
        println!("{nav}");
    }

    if !args.add_to_cart.is_empty() {
        let mut cart = Cart::new();
        for id in &args.add_to_cart {
            match view.find(*id) {
                Some(part) if part.availability.can_purchase() => cart.add_part(part, 1),
                Some(part) => println!("✗ {} is {}", part.name, part.availability),
                None => println!("✗ No part #{id} in these results"),
            }
        }
        println!();
        print_cart(&cart);
    }
}

fn print_part(part: &Part, favorite: bool) {
    let marker = if favorite { "♥" } else { "•" };
    println!("{} #{} {}", marker, part.id, part.name);

    let mut price = format!("${:.2}", part.price);
    if let (Some(original), Some(saved)) = (part.original_price, part.discount()) {
        price.push_str(&format!(" (was ${original:.2}, save ${saved:.2})"));
    }

    let mut details = vec![
        part.part_number.clone(),
        part.brand.clone(),
        price,
        part.availability.to_string(),
        format!("{:.1}★ ({})", part.rating_or_zero(), part.review_count),
    ];
    if part.is_oem {
        details.push("OEM".to_string());
    }
    if let Some(warranty) = &part.warranty {
        details.push(format!("{warranty} warranty"));
    }
    if part.ships_free() {
        details.push("Free shipping".to_string());
    }

    println!("  {}", details.join(" | "));
}
