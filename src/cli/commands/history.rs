use super::api_client;
use super::search::show_results;
use crate::cli::SearchArgs;
use crate::config::Config;

pub async fn cmd_history(
    config: &Config,
    user: Option<i32>,
    repeat: Option<usize>,
) -> anyhow::Result<()> {
    let client = api_client(config)?;
    let user_id = user.unwrap_or_else(|| client.user_id());
    let entries = client.history(user_id).await?;

    if entries.is_empty() {
        println!("No search history yet.");
        println!();
        println!("Search with: partfinder search --make Toyota --model Camry --year 2020 --category \"Brake System\"");
        return Ok(());
    }

    if let Some(index) = repeat {
        let entry = index
            .checked_sub(1)
            .and_then(|i| entries.get(i))
            .ok_or_else(|| {
                anyhow::anyhow!("No history entry {index} (1-{} available)", entries.len())
            })?;

        println!("Repeating: {}", entry.vehicle_label());
        let (criteria, parts) = client.repeat_search(entry).await?;
        show_results(criteria, parts, &SearchArgs::default());
        return Ok(());
    }

    println!("Recent Searches ({}):", entries.len());
    println!("{:-<70}", "");

    for (i, entry) in entries.iter().enumerate() {
        let category = entry.part_category.as_deref().unwrap_or("Any category");
        println!("{:>2}. {} - {}", i + 1, entry.vehicle_label(), category);

        let mut line = format!("    {}", entry.created_at);
        if let Some(query) = &entry.search_query {
            line.push_str(&format!(" | \"{query}\""));
        }
        println!("{line}");
    }

    println!();
    println!("Repeat one with: partfinder history --repeat <n>");

    Ok(())
}
