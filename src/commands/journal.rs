use anyhow::Result;
use daybook_core::config::DaybookConfig;
use owo_colors::OwoColorize;

pub fn run(config: &DaybookConfig) -> Result<()> {
    let notes = super::open_notes(config);

    if notes.is_empty() {
        println!("{}", "No journal entries yet".dimmed());
        return Ok(());
    }

    println!("{}", format!("Journal ({})", notes.len()).bold());
    // Newest first
    for (key, note) in notes.iter().collect::<Vec<_>>().into_iter().rev() {
        let mood = note.mood().map(|m| format!(" {}", m)).unwrap_or_default();
        println!(
            "  {}{} {}",
            key.to_string().bold(),
            mood,
            format!("({} words)", note.word_count()).dimmed()
        );
        let preview = note.body().lines().next().unwrap_or("");
        if !preview.is_empty() {
            println!("    {}", preview);
        }
    }
    Ok(())
}
