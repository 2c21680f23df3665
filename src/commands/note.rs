use anyhow::Result;
use daybook_core::config::DaybookConfig;
use daybook_core::note::{Note, MOODS, TEMPLATES};
use daybook_core::store::Commit;
use owo_colors::OwoColorize;

pub fn set(
    config: &DaybookConfig,
    date: Option<&str>,
    text: String,
    mood: Option<&str>,
) -> Result<()> {
    let key = super::resolve_date(date)?;

    let note = match mood {
        Some(mood) => {
            if !MOODS.iter().any(|(emoji, _)| *emoji == mood) {
                let palette: Vec<String> = MOODS
                    .iter()
                    .map(|(emoji, label)| format!("{} {}", emoji, label))
                    .collect();
                anyhow::bail!("Unknown mood '{}'. Choose one of: {}", mood, palette.join(", "));
            }
            Note::with_mood(mood, &text)
        }
        None => Note::new(text),
    };

    let mut notes = super::open_notes(config);
    match notes.put(key, note)? {
        Commit::Clean => println!("Saved note for {}", key.to_string().bold()),
        Commit::Evicted(evicted) => {
            println!("Saved note for {}", key.to_string().bold());
            println!(
                "{}",
                format!(
                    "Storage was full. Oldest entries were removed automatically: {}",
                    evicted
                        .iter()
                        .map(|k| k.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
                .yellow()
            );
        }
    }
    Ok(())
}

pub fn show(config: &DaybookConfig, date: Option<&str>) -> Result<()> {
    let key = super::resolve_date(date)?;
    let notes = super::open_notes(config);

    match notes.get(&key) {
        Some(note) => {
            let mood = note.mood().map(|m| format!("{} ", m)).unwrap_or_default();
            println!("{} {}", key.to_string().bold(), mood);
            println!("{}", note.body());
            println!("{}", format!("({} words)", note.word_count()).dimmed());
        }
        None => println!("{}", format!("No note for {}", key).dimmed()),
    }
    Ok(())
}

pub fn rm(config: &DaybookConfig, date: Option<&str>) -> Result<()> {
    let key = super::resolve_date(date)?;
    let mut notes = super::open_notes(config);
    notes.remove(&key)?;
    println!("Removed note for {}", key.to_string().bold());
    Ok(())
}

pub fn templates() -> Result<()> {
    for template in &TEMPLATES {
        println!("{} {} {}", template.icon, template.name.bold(), format!("({})", template.id).dimmed());
        for line in template.template.lines().filter(|l| !l.trim().is_empty()) {
            println!("   {}", line.dimmed());
        }
        println!();
    }
    Ok(())
}
