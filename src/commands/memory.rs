use std::path::Path;

use anyhow::Result;
use daybook_core::config::DaybookConfig;
use daybook_core::error::DaybookError;
use daybook_core::image::{compress_image, CompressOptions};
use daybook_core::memory::Memory;
use daybook_core::store::Commit;
use owo_colors::OwoColorize;

pub fn set(
    config: &DaybookConfig,
    date: Option<&str>,
    file: &Path,
    caption: Option<String>,
) -> Result<()> {
    let key = super::resolve_date(date)?;

    // Compress before anything touches the store; a bad file changes nothing.
    let bytes = std::fs::read(file)?;
    let compressed = compress_image(&bytes, &CompressOptions::default())?;
    let memory = Memory::new(compressed.data_uri, caption);

    let mut memories = super::open_memories(config);
    match memories.put(key, memory) {
        Ok(Commit::Clean) => {
            println!(
                "Stored picture for {} ({}x{})",
                key.to_string().bold(),
                compressed.width,
                compressed.height
            );
        }
        Ok(Commit::Evicted(evicted)) => {
            println!("Stored picture for {}", key.to_string().bold());
            println!(
                "{}",
                format!(
                    "Storage was full. Oldest pictures were removed automatically: {}",
                    evicted
                        .iter()
                        .map(|k| k.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
                .yellow()
            );
        }
        Err(DaybookError::StorageFull(_)) => {
            // Terminal capacity failure is a warning, not a crash
            println!(
                "{}",
                "Not enough storage for more pictures. Please delete some.".red()
            );
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

pub fn show(config: &DaybookConfig, date: Option<&str>) -> Result<()> {
    let key = super::resolve_date(date)?;
    let memories = super::open_memories(config);

    match memories.get(&key) {
        Some(memory) => {
            println!("{}", key.to_string().bold());
            if let Some(caption) = &memory.caption {
                println!("{}", caption);
            }
            println!(
                "{}",
                format!("{} KiB stored", memory.size_bytes() / 1024).dimmed()
            );
        }
        None => println!("{}", format!("No picture for {}", key).dimmed()),
    }
    Ok(())
}

pub fn rm(config: &DaybookConfig, date: Option<&str>) -> Result<()> {
    let key = super::resolve_date(date)?;
    let mut memories = super::open_memories(config);
    memories.remove(&key)?;
    println!("Removed picture for {}", key.to_string().bold());
    Ok(())
}

pub fn list(config: &DaybookConfig) -> Result<()> {
    let memories = super::open_memories(config);

    if memories.is_empty() {
        println!("{}", "No pictures stored".dimmed());
        return Ok(());
    }

    println!("{}", format!("Memories ({})", memories.len()).bold());
    // Newest first
    for (key, memory) in memories.iter().collect::<Vec<_>>().into_iter().rev() {
        let caption = memory.caption.as_deref().unwrap_or("(no caption)");
        println!(
            "  {} {} {}",
            key,
            caption,
            format!("{} KiB", memory.size_bytes() / 1024).dimmed()
        );
    }
    Ok(())
}
