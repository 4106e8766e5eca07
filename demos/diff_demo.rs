//! Example showing a word diff of two instruction versions
//!
//! Run with: cargo run --example diff_demo

use word_diff::config::Config;
use word_diff::diff::{DiffChunk, calculate_stats, group_into_chunks};
use word_diff::render::{render_plain, render_stats};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Word Diff Demo ===\n");

    let original = "You are a helpful assistant. Answer in three sentences.";
    let updated = "You are a concise assistant. Answer in two sentences and cite sources.";

    let config = Config::load()?;
    let tokens = word_diff::compute_word_diff(original, updated);

    println!("Original: {}", original);
    println!("Updated:  {}", updated);
    println!("\nInline:   {}", render_plain(&tokens, &config.settings.markers));

    println!("\nChunks:");
    for chunk in group_into_chunks(&tokens) {
        match chunk {
            DiffChunk::Same { words } => println!("  = {}", words.join(" ")),
            DiffChunk::Replace { removed, added } => {
                println!("  - {}", removed.join(" "));
                println!("  + {}", added.join(" "));
            }
        }
    }

    println!("\n{}", render_stats(&calculate_stats(&tokens)));
    println!("\nConfig file: {}", Config::config_path()?.display());

    Ok(())
}
