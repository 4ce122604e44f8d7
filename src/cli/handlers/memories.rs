use anyhow::Result;
use colored::Colorize;

use crate::cli::MemoryAction;
use crate::model::{InsertMemory, Memory};

use super::utils::{format_day, print_json};
use super::{CommandContext, runtime};

pub fn handle_memories(ctx: &CommandContext, action: MemoryAction) -> Result<()> {
    let client = ctx.client()?;
    let rt = runtime()?;

    match action {
        MemoryAction::List { json } => {
            let memories = rt.block_on(client.memories())?;
            if json {
                print_json(&memories)
            } else {
                print_memory_list(&memories);
                Ok(())
            }
        }
        MemoryAction::Add {
            title,
            description,
            image_url,
            date,
            json,
        } => {
            let insert = InsertMemory::new(title, description, image_url, date);
            let memory = rt.block_on(client.create_memory(&insert))?;
            if json {
                print_json(&memory)
            } else {
                println!(
                    "{} memory {} {}",
                    "Saved".green(),
                    memory.id.to_string().cyan(),
                    memory.title
                );
                Ok(())
            }
        }
    }
}

fn print_memory_list(memories: &[Memory]) {
    if memories.is_empty() {
        println!("No memories yet.");
        return;
    }

    for memory in memories {
        println!(
            "{} {} {}",
            memory.id.to_string().cyan(),
            format_day(&memory.date).blue(),
            memory.title.bold()
        );
        println!("    {}", memory.description);
        println!("    {}", memory.image_url.dimmed());
    }
}
