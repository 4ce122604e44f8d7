use anyhow::Result;
use colored::Colorize;

use crate::cli::NoteAction;
use crate::model::{InsertLoveNote, LoveNote};

use super::utils::{format_moment, print_json};
use super::{CommandContext, runtime};

pub fn handle_notes(ctx: &CommandContext, action: NoteAction) -> Result<()> {
    let client = ctx.client()?;
    let rt = runtime()?;

    match action {
        NoteAction::List { json } => {
            let notes = rt.block_on(client.love_notes())?;
            if json {
                print_json(&notes)
            } else {
                print_note_list(&notes);
                Ok(())
            }
        }
        NoteAction::Add {
            content,
            author,
            json,
        } => {
            let mut insert = InsertLoveNote::new(content);
            if let Some(author) = author {
                insert = insert.with_author(author);
            }
            let note = rt.block_on(client.create_love_note(&insert))?;
            if json {
                print_json(&note)
            } else {
                println!(
                    "{} note {} added to the jar",
                    "Saved".green(),
                    note.id.to_string().cyan()
                );
                Ok(())
            }
        }
    }
}

fn print_note_list(notes: &[LoveNote]) {
    if notes.is_empty() {
        println!("The jar is empty.");
        return;
    }

    for note in notes {
        println!("{} \"{}\"", note.id.to_string().cyan(), note.content);
        println!(
            "    - {} {}",
            note.author.magenta(),
            format_moment(&note.created_at).dimmed()
        );
    }
}
