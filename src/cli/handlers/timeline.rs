use anyhow::Result;
use colored::Colorize;

use crate::cli::TimelineAction;
use crate::model::{InsertTimelineEvent, TimelineEvent, is_known_icon};

use super::utils::{format_month, icon_glyph, print_json};
use super::{CommandContext, runtime};

pub fn handle_timeline(ctx: &CommandContext, action: TimelineAction) -> Result<()> {
    let client = ctx.client()?;
    let rt = runtime()?;

    match action {
        TimelineAction::List { json } => {
            let events = rt.block_on(client.timeline())?;
            if json {
                print_json(&events)
            } else {
                print_timeline(&events);
                Ok(())
            }
        }
        TimelineAction::Add {
            title,
            description,
            date,
            icon,
            json,
        } => {
            let mut insert = InsertTimelineEvent::new(title, description, date);
            if let Some(icon) = icon {
                insert = insert.with_icon(icon);
            }
            let event = rt.block_on(client.create_timeline_event(&insert))?;
            if json {
                print_json(&event)
            } else {
                println!(
                    "{} milestone {} {}",
                    "Saved".green(),
                    event.id.to_string().cyan(),
                    event.title
                );
                if !is_known_icon(&event.icon) {
                    let notice =
                        format!("icon '{}' has no glyph and is shown as a heart", event.icon);
                    println!("  {}", notice.dimmed());
                }
                Ok(())
            }
        }
    }
}

fn print_timeline(events: &[TimelineEvent]) {
    if events.is_empty() {
        println!("No milestones yet.");
        return;
    }

    for event in events {
        println!(
            "{} {} {}",
            icon_glyph(&event.icon).red(),
            format_month(&event.date).blue(),
            event.title.bold()
        );
        println!("    {}", event.description);
    }
}
