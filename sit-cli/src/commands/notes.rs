use super::{
    confirm, edit_buffer, report_load_warning, require_saved, resolve_editor, short_id, split_note,
};
use crate::cli::NotesAction;
use crate::render::Renderer;
use anyhow::Result;
use sit_core::{Config, Notes};

pub fn run(action: Option<NotesAction>, config: &Config, renderer: &Renderer) -> Result<()> {
    let (mut notes, warning) = Notes::open(config);
    report_load_warning(renderer, &warning);
    match action {
        None => list(&notes, renderer),
        Some(NotesAction::Add { text }) => add(&mut notes, text, config, renderer),
        Some(NotesAction::Edit { id, title, content }) => edit(
            &mut notes,
            &id,
            title.as_deref(),
            content.as_deref(),
            config,
            renderer,
        ),
        Some(NotesAction::Delete { id, yes }) => delete(&mut notes, &id, yes, renderer),
    }
}

fn list(notes: &Notes, renderer: &Renderer) -> Result<()> {
    if notes.all().is_empty() {
        renderer.print_info("No notes yet. `sit notes add` writes the first one.");
        return Ok(());
    }
    for (i, note) in notes.all().iter().enumerate() {
        let mut md = format!("## {} `{}`\n", note.title, short_id(&note.id));
        let content = note.content.trim();
        if !content.is_empty() {
            md.push_str(content);
            md.push('\n');
        }
        md.push_str(&format!("*{}*\n", renderer.format_timestamp(note.updated_at)));
        renderer.print_md(&md);
        if i + 1 < notes.all().len() {
            renderer.print_md("---\n");
        }
    }
    Ok(())
}

fn add(notes: &mut Notes, text: Vec<String>, config: &Config, renderer: &Renderer) -> Result<()> {
    let text = if text.is_empty() {
        let editor = resolve_editor(config);
        edit_buffer(&editor, "")?
    } else {
        text.join(" ")
    };
    if text.trim().is_empty() {
        renderer.print_info("No note to save, because no text was received.");
        return Ok(());
    }
    let (title, content) = split_note(&text);
    let committed = notes.add(title, content);
    require_saved(committed.warning)?;
    renderer.print_info(&format!(
        "Added note '{}' ({})",
        committed.value.title,
        short_id(&committed.value.id)
    ));
    Ok(())
}

fn edit(
    notes: &mut Notes,
    id: &str,
    title: Option<&str>,
    content: Option<&str>,
    config: &Config,
    renderer: &Renderer,
) -> Result<()> {
    let committed = if title.is_none() && content.is_none() {
        let current = notes.find(id)?;
        let seed = if current.content.is_empty() {
            format!("{}\n", current.title)
        } else {
            format!("{}\n{}\n", current.title, current.content)
        };
        let editor = resolve_editor(config);
        let text = edit_buffer(&editor, &seed)?;
        if text.trim().is_empty() {
            renderer.print_info("Nothing changed, because the buffer came back empty.");
            return Ok(());
        }
        let (title, content) = split_note(&text);
        notes.update(id, Some(title), Some(content))?
    } else {
        notes.update(id, title, content)?
    };
    require_saved(committed.warning)?;
    renderer.print_info(&format!("Updated note '{}'", committed.value.title));
    Ok(())
}

fn delete(notes: &mut Notes, id: &str, yes: bool, renderer: &Renderer) -> Result<()> {
    let title = notes.find(id)?.title.clone();
    if !yes && !confirm(&format!("Delete note '{title}'?"))? {
        renderer.print_info("Nothing deleted.");
        return Ok(());
    }
    let committed = notes.remove(id)?;
    require_saved(committed.warning)?;
    renderer.print_info(&format!("Deleted note '{}'", committed.value.title));
    Ok(())
}
