use crate::models::Note;

use chrono::{DateTime, Utc};

/// Renders the full index page for the given notes, newest first.
pub fn index(notes: &[Note]) -> String {
    let body = if notes.is_empty() {
        r#"<p class="empty">No notes yet.</p>"#.to_string()
    } else {
        notes.iter().map(note_card).collect::<Vec<_>>().join("\n")
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Notes</title>
<style>
body {{ max-width: 40rem; margin: 2rem auto; font-family: sans-serif; }}
textarea {{ width: 100%; box-sizing: border-box; }}
article.note {{ border-bottom: 1px solid #ddd; padding: 1rem 0; }}
p.meta {{ color: #666; font-size: 0.8rem; }}
</style>
</head>
<body>
<h1>Notes</h1>
<form method="post" action="/notes">
<textarea name="content" rows="3" placeholder="Write a note..." required></textarea>
<button type="submit">Add note</button>
</form>
{body}
</body>
</html>
"#
    )
}

fn note_card(note: &Note) -> String {
    let content = escape_html(&note.content);
    format!(
        r#"<article class="note">
<p>{content}</p>
<p class="meta">created {created} &middot; updated {updated}</p>
<form method="post" action="/notes/{id}/update">
<textarea name="content" rows="3" required>{content}</textarea>
<button type="submit">Save</button>
</form>
<form method="post" action="/notes/{id}/delete">
<button type="submit">Delete</button>
</form>
</article>"#,
        id = note.id,
        created = format_timestamp(note.created_at),
        updated = format_timestamp(note.updated_at),
    )
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}

/// Note content is user input; everything interpolated into markup goes
/// through here.
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: i64, content: &str) -> Note {
        let now = Utc::now();
        Note {
            id,
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn escape_html_replaces_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>&"'</b>"#),
            "&lt;b&gt;&amp;&quot;&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn index_escapes_note_content() {
        let page = index(&[note(1, "<script>alert(1)</script>")]);

        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!page.contains("<script>alert(1)</script>"));
    }

    #[test]
    fn index_links_update_and_delete_forms_to_note_id() {
        let page = index(&[note(7, "hello")]);

        assert!(page.contains(r#"action="/notes/7/update""#));
        assert!(page.contains(r#"action="/notes/7/delete""#));
    }

    #[test]
    fn index_without_notes_shows_empty_state() {
        let page = index(&[]);

        assert!(page.contains("No notes yet."));
        assert!(page.contains(r#"action="/notes""#));
    }
}
