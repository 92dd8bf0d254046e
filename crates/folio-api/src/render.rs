//! Server-side HTML for the portfolio pages.

use std::fmt::Write;

use chrono::{Datelike, Utc};
use folio_types::models::{Message, Project};
use folio_types::time;

use crate::notice::Notice;

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-slate-950 text-slate-100">
<nav class="max-w-5xl mx-auto flex gap-6 p-6">
<a href="/">Home</a>
<a href="/#projects">Projects</a>
<a href="/#contact">Contact</a>
<a href="/messages">Messages</a>
</nav>
<main class="max-w-5xl mx-auto p-6">
{body}
</main>
<footer class="max-w-5xl mx-auto p-6 text-sm text-slate-400">&copy; {year} All rights reserved.</footer>
<script src="/static/js/main.js" defer></script>
</body>
</html>
"#,
        title = escape(title),
        body = body,
        year = Utc::now().year(),
    )
}

fn notice_banner(notice: Notice) -> String {
    format!(
        r#"<div class="notice notice-{}" role="status">{}</div>"#,
        notice.category(),
        escape(notice.text())
    )
}

fn project_card(out: &mut String, project: &Project) {
    out.push_str(r#"<article class="project">"#);
    if let Some(src) = project.image_src() {
        let _ = write!(
            out,
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            escape(&src),
            escape(&project.title)
        );
    }
    let _ = write!(
        out,
        "<h3>{}</h3><p>{}</p>",
        escape(&project.title),
        escape(&project.description)
    );
    if let Some(stack) = project.tech_stack.as_deref().filter(|s| !s.is_empty()) {
        let _ = write!(out, r#"<p class="stack">{}</p>"#, escape(stack));
    }
    for (label, url) in [("Live", &project.project_url), ("GitHub", &project.github_url)] {
        if let Some(url) = url.as_deref().filter(|u| !u.is_empty() && *u != "#") {
            let _ = write!(
                out,
                r#"<a href="{}" target="_blank" rel="noopener">{}</a> "#,
                escape(url),
                label
            );
        }
    }
    out.push_str("</article>\n");
}

const CONTACT_FORM: &str = r#"<section id="contact">
<h2>Get in touch</h2>
<form method="post" action="/contact">
<input name="name" placeholder="Your name" required>
<input name="email" type="email" placeholder="you@example.com" required>
<textarea name="message" rows="5" placeholder="Your message" required></textarea>
<button type="submit">Send</button>
</form>
</section>"#;

pub fn home_page(projects: &[Project], notice: Option<Notice>) -> String {
    let mut body = String::new();
    if let Some(notice) = notice {
        body.push_str(&notice_banner(notice));
    }
    body.push_str(r#"<section id="projects"><h2>Projects</h2>"#);
    if projects.is_empty() {
        body.push_str("<p>No projects yet.</p>");
    }
    for project in projects {
        project_card(&mut body, project);
    }
    body.push_str("</section>\n");
    body.push_str(CONTACT_FORM);
    layout("Portfolio", &body)
}

pub fn admin_messages_page(messages: &[Message]) -> String {
    let mut body = format!(
        "<h1>Contact messages</h1><p>{} message(s)</p>\n",
        messages.len()
    );
    if messages.is_empty() {
        body.push_str("<p>No messages yet.</p>");
    } else {
        body.push_str(
            "<table><thead><tr><th>Date</th><th>Name</th><th>Email</th><th>Message</th></tr></thead><tbody>\n",
        );
        for msg in messages {
            let _ = writeln!(
                body,
                r#"<tr><td><time datetime="{}">{}</time></td><td>{}</td><td><a href="mailto:{}">{}</a></td><td>{}</td></tr>"#,
                time::iso(&msg.created_at),
                time::human(&msg.created_at),
                escape(&msg.name),
                escape(&msg.email),
                escape(&msg.email),
                escape(&msg.message)
            );
        }
        body.push_str("</tbody></table>");
    }
    layout("Messages", &body)
}

pub fn messages_info_page() -> String {
    let body = r#"<h1>Messages system</h1>
<p>Every contact form submission is stored in the site database and can be reviewed three ways:</p>
<ul>
<li><a href="/admin/messages">/admin/messages</a> lists all messages, newest first.</li>
<li><a href="/api/messages">/api/messages</a> returns the same list as JSON with a total count.</li>
<li>The <code>read-messages</code> command prints them in a terminal straight from the database file.</li>
</ul>"#;
    layout("Messages system", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn home_page_shows_notice_and_escapes_projects() {
        let project = Project {
            id: 1,
            title: "<Taskizo>".into(),
            description: "drag & drop".into(),
            tech_stack: Some("Flask".into()),
            image_url: Some("images/Taskizo.png".into()),
            project_url: Some("https://github.com/Rashik8606/Job-Indeed".into()),
            github_url: None,
            created_at: Utc::now(),
        };
        let html = home_page(&[project], Some(Notice::Sent));

        assert!(html.contains("Thanks! Your message has been sent."));
        assert!(html.contains("notice-success"));
        assert!(html.contains("&lt;Taskizo&gt;"));
        assert!(html.contains("drag &amp; drop"));
        assert!(html.contains(r#"src="/static/images/Taskizo.png""#));
        assert!(!html.contains(">GitHub<"));
        assert!(html.contains(&Utc::now().year().to_string()));
    }
}
