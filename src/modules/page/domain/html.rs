use crate::page::domain::view::PageView;

const EXTERNAL_LINK: &str = r#"target="_blank" rel="noopener noreferrer""#;

/// Renders the single-page document.
///
/// Sections are emitted in declared order; ids without dedicated markup get
/// a heading only. All content text is escaped.
pub fn render_html(view: &PageView) -> String {
    let mut out = String::with_capacity(8 * 1024);

    let root_class = view
        .root_class
        .as_deref()
        .map(|c| format!(r#" class="{}""#, escape(c)))
        .unwrap_or_default();

    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!(r#"<html lang="en"{}>"#, root_class));
    out.push_str("<head><meta charset=\"utf-8\">");
    out.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
    out.push_str(&format!("<title>{}</title></head>", escape(&view.profile.name)));
    out.push_str(&format!(
        r#"<body data-theme="{}" data-active-section="{}">"#,
        view.theme,
        escape(view.active_section.as_str())
    ));

    render_nav(view, &mut out);

    out.push_str("<main>");
    for item in &view.nav {
        out.push_str(&format!(r#"<section id="{}">"#, escape(item.id.as_str())));
        match item.id.as_str() {
            "hero" => render_hero(view, &mut out),
            "about" => {
                heading(&item.label, &mut out);
                out.push_str(&format!("<p>{}</p>", escape(&view.profile.about)));
            }
            "skills" => {
                heading(&item.label, &mut out);
                render_skills(view, &mut out);
            }
            "experience" => {
                heading(&item.label, &mut out);
                render_experience(view, &mut out);
            }
            "education" => {
                heading(&item.label, &mut out);
                render_education(view, &mut out);
            }
            "certifications" => {
                heading(&item.label, &mut out);
                render_certifications(view, &mut out);
            }
            "projects" => {
                heading(&item.label, &mut out);
                render_projects(view, &mut out);
            }
            "contact" => {
                heading(&item.label, &mut out);
                render_contact(view, &mut out);
            }
            _ => heading(&item.label, &mut out),
        }
        out.push_str("</section>");
    }
    out.push_str("</main></body></html>\n");

    out
}

fn render_nav(view: &PageView, out: &mut String) {
    out.push_str(r#"<nav class="fixed">"#);
    for item in &view.nav {
        let current = if item.active {
            r#" class="active" aria-current="true""#
        } else {
            ""
        };
        out.push_str(&format!(
            r#"<a href="{}"{}>{}</a>"#,
            escape(&item.href),
            current,
            escape(&item.label)
        ));
    }
    out.push_str(&format!(
        r#"<button type="button" data-toggle-url="/api/theme/toggle">{}</button>"#,
        if view.theme.is_dark() { "Light mode" } else { "Dark mode" }
    ));
    out.push_str("</nav>");
}

fn render_hero(view: &PageView, out: &mut String) {
    out.push_str(&format!("<h1>{}</h1>", escape(&view.profile.name)));
    out.push_str(&format!(
        r#"<p class="typed" data-duration-ms="{}" aria-label="{}">"#,
        view.headline.total_duration_ms,
        escape(&view.headline.text)
    ));
    for glyph in &view.headline.glyphs {
        out.push_str(&format!(
            r#"<span style="animation-delay:{}ms" aria-hidden="true">{}</span>"#,
            glyph.delay_ms,
            escape(glyph.character.encode_utf8(&mut [0; 4]))
        ));
    }
    out.push_str("</p>");
    out.push_str(&format!(
        r#"<a class="resume" href="{}" {}>Download Resume</a>"#,
        escape(&view.profile.resume_path),
        EXTERNAL_LINK
    ));
    if view.nav.iter().any(|n| n.id.as_str() == "projects") {
        out.push_str(r##"<a href="#projects">View Projects</a>"##);
    }
}

fn render_skills(view: &PageView, out: &mut String) {
    out.push_str(r#"<div class="filters">"#);
    for option in &view.skills.options {
        let selected = if *option == view.skills.selected {
            r#" class="selected" aria-pressed="true""#
        } else {
            ""
        };
        out.push_str(&format!(
            r#"<a href="/?category={}#skills"{}>{}</a>"#,
            escape(&urlencoding::encode(option)),
            selected,
            escape(option)
        ));
    }
    out.push_str("</div><ul class=\"skills\">");
    for skill in &view.skills.skills {
        out.push_str(&format!(
            r#"<li data-category="{}">{}</li>"#,
            escape(&skill.category),
            escape(&skill.name)
        ));
    }
    out.push_str("</ul>");
}

fn render_experience(view: &PageView, out: &mut String) {
    for entry in &view.experience {
        out.push_str(&format!(
            "<article><h3>{}</h3><p>{} &middot; {}</p>",
            escape(&entry.role),
            escape(&entry.company),
            escape(&entry.period)
        ));
        bullet_list(&entry.highlights, out);
        out.push_str("</article>");
    }
}

fn render_education(view: &PageView, out: &mut String) {
    for entry in &view.education {
        out.push_str(&format!(
            "<article><h3>{}</h3><p>{} &middot; {} &middot; GPA {}</p>",
            escape(&entry.institution),
            escape(&entry.degree),
            escape(&entry.period),
            escape(&entry.gpa)
        ));
        bullet_list(&entry.details, out);
        out.push_str("</article>");
    }
}

fn render_certifications(view: &PageView, out: &mut String) {
    out.push_str("<ul>");
    for cert in &view.certifications {
        out.push_str(&format!(
            "<li>{} <span>{}</span></li>",
            escape(&cert.name),
            escape(&cert.issuer)
        ));
    }
    out.push_str("</ul>");
}

fn render_projects(view: &PageView, out: &mut String) {
    out.push_str(r#"<div class="projects">"#);
    for project in &view.projects {
        out.push_str(&format!(
            "<article><h3>{}</h3><p>{}</p><div class=\"tags\">",
            escape(&project.title),
            escape(&project.description)
        ));
        for tag in &project.tags {
            out.push_str(&format!("<span>{}</span>", escape(tag)));
        }
        out.push_str("</div>");
        if let Some(link) = &project.link {
            out.push_str(&format!(
                r#"<a href="{}" {}>View on GitHub</a>"#,
                escape(link),
                EXTERNAL_LINK
            ));
        }
        out.push_str("</article>");
    }
    out.push_str("</div>");
}

fn render_contact(view: &PageView, out: &mut String) {
    out.push_str(&format!(
        r#"<a href="{}">{}</a>"#,
        escape(&view.mailto),
        escape(&view.contact.email)
    ));
    out.push_str(&format!(
        r#"<a href="{}" {}>GitHub</a>"#,
        escape(&view.contact.github_url),
        EXTERNAL_LINK
    ));
    out.push_str(&format!(
        r#"<a href="{}" {}>LinkedIn</a>"#,
        escape(&view.contact.linkedin_url),
        EXTERNAL_LINK
    ));
}

fn heading(label: &str, out: &mut String) {
    out.push_str(&format!("<h2>{}</h2>", escape(label)));
}

fn bullet_list(items: &[String], out: &mut String) {
    if items.is_empty() {
        return;
    }
    out.push_str("<ul>");
    for item in items {
        out.push_str(&format!("<li>{}</li>", escape(item)));
    }
    out.push_str("</ul>");
}

fn escape(raw: &str) -> String {
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
