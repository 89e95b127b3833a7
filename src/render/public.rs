use crate::domain::{Client, Project};
use crate::render::{
    document, error_block, escape, image, no_data, AssetOrigin, CLIENT_PLACEHOLDER,
    PROJECT_PLACEHOLDER,
};
use crate::session_state::{Notice, NoticeKind};

/// Result of loading one section; failures are shown in place of its cards.
pub type Section<'a, T> = Result<&'a [T], String>;

pub fn project_cards(projects: &[Project], origin: &AssetOrigin) -> String {
    if projects.is_empty() {
        return no_data("No projects available");
    }
    projects
        .iter()
        .map(|project| {
            format!(
                r#"<div class="project-card">
    {image}
    <div class="project-info">
        <h3>{name}</h3>
        <p>{description}</p>
        <button class="read-more-btn">Read More</button>
    </div>
</div>
"#,
                image = image(origin, &project.image, &project.name, PROJECT_PLACEHOLDER),
                name = escape(&project.name),
                description = escape(&project.description),
            )
        })
        .collect()
}

pub fn client_cards(clients: &[Client], origin: &AssetOrigin) -> String {
    if clients.is_empty() {
        return no_data("No clients available");
    }
    clients
        .iter()
        .map(|client| {
            format!(
                r#"<div class="client-card">
    <div class="client-image">{image}</div>
    <p class="client-description">"{description}"</p>
    <h4>{name}</h4>
    <p class="client-designation">{designation}</p>
</div>
"#,
                image = image(origin, &client.image, &client.name, CLIENT_PLACEHOLDER),
                description = escape(&client.description),
                name = escape(&client.name),
                designation = escape(&client.designation),
            )
        })
        .collect()
}

fn notice(notice: Option<&Notice>) -> String {
    match notice {
        Some(notice) => {
            let class = match notice.kind {
                NoticeKind::Success => "form-message success",
                NoticeKind::Error => "form-message error",
            };
            format!(r#"<p class="{}">{}</p>"#, class, escape(&notice.text))
        }
        None => String::new(),
    }
}

// What the user typed last time, when their submission failed.
fn typed(notice: Option<&Notice>, name: &str) -> String {
    let value = notice
        .and_then(|notice| notice.draft.as_ref())
        .and_then(|draft| draft.get(name))
        .unwrap_or_default();
    escape(value)
}

fn section<T>(
    loaded: Section<'_, T>,
    things: &str,
    cards: impl FnOnce(&[T]) -> String,
) -> String {
    match loaded {
        Ok(records) => cards(records),
        Err(message) => error_block(&format!("Failed to load {}: {}", things, message)),
    }
}

pub fn home_page(
    projects: Section<'_, Project>,
    clients: Section<'_, Client>,
    contact_notice: Option<&Notice>,
    newsletter_notice: Option<&Notice>,
    origin: &AssetOrigin,
) -> String {
    let projects = section(projects, "projects", |p| project_cards(p, origin));
    let clients = section(clients, "clients", |c| client_cards(c, origin));

    let body = format!(
        r#"<header><h1>Real Trust</h1><nav><a href="/#projects">Projects</a> <a href="/#clients">Clients</a> <a href="/#contact">Contact</a></nav></header>
<section id="projects">
    <h2>Our Projects</h2>
    <div id="projects-container" class="projects-grid">
{projects}
    </div>
</section>
<section id="clients">
    <h2>Happy Clients</h2>
    <div id="clients-container" class="clients-grid">
{clients}
    </div>
</section>
<section id="contact">
    <h2>Get a Free Consultation</h2>
    <form id="contact-form" method="post" action="/contact">
        <input type="text" name="name" placeholder="Full Name" value="{contact_name}" required>
        <input type="email" name="email" placeholder="Enter Email Address" value="{contact_email}" required>
        <input type="tel" name="mobile" placeholder="Mobile Number" value="{contact_mobile}" required>
        <input type="text" name="city" placeholder="Area, City" value="{contact_city}" required>
        <button type="submit">Get Quick Quote</button>
    </form>
    <div id="contact-message">{contact_notice}</div>
</section>
<section id="newsletter">
    <h2>Subscribe Us</h2>
    <form id="newsletter-form" method="post" action="/newsletter">
        <input type="email" name="email" placeholder="Enter Email Address" value="{newsletter_email}" required>
        <button type="submit">Subscribe</button>
    </form>
    <div id="newsletter-message">{newsletter_notice}</div>
</section>
<footer><a href="/admin">Admin Panel</a></footer>"#,
        projects = projects,
        clients = clients,
        contact_name = typed(contact_notice, "name"),
        contact_email = typed(contact_notice, "email"),
        contact_mobile = typed(contact_notice, "mobile"),
        contact_city = typed(contact_notice, "city"),
        newsletter_email = typed(newsletter_notice, "email"),
        contact_notice = notice(contact_notice),
        newsletter_notice = notice(newsletter_notice),
    );
    document("Real Trust", "home", &body)
}
