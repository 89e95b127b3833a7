use crate::domain::{Client, Contact, Project, Subscriber};
use crate::render::{
    document, error_block, escape, format_date, image, no_data, segment, AssetOrigin,
    CLIENT_PLACEHOLDER, PROJECT_PLACEHOLDER,
};
use crate::session_state::Draft;

#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AdminTab {
    Projects,
    Clients,
    Contacts,
    Newsletters,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Projects,
        AdminTab::Clients,
        AdminTab::Contacts,
        AdminTab::Newsletters,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            AdminTab::Projects => "projects",
            AdminTab::Clients => "clients",
            AdminTab::Contacts => "contacts",
            AdminTab::Newsletters => "newsletters",
        }
    }

    pub fn path(&self) -> String {
        format!("/admin/{}", self.slug())
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Projects => "Projects",
            AdminTab::Clients => "Clients",
            AdminTab::Contacts => "Contact Forms",
            AdminTab::Newsletters => "Newsletter Subscribers",
        }
    }

    /// What one row of this tab is called in prompts and alerts.
    pub fn record_noun(&self) -> &'static str {
        match self {
            AdminTab::Projects => "project",
            AdminTab::Clients => "client",
            AdminTab::Contacts => "contact",
            AdminTab::Newsletters => "subscriber",
        }
    }

    pub fn record_title(&self) -> &'static str {
        match self {
            AdminTab::Projects => "Project",
            AdminTab::Clients => "Client",
            AdminTab::Contacts => "Contact",
            AdminTab::Newsletters => "Subscriber",
        }
    }
}

pub fn page(active: AdminTab, alerts: &str, content: &str) -> String {
    let tabs: String = AdminTab::ALL
        .iter()
        .map(|tab| {
            let class = if *tab == active {
                "tab-button active"
            } else {
                "tab-button"
            };
            format!(
                r#"<a class="{class}" data-tab="{slug}" href="{path}">{label}</a>"#,
                class = class,
                slug = tab.slug(),
                path = tab.path(),
                label = tab.label(),
            )
        })
        .collect();

    let body = format!(
        r#"<header><h1>Admin Panel</h1><a href="/">View Site</a></header>
<nav class="tabs">{tabs}</nav>
<div class="alerts">{alerts}</div>
<section id="{slug}-tab" class="tab-content active">
{content}
</section>"#,
        tabs = tabs,
        alerts = alerts,
        slug = active.slug(),
        content = content,
    );
    document("Admin Panel", "admin", &body)
}

pub fn alert(level: &str, message: &str) -> String {
    format!(
        r#"<p class="alert alert-{level}">{message}</p>"#,
        level = level,
        message = escape(message)
    )
}

pub fn load_error(message: &str) -> String {
    error_block(&format!("Error: {}", message))
}

fn edit_and_delete(tab: AdminTab, id: &str) -> String {
    format!(
        r#"<div class="item-actions">
    <form method="post" action="/admin/{slug}/{id}/edit"><button class="edit-button" type="submit">Edit</button></form>
    <a class="delete-button" href="/admin/{slug}/{id}/delete">Delete</a>
</div>"#,
        slug = tab.slug(),
        id = segment(id),
    )
}

fn delete_only(tab: AdminTab, id: &str) -> String {
    format!(
        r#"<a class="delete-button" href="/admin/{slug}/{id}/delete">Delete</a>"#,
        slug = tab.slug(),
        id = segment(id),
    )
}

pub fn project_cards(projects: &[Project], origin: &AssetOrigin) -> String {
    if projects.is_empty() {
        return no_data("No projects available");
    }
    projects
        .iter()
        .map(|project| {
            format!(
                r#"<div class="item-card">
    <div class="item-image">{image}</div>
    <div class="item-info">
        <h3>{name}</h3>
        <p>{description}</p>
        {actions}
    </div>
</div>
"#,
                image = image(origin, &project.image, &project.name, PROJECT_PLACEHOLDER),
                name = escape(&project.name),
                description = escape(&project.description),
                actions = edit_and_delete(AdminTab::Projects, &project.id),
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
                r#"<div class="item-card">
    <div class="item-image client-image-circle">{image}</div>
    <div class="item-info">
        <h3>{name}</h3>
        <p class="designation">{designation}</p>
        <p>{description}</p>
        {actions}
    </div>
</div>
"#,
                image = image(origin, &client.image, &client.name, CLIENT_PLACEHOLDER),
                name = escape(&client.name),
                designation = escape(&client.designation),
                description = escape(&client.description),
                actions = edit_and_delete(AdminTab::Clients, &client.id),
            )
        })
        .collect()
}

pub fn contacts_table(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return no_data("No contact submissions");
    }
    let rows: String = contacts
        .iter()
        .map(|contact| {
            format!(
                r#"<tr>
    <td>{name}</td>
    <td>{email}</td>
    <td>{mobile}</td>
    <td>{city}</td>
    <td>{date}</td>
    <td>{delete}</td>
</tr>
"#,
                name = escape(&contact.name),
                email = escape(&contact.email),
                mobile = escape(&contact.mobile),
                city = escape(&contact.city),
                date = format_date(contact.created_at),
                delete = delete_only(AdminTab::Contacts, &contact.id),
            )
        })
        .collect();
    format!(
        r#"<table>
<thead><tr><th>Name</th><th>Email</th><th>Mobile</th><th>City</th><th>Date</th><th>Actions</th></tr></thead>
<tbody>
{}</tbody>
</table>"#,
        rows
    )
}

pub fn subscribers_table(subscribers: &[Subscriber]) -> String {
    if subscribers.is_empty() {
        return no_data("No subscribers");
    }
    let rows: String = subscribers
        .iter()
        .map(|subscriber| {
            format!(
                r#"<tr>
    <td>{email}</td>
    <td>{date}</td>
    <td>{delete}</td>
</tr>
"#,
                email = escape(&subscriber.email),
                date = format_date(subscriber.created_at),
                delete = delete_only(AdminTab::Newsletters, &subscriber.id),
            )
        })
        .collect();
    format!(
        r#"<table>
<thead><tr><th>Email</th><th>Date Subscribed</th><th>Actions</th></tr></thead>
<tbody>
{}</tbody>
</table>"#,
        rows
    )
}

pub fn add_button(tab: AdminTab) -> String {
    format!(
        r#"<form method="post" action="/admin/{slug}/add"><button id="add-{noun}-btn" type="submit">Add New {entity}</button></form>"#,
        slug = tab.slug(),
        noun = tab.record_noun(),
        entity = tab.record_title(),
    )
}

fn form_actions(tab: AdminTab) -> String {
    format!(
        r#"<div class="form-actions">
    <button type="submit">Save</button>
    <button id="cancel-{noun}-btn" type="submit" formaction="/admin/{slug}/cancel" formnovalidate>Cancel</button>
</div>"#,
        noun = tab.record_noun(),
        slug = tab.slug(),
    )
}

// A new record needs an image; an edit may keep the current one.
fn image_input(id: &str, required: bool) -> String {
    format!(
        r#"<label for="{id}">Image</label>
<input type="file" id="{id}" name="image" accept="image/*"{required}>"#,
        id = id,
        required = if required { " required" } else { "" },
    )
}

// A draft left by a failed submit wins over the stored record.
fn field<'a>(draft: Option<&'a Draft>, name: &str, stored: &'a str) -> String {
    escape(draft.and_then(|draft| draft.get(name)).unwrap_or(stored))
}

/// `None` renders the empty add form.
pub fn project_form(editing: Option<&Project>, draft: Option<&Draft>) -> String {
    let (heading, name, description) = match editing {
        Some(project) => ("Edit Project", project.name.as_str(), project.description.as_str()),
        None => ("Add Project", "", ""),
    };
    format!(
        r#"<form id="project-form" class="admin-form" method="post" action="/admin/projects" enctype="multipart/form-data">
<h3>{heading}</h3>
<label for="project-name">Project Name</label>
<input type="text" id="project-name" name="name" value="{name}" required>
<label for="project-description">Description</label>
<textarea id="project-description" name="description" required>{description}</textarea>
{image}
{actions}
</form>"#,
        heading = heading,
        name = field(draft, "name", name),
        description = field(draft, "description", description),
        image = image_input("project-image", editing.is_none()),
        actions = form_actions(AdminTab::Projects),
    )
}

pub fn client_form(editing: Option<&Client>, draft: Option<&Draft>) -> String {
    let (heading, name, description, designation) = match editing {
        Some(client) => (
            "Edit Client",
            client.name.as_str(),
            client.description.as_str(),
            client.designation.as_str(),
        ),
        None => ("Add Client", "", "", ""),
    };
    format!(
        r#"<form id="client-form" class="admin-form" method="post" action="/admin/clients" enctype="multipart/form-data">
<h3>{heading}</h3>
<label for="client-name">Client Name</label>
<input type="text" id="client-name" name="name" value="{name}" required>
<label for="client-designation">Designation</label>
<input type="text" id="client-designation" name="designation" value="{designation}" required>
<label for="client-description">Description</label>
<textarea id="client-description" name="description" required>{description}</textarea>
{image}
{actions}
</form>"#,
        heading = heading,
        name = field(draft, "name", name),
        designation = field(draft, "designation", designation),
        description = field(draft, "description", description),
        image = image_input("client-image", editing.is_none()),
        actions = form_actions(AdminTab::Clients),
    )
}

pub fn confirm_delete(tab: AdminTab, id: &str) -> String {
    format!(
        r#"<div class="confirm-dialog">
<p>Are you sure you want to delete this {noun}?</p>
<form method="post" action="/admin/{slug}/{id}/delete">
    <button class="delete-button" type="submit" name="confirm" value="yes">OK</button>
    <button type="submit" name="confirm" value="no">Cancel</button>
</form>
</div>"#,
        noun = tab.record_noun(),
        slug = tab.slug(),
        id = segment(id),
    )
}
