//! User management

pub mod policy;
mod service;

use khana_printer::pad_width;

pub use policy::{ActionHints, action_hints, may_manage};
pub use service::{UserPage, UserRow, UserService};

const COLUMNS: [(&str, usize); 6] = [
    ("ID", 10),
    ("Name", 18),
    ("Email", 26),
    ("Role", 12),
    ("Status", 8),
    ("Actions", 12),
];

fn actions_label(hints: &ActionHints) -> &'static str {
    match (hints.can_edit, hints.can_delete) {
        (true, true) => "edit, delete",
        (true, false) => "edit",
        (false, true) => "delete",
        (false, false) => "-",
    }
}

/// Text table of one user page
pub fn render_user_table(page: &UserPage) -> String {
    let line = |cells: [&str; 6]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(COLUMNS)
            .map(|(cell, (_, w))| pad_width(cell, w, false))
            .collect();
        format!("{}\n", padded.join("  ").trim_end())
    };

    let mut out = line(COLUMNS.map(|(title, _)| title));
    let total_width: usize = COLUMNS.iter().map(|(_, w)| w + 2).sum::<usize>() - 2;
    out.push_str(&"-".repeat(total_width));
    out.push('\n');
    if page.rows.is_empty() {
        out.push_str("No users found\n");
    }
    for row in &page.rows {
        let u = &row.user;
        out.push_str(&line([
            u.id.as_str(),
            u.name.as_str(),
            u.email.as_str(),
            u.role.as_str(),
            u.status.as_deref().unwrap_or("-"),
            actions_label(&row.hints),
        ]));
    }
    let p = &page.pagination;
    out.push_str(&format!(
        "Page {} of {} ({} users)\n",
        p.current_page, p.total_pages, p.total_documents
    ));
    out
}
