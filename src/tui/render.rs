//! Frame renderer for the console shell.
//!
//! `render_to_string()` produces the complete frame as text (exactly
//! `rows` lines, each clipped to `cols` characters) so tests and the
//! headless harness can assert on content without a terminal. The runtime
//! paints the same string with colors applied to the status badge row.

#![allow(missing_docs)]
#![allow(clippy::too_many_lines)]

use super::classifier::DisplayMode;
use super::input::HELP_BINDINGS;
use super::layout::{
    ChromeLayout, LayoutOptions, build_chrome_layout, is_terminal_too_small,
};
use super::model::{ConsoleModel, Overlay, Product};
use super::widgets::{center_text, clip_line, key_hint, section_header, status_badge};

/// Render the full frame for the current model state.
#[must_use]
pub fn render_to_string(model: &ConsoleModel) -> String {
    let (cols, rows) = model.terminal_size;
    let width = usize::from(cols);

    if is_terminal_too_small(cols, rows) {
        return format!(
            "terminal too small ({cols}x{rows})\nresize to at least 40x8"
        );
    }

    let layout = build_chrome_layout(cols, rows, layout_options(model));
    let mode = model.display_mode();
    let mut frame: Vec<String> = Vec::with_capacity(usize::from(rows));

    if layout.banner.is_some() {
        frame.push(center_text(
            "⚠ Ongoing platform incident: status.nimbus.example",
            width,
        ));
    }

    if layout.header.is_some() {
        frame.push(header_title_line(model, mode));
        frame.push(header_status_line(model));
    }

    frame.extend(body_lines(model, mode, &layout));

    if layout.footer.is_some() {
        frame.push(footer_line(model));
    }

    frame.truncate(usize::from(rows));
    let frame: Vec<String> = frame
        .into_iter()
        .map(|line| clip_line(&line, width))
        .collect();
    frame.join("\n")
}

fn layout_options(model: &ConsoleModel) -> LayoutOptions {
    LayoutOptions {
        hide_header: model.options.hide_header,
        hide_icon_bar: model.options.hide_icon_bar,
        show_product_menu: model.options.show_product_menu,
        incident_banner: model.incident_banner,
    }
}

// ──────────────────── header ────────────────────

fn header_title_line(model: &ConsoleModel, mode: DisplayMode) -> String {
    let badge = if mode.is_content() {
        let status = model
            .project
            .as_ref()
            .map_or("no project", |p| p.status.label());
        status_badge(status)
    } else {
        status_badge(mode.as_wire())
    };
    let degraded = if model.degraded { "  (stale data)" } else { "" };
    format!("{}  ·  {}  {badge}{degraded}", model.brand, model.title())
}

fn header_status_line(model: &ConsoleModel) -> String {
    match model.project.as_ref() {
        Some(project) => {
            let org = model
                .organization
                .as_ref()
                .map_or("-", |o| o.name.as_str());
            format!(
                "ref={}  org={org}  gateway={}  route={}",
                project.ref_id,
                project.gateway_status.as_wire().to_ascii_lowercase(),
                model.route
            )
        }
        None => format!("route={}", model.route),
    }
}

// ──────────────────── body ────────────────────

fn body_lines(model: &ConsoleModel, mode: DisplayMode, layout: &ChromeLayout) -> Vec<String> {
    let body_rows = usize::from(layout.content.height);

    if model.active_overlay == Some(Overlay::Help) {
        return help_lines(model, body_rows);
    }
    if !mode.is_content() {
        return takeover_lines(model, mode, body_rows);
    }
    content_lines(model, layout, body_rows)
}

fn help_lines(model: &ConsoleModel, body_rows: usize) -> Vec<String> {
    let width = usize::from(model.terminal_size.0);
    let mut lines = vec![section_header("Keyboard", width)];
    for binding in HELP_BINDINGS {
        lines.push(format!("  {:<8} {}", binding.keys, binding.description));
    }
    lines.push(String::new());
    lines.push("  press Esc or ? to close".to_owned());
    pad_to(&mut lines, body_rows);
    lines
}

/// Full-screen takeover for every non-content mode.
fn takeover_lines(model: &ConsoleModel, mode: DisplayMode, body_rows: usize) -> Vec<String> {
    let width = usize::from(model.terminal_size.0);
    let top_pad = body_rows.saturating_sub(5) / 2;

    let mut lines = vec![String::new(); top_pad];
    lines.push(center_text(
        &format!("{} {}", status_badge(mode.as_wire()), mode.headline()),
        width,
    ));
    lines.push(String::new());
    lines.push(center_text(mode_detail(mode), width));
    if let Some(hint) = mode_hint(mode, model) {
        lines.push(String::new());
        lines.push(center_text(&hint, width));
    }
    pad_to(&mut lines, body_rows);
    lines
}

const fn mode_detail(mode: DisplayMode) -> &'static str {
    match mode {
        DisplayMode::Connecting => "Fetching the latest project state…",
        DisplayMode::Upgrading => "The project is being upgraded and will be back shortly.",
        DisplayMode::Pausing => "The project is winding down.",
        DisplayMode::OfflineGateway => "The data API did not answer its last health probe.",
        DisplayMode::Restoring => "Restore in progress; the database comes back automatically.",
        DisplayMode::Building => "Provisioning compute and bootstrapping the database.",
        DisplayMode::PausedFullScreen => "Compute is released; your data is retained.",
        DisplayMode::Content => "",
    }
}

fn mode_hint(mode: DisplayMode, model: &ConsoleModel) -> Option<String> {
    let ref_id = model.route.project_ref().unwrap_or("_");
    match mode {
        DisplayMode::PausedFullScreen => Some(format!(
            "resume from /project/{ref_id}/settings/general (press 8)"
        )),
        DisplayMode::OfflineGateway => {
            Some("settings pages remain available (press 8)".to_owned())
        }
        _ => None,
    }
}

// ──────────────────── content chrome ────────────────────

fn content_lines(model: &ConsoleModel, layout: &ChromeLayout, body_rows: usize) -> Vec<String> {
    let active = model.active_product();
    let page = page_lines(model, usize::from(layout.content.width), body_rows);

    (0..body_rows)
        .map(|row| {
            let mut line = String::new();
            if let Some(rail) = layout.icon_bar {
                line.push_str(&pad_cell(&rail_cell(row, active), usize::from(rail.width)));
            }
            if let Some(menu) = layout.product_menu {
                line.push_str(&pad_cell(
                    &menu_cell(row, model),
                    usize::from(menu.width),
                ));
            }
            line.push_str(page.get(row).map_or("", String::as_str));
            line
        })
        .collect()
}

fn rail_cell(row: usize, active: Option<Product>) -> String {
    Product::all().get(row).map_or_else(String::new, |product| {
        let marker = if Some(*product) == active { '▌' } else { ' ' };
        format!("{marker}{} ", product.glyph())
    })
}

fn menu_cell(row: usize, model: &ConsoleModel) -> String {
    Product::all().get(row).map_or_else(String::new, |product| {
        let cursor = if row == model.menu_cursor { '>' } else { ' ' };
        format!("{cursor}{} {}", product.number(), product.label())
    })
}

fn page_lines(model: &ConsoleModel, width: usize, body_rows: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let product = model.active_product();
    let heading = product.map_or("Page", Product::label);
    lines.push(section_header(heading, width.min(60)));

    if let Some(project) = model.project.as_ref() {
        lines.push(format!("project   {} ({})", project.name, project.ref_id));
        lines.push(format!("status    {}", project.status.label()));
        if let Some(region) = project.region.as_deref() {
            lines.push(format!("region    {region}"));
        }
        if let Some(version) = project.database_version.as_deref() {
            lines.push(format!("database  {version}"));
        }
    }
    if product == Some(Product::TableEditor) {
        let table = model.selected_table.as_deref().unwrap_or("(no table open)");
        lines.push(format!("table     {table}"));
    }
    pad_to(&mut lines, body_rows);
    lines
}

// ──────────────────── footer ────────────────────

fn footer_line(model: &ConsoleModel) -> String {
    let hints = [
        key_hint("1-8", "products"),
        key_hint("m", "menu"),
        key_hint("r", "refresh"),
        key_hint("?", "help"),
        key_hint("q", "quit"),
    ]
    .join("  ");
    format!("{hints}  ·  tick={}", model.tick)
}

// ──────────────────── helpers ────────────────────

fn pad_to(lines: &mut Vec<String>, rows: usize) {
    while lines.len() < rows {
        lines.push(String::new());
    }
    lines.truncate(rows);
}

fn pad_cell(cell: &str, width: usize) -> String {
    let clipped = clip_line(cell, width);
    let len = clipped.chars().count();
    format!("{clipped}{}", " ".repeat(width - len))
}
