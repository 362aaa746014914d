//! Chrome composition primitives.
//!
//! Produces a layout plan (icon bar, product menu, header, incident banner,
//! content rect) that the renderer consumes to place content. All pure
//! arithmetic over terminal dimensions and chrome options.

#![allow(missing_docs)]

/// Minimum terminal width below which the shell shows a "too small" message.
pub const MIN_USABLE_COLS: u16 = 40;
/// Minimum terminal height below which the shell shows a "too small" message.
pub const MIN_USABLE_ROWS: u16 = 8;

/// Width of the collapsed icon-bar rail.
pub const ICON_BAR_COLS: u16 = 4;
/// Width of the expanded product menu column.
pub const PRODUCT_MENU_COLS: u16 = 22;
/// Header rows: title line + status line.
pub const HEADER_ROWS: u16 = 2;
/// Extra header rows when the incident banner flag is on.
pub const INCIDENT_BANNER_ROWS: u16 = 1;
/// Footer row with key hints.
pub const FOOTER_ROWS: u16 = 1;

/// Check whether the terminal is large enough for the chrome to render
/// usefully.
#[must_use]
pub const fn is_terminal_too_small(cols: u16, rows: u16) -> bool {
    cols < MIN_USABLE_COLS || rows < MIN_USABLE_ROWS
}

/// Layout class selected from terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutClass {
    Narrow,
    Wide,
}

const WIDE_THRESHOLD_COLS: u16 = 100;

/// Classify layout from terminal width.
#[must_use]
pub const fn classify_layout(cols: u16) -> LayoutClass {
    if cols < WIDE_THRESHOLD_COLS {
        LayoutClass::Narrow
    } else {
        LayoutClass::Wide
    }
}

/// Minimal rectangular placement metadata for a chrome region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeRect {
    pub col: u16,
    pub row: u16,
    pub width: u16,
    pub height: u16,
}

impl ChromeRect {
    #[must_use]
    pub const fn new(col: u16, row: u16, width: u16, height: u16) -> Self {
        Self {
            col,
            row,
            width,
            height,
        }
    }
}

/// Chrome knobs the layout responds to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    pub hide_header: bool,
    pub hide_icon_bar: bool,
    pub show_product_menu: bool,
    pub incident_banner: bool,
}

/// Complete chrome layout plan for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeLayout {
    pub class: LayoutClass,
    pub icon_bar: Option<ChromeRect>,
    pub product_menu: Option<ChromeRect>,
    pub banner: Option<ChromeRect>,
    pub header: Option<ChromeRect>,
    pub content: ChromeRect,
    pub footer: Option<ChromeRect>,
}

/// Build the chrome layout for a terminal of `cols` x `rows`.
///
/// The product menu collapses on narrow terminals regardless of the option;
/// the icon bar survives until it alone would not fit.
#[must_use]
pub fn build_chrome_layout(cols: u16, rows: u16, options: LayoutOptions) -> ChromeLayout {
    let class = classify_layout(cols);

    let banner_rows = if options.incident_banner {
        INCIDENT_BANNER_ROWS
    } else {
        0
    };
    let header_rows = if options.hide_header { 0 } else { HEADER_ROWS };
    let footer_rows = if rows > header_rows + banner_rows + FOOTER_ROWS {
        FOOTER_ROWS
    } else {
        0
    };

    let rail_cols = if options.hide_icon_bar { 0 } else { ICON_BAR_COLS };
    let menu_cols = if options.show_product_menu && matches!(class, LayoutClass::Wide) {
        PRODUCT_MENU_COLS
    } else {
        0
    };

    let top = banner_rows + header_rows;
    let body_rows = rows.saturating_sub(top + footer_rows);
    let content_col = rail_cols + menu_cols;
    let content_cols = cols.saturating_sub(content_col);

    ChromeLayout {
        class,
        icon_bar: (rail_cols > 0)
            .then(|| ChromeRect::new(0, top, rail_cols, body_rows)),
        product_menu: (menu_cols > 0)
            .then(|| ChromeRect::new(rail_cols, top, menu_cols, body_rows)),
        banner: (banner_rows > 0).then(|| ChromeRect::new(0, 0, cols, banner_rows)),
        header: (header_rows > 0)
            .then(|| ChromeRect::new(0, banner_rows, cols, header_rows)),
        content: ChromeRect::new(content_col, top, content_cols, body_rows),
        footer: (footer_rows > 0)
            .then(|| ChromeRect::new(0, rows - footer_rows, cols, footer_rows)),
    }
}
