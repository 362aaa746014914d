//! Elm-style state model for the console shell.
//!
//! All display state lives in [`ConsoleModel`]. Input and data events arrive
//! as [`ConsoleMsg`] values; side-effects are represented as [`ConsoleCmd`]
//! values returned from the update function.
//!
//! **Design invariant:** the model is deterministic and testable: no I/O
//! happens here.

use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;

use crate::project::record::{ConsoleSnapshot, OrganizationRecord, ProjectRecord};
use crate::route::Route;
use crate::tui::classifier::{DisplayMode, resolve_display};
use crate::tui::title::{TitleContext, build_title};

// ──────────────────── products ────────────────────

/// Icon-bar navigation rail entries, one per console product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Product {
    /// Project home: usage overview and client config.
    #[default]
    Home,
    /// Spreadsheet-style table editor.
    TableEditor,
    /// Ad-hoc SQL editor.
    SqlEditor,
    /// Schema, roles, backups.
    Database,
    /// Authentication and user management.
    Auth,
    /// Object storage buckets.
    Storage,
    /// Log explorer.
    Logs,
    /// Project settings.
    Settings,
}

/// Total number of rail entries (used for prev/next wrapping).
const PRODUCT_COUNT: u8 = 8;

impl Product {
    /// 1-based product number for hotkey mapping (keys `1`–`8`).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Home => 1,
            Self::TableEditor => 2,
            Self::SqlEditor => 3,
            Self::Database => 4,
            Self::Auth => 5,
            Self::Storage => 6,
            Self::Logs => 7,
            Self::Settings => 8,
        }
    }

    /// Resolve a 1-based number key to a product. Returns `None` for
    /// out-of-range.
    #[must_use]
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Home),
            2 => Some(Self::TableEditor),
            3 => Some(Self::SqlEditor),
            4 => Some(Self::Database),
            5 => Some(Self::Auth),
            6 => Some(Self::Storage),
            7 => Some(Self::Logs),
            8 => Some(Self::Settings),
            _ => None,
        }
    }

    /// Next rail entry, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        let n = self.number() % PRODUCT_COUNT + 1;
        match Self::from_number(n) {
            Some(p) => p,
            None => Self::Home,
        }
    }

    /// Previous rail entry, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        let n = if self.number() == 1 {
            PRODUCT_COUNT
        } else {
            self.number() - 1
        };
        match Self::from_number(n) {
            Some(p) => p,
            None => Self::Settings,
        }
    }

    /// Rail label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::TableEditor => "Table Editor",
            Self::SqlEditor => "SQL Editor",
            Self::Database => "Database",
            Self::Auth => "Authentication",
            Self::Storage => "Storage",
            Self::Logs => "Logs",
            Self::Settings => "Settings",
        }
    }

    /// Single-glyph icon for the collapsed rail.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Home => '⌂',
            Self::TableEditor => '▦',
            Self::SqlEditor => '≻',
            Self::Database => '◫',
            Self::Auth => '⚿',
            Self::Storage => '▤',
            Self::Logs => '≡',
            Self::Settings => '⚙',
        }
    }

    /// Route sections under `/project/{ref}` for this product.
    /// `None` means the project home.
    #[must_use]
    pub const fn route_section(self) -> Option<&'static str> {
        match self {
            Self::Home => None,
            Self::TableEditor => Some("editor"),
            Self::SqlEditor => Some("sql"),
            Self::Database => Some("database"),
            Self::Auth => Some("auth"),
            Self::Storage => Some("storage"),
            Self::Logs => Some("logs"),
            Self::Settings => Some("settings/general"),
        }
    }

    /// Rail entry to highlight for a route, when the route is project-scoped.
    #[must_use]
    pub fn for_route(route: &Route) -> Option<Self> {
        route.project_ref()?;
        let Some(first) = route.sections().first() else {
            return Some(Self::Home);
        };
        match first.as_str() {
            "editor" => Some(Self::TableEditor),
            "sql" => Some(Self::SqlEditor),
            "database" => Some(Self::Database),
            "auth" => Some(Self::Auth),
            "storage" => Some(Self::Storage),
            "logs" => Some(Self::Logs),
            "settings" => Some(Self::Settings),
            _ => None,
        }
    }

    /// All rail entries in display order.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Home,
            Self::TableEditor,
            Self::SqlEditor,
            Self::Database,
            Self::Auth,
            Self::Storage,
            Self::Logs,
            Self::Settings,
        ]
    }
}

// ──────────────────── overlays ────────────────────

/// Floating surfaces that overlay the chrome. Only one can be active at a
/// time; overlay keys take precedence over global keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Contextual key map (`?`).
    Help,
}

// ──────────────────── chrome options ────────────────────

/// Render-function parameters: the caller-facing knobs of the shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChromeOptions {
    /// Explicit page title (wins the title priority chain).
    pub title: Option<String>,
    /// Caller-forced loading state, treated like an unfetched record.
    pub is_loading: bool,
    /// Suppress the header rows.
    pub hide_header: bool,
    /// Suppress the icon-bar rail.
    pub hide_icon_bar: bool,
    /// Show the expanded product menu column.
    pub show_product_menu: bool,
}

// ──────────────────── messages and commands ────────────────────

/// Input and data events consumed by the update function.
#[derive(Debug, Clone)]
pub enum ConsoleMsg {
    /// Periodic refresh tick.
    Tick,
    /// Terminal key event.
    Key(KeyEvent),
    /// Terminal resized.
    Resize { cols: u16, rows: u16 },
    /// Fresh console snapshot, or `None` when the read failed.
    SnapshotUpdate(Option<Box<ConsoleSnapshot>>),
    /// Navigate the rail to a product.
    Navigate(Product),
    /// Quit the shell.
    Quit,
}

/// Side-effects requested from the runtime. The reducer only describes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCmd {
    /// Nothing to do.
    None,
    /// Execute several commands in order.
    Batch(Vec<ConsoleCmd>),
    /// Read the console snapshot and feed back a `SnapshotUpdate`.
    FetchSnapshot,
    /// Adjust the tick interval.
    ScheduleTick(Duration),
    /// Tear down the terminal and exit the loop.
    Quit,
}

// ──────────────────── model ────────────────────

/// Complete display state of the console shell.
#[derive(Debug, Clone)]
pub struct ConsoleModel {
    /// Caller-facing chrome knobs.
    pub options: ChromeOptions,
    /// Brand string for the title fallback.
    pub brand: String,
    /// Frame counter.
    pub tick: u64,
    /// Terminal dimensions `(cols, rows)`.
    pub terminal_size: (u16, u16),
    /// True until the first snapshot arrives.
    pub loading: bool,
    /// Current navigation path.
    pub route: Route,
    /// Selected project, from the latest snapshot.
    pub project: Option<ProjectRecord>,
    /// Selected organization, from the latest snapshot.
    pub organization: Option<OrganizationRecord>,
    /// Table open in the editor, for the title chain.
    pub selected_table: Option<String>,
    /// Snapshot reads are failing; data may be stale.
    pub degraded: bool,
    /// Incident banner flag snapshot (adjusts header height).
    pub incident_banner: bool,
    /// Active overlay, if any.
    pub active_overlay: Option<Overlay>,
    /// Cursor within the product menu.
    pub menu_cursor: usize,
    /// Snapshot poll interval.
    pub refresh: Duration,
    /// Wall-clock instant of the last snapshot read.
    pub last_fetch: Option<Instant>,
    /// Successful adapter reads this session.
    pub adapter_reads: u64,
    /// Failed adapter reads this session.
    pub adapter_errors: u64,
    /// Loop exit requested.
    pub should_quit: bool,
}

impl ConsoleModel {
    /// Fresh model starting on `route`.
    #[must_use]
    pub fn new(route: Route, options: ChromeOptions, brand: impl Into<String>) -> Self {
        let menu_cursor = Product::for_route(&route)
            .map_or(0, |p| usize::from(p.number()) - 1);
        Self {
            options,
            brand: brand.into(),
            tick: 0,
            terminal_size: (80, 24),
            loading: true,
            route,
            project: None,
            organization: None,
            selected_table: None,
            degraded: false,
            incident_banner: false,
            active_overlay: None,
            menu_cursor,
            refresh: Duration::from_millis(1000),
            last_fetch: None,
            adapter_reads: 0,
            adapter_errors: 0,
            should_quit: false,
        }
    }

    /// Display mode for the current frame: the paused gate wrapping the
    /// ordered classifier, over exactly the state held in this model.
    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        resolve_display(
            self.loading || self.options.is_loading,
            self.project.as_ref(),
            &self.route,
        )
    }

    /// Title for the current frame.
    #[must_use]
    pub fn title(&self) -> String {
        let context = TitleContext {
            explicit: self.options.title.as_deref(),
            table_name: self.selected_table.as_deref(),
            project: self.project.as_ref(),
            organization: self.organization.as_ref(),
        };
        build_title(&context, &self.brand)
    }

    /// Rail entry highlighted for the current route.
    #[must_use]
    pub fn active_product(&self) -> Option<Product> {
        Product::for_route(&self.route)
    }

    /// Point the route at `product`, preserving the current project ref.
    pub fn navigate_to(&mut self, product: Product) {
        let Some(ref_id) = self.route.project_ref().map(str::to_owned) else {
            return;
        };
        self.route = match product.route_section() {
            Some(section) => Route::parse(&format!("/project/{ref_id}/{section}")),
            None => Route::project_home(&ref_id),
        };
        self.menu_cursor = usize::from(product.number()) - 1;
    }
}
