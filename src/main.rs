//! Demo host: a ratatui table whose columns can be reordered and resized
//! with the mouse. Drag a header to move a column, grab a trailing edge to
//! resize it. `r` resets the order, `q` quits. Layout persists between runs.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Terminal,
};
use tracing_subscriber::EnvFilter;

use col_reorder::data::relocation::relocate_slice;
use col_reorder::ui::pointer::pointer_event_from_mouse;
use col_reorder::{
    Column, ColumnManager, CursorStyle, InstanceRegistry, JsonStateAdapter, PointerEvent,
    ReorderConfig, TableHost, TableModel, TableRow, VisualInsert,
};

/// Terminal cells mapped to pixel space: one cell column is 8 px wide, one
/// row 16 px tall. Keeps the 5 px thresholds meaningful on a cell grid.
const CELL_W: f64 = 8.0;
const CELL_H: f64 = 16.0;
const DEFAULT_COL_PX: f64 = 112.0;

/// TableHost over terminal cell geometry. Widths live here in pixels; the
/// renderer converts back to cells each frame.
struct TerminalHost {
    table_left: f64,
    header_top: f64,
    header_row: u16,
    widths: Vec<f64>,
    proxy: Option<(usize, f64, f64)>,
    marker: Option<f64>,
    cursor: CursorStyle,
    auto_width: bool,
}

impl TerminalHost {
    fn new(columns: usize) -> Self {
        Self {
            table_left: CELL_W,
            header_top: CELL_H,
            header_row: 1,
            widths: vec![DEFAULT_COL_PX; columns],
            proxy: None,
            marker: None,
            cursor: CursorStyle::Default,
            auto_width: true,
        }
    }

    fn sync_layout(&mut self, area: Rect) {
        self.table_left = (area.x + 1) as f64 * CELL_W;
        self.header_top = (area.y + 1) as f64 * CELL_H;
        self.header_row = area.y + 1;
    }

    fn constraints(&self) -> Vec<Constraint> {
        self.widths
            .iter()
            .map(|w| Constraint::Length((w / CELL_W).round().max(1.0) as u16))
            .collect()
    }
}

impl TableHost for TerminalHost {
    fn table_left(&self) -> f64 {
        self.table_left
    }

    fn table_width(&self) -> f64 {
        self.widths.iter().sum()
    }

    fn header_origin(&self, visible_index: usize) -> (f64, f64) {
        let left: f64 = self.table_left + self.widths[..visible_index].iter().sum::<f64>();
        (left, self.header_top)
    }

    fn rendered_width(&self, visible_index: usize) -> f64 {
        self.widths.get(visible_index).copied().unwrap_or(0.0)
    }

    fn scroll_x(&self) -> bool {
        false
    }

    fn scroll_y(&self) -> bool {
        false
    }

    fn auto_width(&self) -> bool {
        self.auto_width
    }

    fn set_auto_width(&mut self, enabled: bool) {
        self.auto_width = enabled;
    }

    fn relocate_visual(&mut self, visible_from: usize, insert: VisualInsert) {
        let to = match insert {
            VisualInsert::Before(v) if v > visible_from => v - 1,
            VisualInsert::Before(v) => v,
            VisualInsert::Append => self.widths.len() - 1,
        };
        relocate_slice(&mut self.widths, visible_from, to);
    }

    fn set_column_width(&mut self, visible_index: usize, width: f64) {
        if let Some(slot) = self.widths.get_mut(visible_index) {
            *slot = width.max(CELL_W);
        }
    }

    fn show_drag_proxy(&mut self, visible_index: usize, x: f64, y: f64) {
        self.proxy = Some((visible_index, x, y));
    }

    fn move_drag_proxy(&mut self, x: f64, y: f64) {
        if let Some(proxy) = self.proxy.as_mut() {
            proxy.1 = x;
            proxy.2 = y;
        }
    }

    fn remove_drag_proxy(&mut self) {
        self.proxy = None;
    }

    fn move_insert_marker(&mut self, x: f64) {
        self.marker = Some(x);
    }

    fn remove_insert_marker(&mut self) {
        self.marker = None;
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        self.cursor = cursor;
    }
}

fn sample_model() -> Result<TableModel> {
    let mut model = TableModel::new();
    for (i, name) in ["id", "symbol", "side", "qty", "price", "trader"]
        .iter()
        .enumerate()
    {
        model.add_column(Column::new(*name).with_accessor(i));
    }

    let rows = [
        ["1", "AAPL", "Buy", "100", "182.50", "jsmith"],
        ["2", "MSFT", "Sell", "250", "411.20", "mjones"],
        ["3", "GOOG", "Buy", "75", "141.80", "jsmith"],
        ["4", "TSLA", "Sell", "60", "248.00", "adoyle"],
        ["5", "NVDA", "Buy", "40", "875.30", "mjones"],
        ["6", "AMZN", "Buy", "120", "178.90", "adoyle"],
    ];
    for row in rows {
        model.add_row(TableRow::new(row.iter().map(|s| s.to_string()).collect()))?;
    }
    Ok(model)
}

fn draw(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    manager: &ColumnManager,
    host: &mut TerminalHost,
) -> Result<()> {
    terminal.draw(|frame| {
        let area = frame.area();
        host.sync_layout(area);

        let model = manager.model();
        let header = Row::new(
            model
                .columns
                .iter()
                .filter(|c| c.visible)
                .map(|c| Cell::from(c.name.clone()))
                .collect::<Vec<_>>(),
        )
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = model
            .rows
            .iter()
            .map(|r| {
                Row::new(
                    r.cells
                        .iter()
                        .zip(model.columns.iter())
                        .filter(|(_, c)| c.visible)
                        .map(|(cell, _)| Cell::from(cell.clone()))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        let cursor_hint = match host.cursor {
            CursorStyle::ColResize => " resize ",
            CursorStyle::Move => " move ",
            CursorStyle::Default => " ",
        };
        let table = Table::new(rows, host.constraints()).header(header).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("col-reorder demo [q quit, r reset]{}", cursor_hint)),
        );
        frame.render_widget(table, area);

        if let Some(x) = host.marker {
            let col = (x / CELL_W).round() as u16;
            let marker_area = Rect::new(col.min(area.width.saturating_sub(1)), area.y, 1, 1);
            let marker =
                Paragraph::new("v").style(Style::default().fg(Color::Yellow));
            frame.render_widget(marker, marker_area);
        }

        if let Some((visible, x, y)) = host.proxy {
            if let Some(model_index) = manager.model().visible_to_model(visible) {
                let name = manager.model().columns[model_index].name.clone();
                let col = (x / CELL_W).round() as u16;
                let row = (y / CELL_H).round() as u16;
                let w = (name.len() as u16 + 2).min(area.width);
                if col < area.width && row < area.height {
                    let proxy_area =
                        Rect::new(col.min(area.width - w), row, w, 1);
                    let proxy = Paragraph::new(format!(" {} ", name))
                        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
                    frame.render_widget(proxy, proxy_area);
                }
            }
        }
    })?;
    Ok(())
}

fn state_path() -> std::path::PathBuf {
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("col-reorder")
        .join("demo-state.json")
}

fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_ok() {
        let log = std::fs::File::create("col-reorder-demo.log")?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::sync::Mutex::new(log))
            .with_ansi(false)
            .init();
    }

    let model = sample_model()?;
    let column_count = model.column_count();
    let config = ReorderConfig::load().unwrap_or_default();

    let manager = ColumnManager::attach("demo", model, config)
        .with_adapter(Box::new(JsonStateAdapter::new(state_path())));
    let manager = Rc::new(RefCell::new(manager));

    let mut registry = InstanceRegistry::new();
    registry.register("demo", &manager)?;

    let mut host = TerminalHost::new(column_count);
    manager.borrow_mut().restore(&mut host)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &manager, &mut host);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    registry.unregister("demo");

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    manager: &Rc<RefCell<ColumnManager>>,
    host: &mut TerminalHost,
) -> Result<()> {
    loop {
        draw(terminal, &manager.borrow(), host)?;

        match event::read()? {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('r') => {
                    manager.borrow_mut().reset_order(host)?;
                }
                _ => {}
            },
            Event::Mouse(mouse) => {
                if let Some(pointer) = pointer_event_from_mouse(&mouse, CELL_W, CELL_H) {
                    // Drags begin on the header row only; moves and
                    // releases are routed regardless so live sessions track
                    let route = match pointer {
                        PointerEvent::Down { .. } => mouse.row == host.header_row,
                        _ => true,
                    };
                    if route {
                        manager.borrow_mut().handle_pointer(pointer, host)?;
                    }
                }
            }
            _ => {}
        }
    }
    Ok(())
}
