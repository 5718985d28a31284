// Shared test support: a recording TableHost and model builders
#![allow(dead_code)]

use col_reorder::ui::CursorStyle;
use col_reorder::{Column, RelocationMapping, TableHost, TableModel, TableRow, VisualInsert};

/// Host double with simple linear geometry that records every call the core
/// delegates to it
pub struct MockHost {
    pub table_left: f64,
    /// Rendered width per visible column
    pub widths: Vec<f64>,
    pub scroll_x: bool,
    pub scroll_y: bool,
    pub auto_width: bool,
    pub table_width_delta: f64,
    pub visual_moves: Vec<(usize, VisualInsert)>,
    pub width_sets: Vec<(usize, f64)>,
    pub reorder_events: Vec<(usize, usize, Vec<usize>)>,
    pub resize_events: Vec<(usize, f64)>,
    pub sizing_requests: usize,
    pub rebind_count: usize,
    pub proxy_shown: bool,
    pub proxy_moves: Vec<(f64, f64)>,
    pub marker_positions: Vec<f64>,
    pub cursor: CursorStyle,
}

impl MockHost {
    /// `widths` is the rendered width of each visible column, left to right
    pub fn new(widths: Vec<f64>) -> Self {
        Self {
            table_left: 0.0,
            widths,
            scroll_x: false,
            scroll_y: false,
            auto_width: true,
            table_width_delta: 0.0,
            visual_moves: Vec::new(),
            width_sets: Vec::new(),
            reorder_events: Vec::new(),
            resize_events: Vec::new(),
            sizing_requests: 0,
            rebind_count: 0,
            proxy_shown: false,
            proxy_moves: Vec::new(),
            marker_positions: Vec::new(),
            cursor: CursorStyle::Default,
        }
    }

    pub fn uniform(columns: usize, width: f64) -> Self {
        Self::new(vec![width; columns])
    }
}

impl TableHost for MockHost {
    fn table_left(&self) -> f64 {
        self.table_left
    }

    fn table_width(&self) -> f64 {
        self.widths.iter().sum()
    }

    fn header_origin(&self, visible_index: usize) -> (f64, f64) {
        let left = self.table_left + self.widths[..visible_index].iter().sum::<f64>();
        (left, 0.0)
    }

    fn rendered_width(&self, visible_index: usize) -> f64 {
        self.widths.get(visible_index).copied().unwrap_or(0.0)
    }

    fn scroll_x(&self) -> bool {
        self.scroll_x
    }

    fn scroll_y(&self) -> bool {
        self.scroll_y
    }

    fn auto_width(&self) -> bool {
        self.auto_width
    }

    fn set_auto_width(&mut self, enabled: bool) {
        self.auto_width = enabled;
    }

    fn relocate_visual(&mut self, visible_from: usize, insert: VisualInsert) {
        self.visual_moves.push((visible_from, insert));
        let to = match insert {
            VisualInsert::Before(v) if v > visible_from => v - 1,
            VisualInsert::Before(v) => v,
            VisualInsert::Append => self.widths.len() - 1,
        };
        let width = self.widths.remove(visible_from);
        self.widths.insert(to, width);
    }

    fn set_column_width(&mut self, visible_index: usize, width: f64) {
        self.width_sets.push((visible_index, width));
        if let Some(slot) = self.widths.get_mut(visible_index) {
            *slot = width;
        }
    }

    fn adjust_table_width(&mut self, delta: f64) {
        self.table_width_delta += delta;
    }

    fn request_column_sizing(&mut self) {
        self.sizing_requests += 1;
    }

    fn rebind_sort_triggers(&mut self) {
        self.rebind_count += 1;
    }

    fn show_drag_proxy(&mut self, _visible_index: usize, x: f64, y: f64) {
        self.proxy_shown = true;
        self.proxy_moves.push((x, y));
    }

    fn move_drag_proxy(&mut self, x: f64, y: f64) {
        self.proxy_moves.push((x, y));
    }

    fn remove_drag_proxy(&mut self) {
        self.proxy_shown = false;
    }

    fn move_insert_marker(&mut self, x: f64) {
        self.marker_positions.push(x);
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        self.cursor = cursor;
    }

    fn column_reordered(&mut self, from: usize, to: usize, mapping: &RelocationMapping) {
        self.reorder_events
            .push((from, to, mapping.inverse().to_vec()));
    }

    fn column_resized(&mut self, visible_index: usize, width: f64) {
        self.resize_events.push((visible_index, width));
    }
}

/// Five columns A..E with two cached rows, one header row and accessor
/// indices matching their starting slots
pub fn five_column_model() -> TableModel {
    let mut model = TableModel::new();
    for (i, name) in ["A", "B", "C", "D", "E"].iter().enumerate() {
        model.add_column(Column::new(*name).with_accessor(i));
    }
    model
        .add_header_row(
            ["A", "B", "C", "D", "E"]
                .iter()
                .map(|n| col_reorder::LayoutCell::new(*n))
                .collect(),
        )
        .unwrap();
    for r in 0..2 {
        model
            .add_row(TableRow::new(
                ["A", "B", "C", "D", "E"]
                    .iter()
                    .map(|n| format!("{}{}", n, r))
                    .collect(),
            ))
            .unwrap();
    }
    model
}

pub fn names(model: &TableModel) -> Vec<String> {
    model.column_names()
}
