use std::collections::BTreeSet;
use std::io::stdout;

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, TableComponent};
use crossterm::execute;
use crossterm::style::{self, ResetColor, SetForegroundColor};

use crate::controller::DisplaySink;
use crate::transaction::Transaction;

/// A rendered data row
#[derive(Debug, Clone, PartialEq)]
struct Row {
    amount: f64,
    category: String,
    date: String,
}

/// Terminal table of transactions with a trailing totals row.
pub(crate) struct TableView {
    rows: Vec<Row>,
    total_cost: f64,

    /// Data rows matching the last applied filter
    highlighted: BTreeSet<usize>,

    /// Data row picked for undo. Never points at the totals row.
    selected_row: Option<usize>,

    highlight: Color,
}

impl TableView {
    pub(crate) fn new(highlight: [u8; 3]) -> TableView {
        let [r, g, b] = highlight;
        TableView {
            rows: vec![],
            total_cost: 0.0,
            highlighted: BTreeSet::new(),
            selected_row: None,
            highlight: Color::Rgb { r, g, b },
        }
    }

    /// Number of table rows, the totals row included.
    pub(crate) fn row_count(&self) -> usize {
        self.rows.len() + 1
    }

    pub(crate) fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub(crate) fn is_highlighted(&self, row: usize) -> bool {
        self.highlighted.contains(&row)
    }

    /// Background of the given row, `None` meaning the terminal default.
    pub(crate) fn row_background(&self, row: usize) -> Option<Color> {
        if self.is_highlighted(row) {
            Some(self.highlight)
        } else {
            None
        }
    }

    /// Select a row for undo. Selecting the totals row, or anything past it, clears the
    /// selection instead. Returns whether undo is now possible.
    pub(crate) fn select_row(&mut self, row: usize) -> bool {
        self.selected_row = if row < self.rows.len() { Some(row) } else { None };
        self.undo_enabled()
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected_row = None;
    }

    pub(crate) fn selected_row(&self) -> Option<usize> {
        self.selected_row
    }

    pub(crate) fn undo_enabled(&self) -> bool {
        self.selected_row.is_some()
    }

    pub(crate) fn render(&self) -> String {
        let mut table = Table::new();
        table.remove_style(TableComponent::HorizontalLines);
        table.remove_style(TableComponent::MiddleIntersections);
        table.remove_style(TableComponent::LeftBorderIntersections);
        table.remove_style(TableComponent::RightBorderIntersections);
        table.set_header(vec!["Serial", "Amount", "Category", "Date"]);

        for (i, row) in self.rows.iter().enumerate() {
            table.add_row(vec![
                self.style_cell(i, Cell::new(i + 1)).set_alignment(CellAlignment::Right),
                self.style_cell(i, Cell::new(format_amount(row.amount))).set_alignment(CellAlignment::Right),
                self.style_cell(i, Cell::new(&row.category)),
                self.style_cell(i, Cell::new(&row.date)),
            ]);
        }

        table.add_row(vec![
            Cell::new("Total").add_attribute(Attribute::Bold),
            Cell::new(format_amount(self.total_cost)).set_alignment(CellAlignment::Right),
            Cell::new(""),
            Cell::new(""),
        ]);

        table.to_string()
    }

    fn style_cell(&self, row: usize, cell: Cell) -> Cell {
        let cell = match self.row_background(row) {
            Some(color) => cell.fg(Color::Black).bg(color),
            None => cell
        };
        if self.selected_row == Some(row) {
            cell.add_attribute(Attribute::Reverse)
        } else {
            cell
        }
    }
}

impl DisplaySink for TableView {
    fn on_transaction_added(&mut self, t: &Transaction, total_cost: f64) {
        self.rows.push(Row {
            amount: t.amount(),
            category: t.category().to_string(),
            date: t.timestamp_display(),
        });
        self.total_cost = total_cost;
    }

    fn on_transaction_removed(&mut self, index: usize, total_cost: f64) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
        self.highlighted = self.highlighted.iter()
            .filter(|row| **row != index)
            .map(|row| if *row > index { row - 1 } else { *row })
            .collect();
        self.selected_row = None;
        self.total_cost = total_cost;
    }

    fn on_filter_result(&mut self, rows: &[usize]) {
        self.highlighted = rows.iter().cloned().filter(|row| *row < self.rows.len()).collect();
    }
}

/// Format $ amount
pub(crate) fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Print a message in red, in place of a modal dialog.
pub(crate) fn show_error(message: &str) {
    let result = execute!(
        stdout(),
        SetForegroundColor(style::Color::Red),
        style::Print(message),
        ResetColor,
        style::Print("\n")
    );
    if result.is_err() {
        println!("{message}");
    }
}
