use log::debug;
use crate::common::{Error, Result};
use crate::controller::Controller;
use crate::filter::{AmountFilter, CategoryFilter};
use crate::parser::{self, Command};
use crate::view::{self, TableView};

const HELP: &str = "\
Commands:
  add <amount> <category>       record an expense, e.g. add 12.50 food
  filter amount <amount>        highlight transactions with this amount
  filter category <category>    highlight transactions in this category
  select <serial>               pick a row to undo (0 clears the selection)
  undo                          remove the selected transaction
  list                          show the table
  quit                          leave";

/// What the prompt should do after a command ran.
#[derive(Debug, PartialEq)]
pub(crate) enum Outcome {
    /// Table content changed, or was asked for
    Refresh,
    Message(String),
    Quit,
}

/// Parse and run a single line, printing the result. Returns false once the user asks to quit.
pub(crate) fn run_line(controller: &mut Controller<TableView>, line: &str) -> bool {
    let result = parser::parse(line).and_then(|command| {
        debug!("{:?}", command);
        execute(controller, command)
    });

    match result {
        Ok(Outcome::Refresh) => {
            println!("{}", controller.sink().render());
            if let Some(filter) = controller.active_filter() {
                println!("{} transactions, highlighting {}", controller.store().len(), filter);
            }
        },
        Ok(Outcome::Message(message)) => println!("{message}"),
        Ok(Outcome::Quit) => return false,
        Err(e) => view::show_error(&e.to_string()),
    }
    true
}

pub(crate) fn execute(controller: &mut Controller<TableView>, command: Command) -> Result<Outcome> {
    match command {
        Command::Add(amount, category) => {
            if !controller.add_transaction(amount, &category) {
                return Err(Error::invalid_argument("Invalid amount or category entered"));
            }
        }
        Command::FilterAmount(amount) => {
            controller.set_filter(AmountFilter::new(amount)?.into());
            controller.apply_filter()?;
        }
        Command::FilterCategory(category) => {
            controller.set_filter(CategoryFilter::new(&category)?.into());
            controller.apply_filter()?;
        }
        Command::Select(serial) => {
            let view = controller.sink_mut();
            let enabled = match serial.checked_sub(1) {
                Some(row) => view.select_row(row),
                None => {
                    view.clear_selection();
                    false
                }
            };
            let message = if enabled {
                format!("Row {serial} selected, type 'undo' to remove it")
            } else {
                "No transaction selected, undo is disabled".to_string()
            };
            return Ok(Outcome::Message(message));
        }
        Command::Undo => {
            match controller.sink().selected_row() {
                Some(row) => {
                    controller.remove_transaction(row)?;
                }
                None => return Ok(Outcome::Message("Select a transaction first".to_string()))
            }
        }
        Command::List => {}
        Command::Help => return Ok(Outcome::Message(HELP.to_string())),
        Command::Quit => return Ok(Outcome::Quit),
    }

    Ok(Outcome::Refresh)
}

#[cfg(test)]
mod tests {
    use crate::store::TransactionStore;
    use super::*;

    fn controller() -> Controller<TableView> {
        Controller::new(TransactionStore::new(), TableView::new([173, 255, 168]))
    }

    fn run(controller: &mut Controller<TableView>, line: &str) -> Result<Outcome> {
        execute(controller, parser::parse(line)?)
    }

    #[test]
    fn test_add() {
        let mut controller = controller();
        assert_eq!(run(&mut controller, "add 50 food"), Ok(Outcome::Refresh));

        let err = run(&mut controller, "add -50 food").unwrap_err();
        assert_eq!(err.to_string(), "Invalid amount or category entered");
        assert_eq!(controller.store().len(), 1);
    }

    #[test]
    fn test_invalid_filter_keeps_highlight() {
        let mut controller = controller();
        for line in ["add 100 food", "add 200 food", "filter amount 100"] {
            run(&mut controller, line).unwrap();
        }
        assert!(controller.sink().is_highlighted(0));

        let err = run(&mut controller, "filter amount 0").unwrap_err();
        assert_eq!(err.to_string(), "Invalid amount filter");
        let err = run(&mut controller, "filter category ' '").unwrap_err();
        assert_eq!(err.to_string(), "Invalid category filter");

        assert!(controller.sink().is_highlighted(0));
        assert!(!controller.sink().is_highlighted(1));
    }

    #[test]
    fn test_select_and_undo() {
        let mut controller = controller();
        run(&mut controller, "add 50 food").unwrap();
        run(&mut controller, "add 20 bills").unwrap();

        assert_eq!(run(&mut controller, "undo"), Ok(Outcome::Message("Select a transaction first".to_string())));

        // serial 3 is the totals row
        run(&mut controller, "select 3").unwrap();
        assert!(!controller.sink().undo_enabled());

        run(&mut controller, "select 1").unwrap();
        assert!(controller.sink().undo_enabled());
        assert_eq!(run(&mut controller, "undo"), Ok(Outcome::Refresh));

        assert_eq!(controller.store().len(), 1);
        assert_eq!(controller.store().transactions()[0].category(), "bills");
        assert!(!controller.sink().undo_enabled());
    }

    #[test]
    fn test_select_zero_clears() {
        let mut controller = controller();
        run(&mut controller, "add 50 food").unwrap();
        run(&mut controller, "select 1").unwrap();
        run(&mut controller, "select 0").unwrap();
        assert!(!controller.sink().undo_enabled());
    }

    #[test]
    fn test_quit() {
        let mut controller = controller();
        assert_eq!(run(&mut controller, "quit"), Ok(Outcome::Quit));
        assert!(!run_line(&mut controller, "exit"));
    }
}
