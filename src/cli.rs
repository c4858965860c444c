//! Interactive desk menu
//!
//! A thin line-oriented front end over [`AppState`]. It only parses operator
//! input and renders results; every rule lives in the services.

use std::io::{BufRead, Write};

use crate::{
    error::{AppError, AppResult},
    models::ItemId,
    AppState,
};

/// Menu entries, numbered as shown to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowAll,
    Borrow,
    Return,
    Play,
    Archive,
    Search,
    ShowFines,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::ShowAll),
            "2" => Some(MenuChoice::Borrow),
            "3" => Some(MenuChoice::Return),
            "4" => Some(MenuChoice::Play),
            "5" => Some(MenuChoice::Archive),
            "6" => Some(MenuChoice::Search),
            "7" => Some(MenuChoice::ShowFines),
            "0" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\n=== LibraNet Menu ===
1. Show All Items
2. Borrow Item
3. Return Item
4. Play AudioBook
5. Archive E-Magazine
6. Search by Type/Title
7. Show All Fines
0. Exit";

/// Run the menu until the operator exits or input ends
pub fn run<R: BufRead, W: Write>(state: &mut AppState, input: R, output: W) -> AppResult<()> {
    let mut session = Session { state, input, output };
    session.run()
}

struct Session<'s, R, W> {
    state: &'s mut AppState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn run(&mut self) -> AppResult<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(line) = self.prompt("Choose option: ")? else {
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "Invalid choice!")?;
                continue;
            };

            match choice {
                MenuChoice::ShowAll => self.show_all()?,
                MenuChoice::Borrow => self.borrow()?,
                MenuChoice::Return => self.return_item()?,
                MenuChoice::Play => self.play()?,
                MenuChoice::Archive => self.archive()?,
                MenuChoice::Search => self.search()?,
                MenuChoice::ShowFines => self.show_fines()?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Exiting... Bye!")?;
                    break;
                }
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Print `label` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, label: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_id(&mut self, label: &str) -> AppResult<Option<ItemId>> {
        let Some(line) = self.prompt(label)? else {
            return Ok(None);
        };
        match line.parse::<ItemId>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.output, "Invalid item id '{}'", line)?;
                Ok(None)
            }
        }
    }

    fn report(&mut self, err: AppError) -> AppResult<()> {
        if err.is_informational() {
            writeln!(self.output, "{}", err)?;
        } else {
            writeln!(self.output, "Error [{}]: {}", err.code() as u32, err)?;
        }
        Ok(())
    }

    fn show_all(&mut self) -> AppResult<()> {
        writeln!(self.output, "\n--- All Items ---")?;
        for item in self.state.list_items() {
            writeln!(self.output, "{}", item)?;
        }
        Ok(())
    }

    fn borrow(&mut self) -> AppResult<()> {
        let Some(id) = self.prompt_id("Enter Item ID to borrow: ")? else {
            return Ok(());
        };
        let Some(name) = self.prompt("Enter your name: ")? else {
            return Ok(());
        };
        let default_days = self.state.config.loans.default_days;
        let Some(days) = self.prompt(&format!("Enter days to borrow [{}]: ", default_days))? else {
            return Ok(());
        };
        let days = if days.is_empty() {
            default_days
        } else {
            match days.parse::<u32>() {
                Ok(days) => days,
                Err(_) => {
                    writeln!(self.output, "Invalid number of days '{}'", days)?;
                    return Ok(());
                }
            }
        };

        match self.state.borrow(id, &name, days) {
            Ok(receipt) => {
                let item = self.state.lookup(receipt.item_id)?;
                writeln!(
                    self.output,
                    "Borrowed item: {} by {} until {}",
                    item,
                    receipt.borrower,
                    receipt.due_date.format("%Y-%m-%d %H:%M")
                )?;
            }
            Err(err) => self.report(err)?,
        }
        Ok(())
    }

    fn return_item(&mut self) -> AppResult<()> {
        let Some(id) = self.prompt_id("Enter Item ID to return: ")? else {
            return Ok(());
        };

        match self.state.return_item(id) {
            Ok(fine) => {
                if let Some(fine) = fine {
                    writeln!(self.output, "Fine applied: {}", fine)?;
                }
                let item = self.state.lookup(id)?;
                writeln!(self.output, "Returned item: {}", item)?;
            }
            Err(err) => self.report(err)?,
        }
        Ok(())
    }

    fn play(&mut self) -> AppResult<()> {
        let Some(id) = self.prompt_id("Enter AudioBook ID: ")? else {
            return Ok(());
        };
        match self.state.play(id) {
            Ok(playback) => writeln!(self.output, "{}", playback)?,
            Err(err) => self.report(err)?,
        }
        Ok(())
    }

    fn archive(&mut self) -> AppResult<()> {
        let Some(id) = self.prompt_id("Enter E-Magazine ID: ")? else {
            return Ok(());
        };
        match self.state.archive(id) {
            Ok(archived) => writeln!(self.output, "{}", archived)?,
            Err(err) => self.report(err)?,
        }
        Ok(())
    }

    fn search(&mut self) -> AppResult<()> {
        let Some(keyword) = self.prompt("Enter keyword (type/title): ")? else {
            return Ok(());
        };

        let mut found = 0usize;
        for item in self.state.search(&keyword) {
            writeln!(self.output, "{}", item)?;
            found += 1;
        }
        if found == 0 {
            writeln!(self.output, "No items match '{}'", keyword)?;
        }
        Ok(())
    }

    fn show_fines(&mut self) -> AppResult<()> {
        writeln!(self.output, "\n--- All Fines ---")?;
        let fines = self.state.list_fines();
        if fines.is_empty() {
            writeln!(self.output, "No fines recorded.")?;
        }
        for fine in fines {
            writeln!(self.output, "{}", fine)?;
        }
        Ok(())
    }
}
