//! Interactive menu over the repository and billing engine.
//!
//! Each command reads what it needs from `input`, runs exactly one core
//! operation and reports the outcome on `out`. End of input counts as exit.

use crate::app::inventory;
use crate::core::billing::BillingEngine;
use crate::core::codec;
use crate::core::repository::Repository;
use crate::utils::error::{PaymentError, RepoError, Result};
use crate::utils::validation::Validate;
use std::io::{BufRead, Write};

pub const MENU_PROMPT: &str = "(I)nventory, (A)dd, (R)emove, (P)ayment, (M)onth, e(X)it: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Inventory,
    Add,
    Remove,
    Payment,
    Month,
    Exit,
}

impl Command {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'i' => Some(Command::Inventory),
            'a' => Some(Command::Add),
            'r' => Some(Command::Remove),
            'p' => Some(Command::Payment),
            'm' => Some(Command::Month),
            'x' => Some(Command::Exit),
            _ => None,
        }
    }
}

pub struct Session {
    title: String,
    repository: Repository,
    billing: BillingEngine,
}

impl Session {
    pub fn new(title: impl Into<String>, repository: Repository, billing: BillingEngine) -> Self {
        Self {
            title: title.into(),
            repository,
            billing,
        }
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn into_repository(self) -> Repository {
        self.repository
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        let banner = format!("Welcome to the {}!", self.title);
        writeln!(out, "{}", banner)?;
        writeln!(out, "{}", "-".repeat(banner.chars().count()))?;

        loop {
            let Some(line) = prompt(input, out, MENU_PROMPT)? else {
                tracing::debug!("End of input, leaving the menu");
                break;
            };
            let Some(choice) = line.trim().chars().next() else {
                continue;
            };

            match Command::from_char(choice) {
                Some(Command::Inventory) => inventory::write_inventory(&self.repository, out)?,
                Some(Command::Add) => self.add(input, out)?,
                Some(Command::Remove) => self.remove(input, out)?,
                Some(Command::Payment) => self.payment(input, out)?,
                Some(Command::Month) => self.month(out)?,
                Some(Command::Exit) => break,
                None => writeln!(out, "Invalid option: {}", choice)?,
            }
        }

        writeln!(out, "Exiting the {}.", self.title)?;
        Ok(())
    }

    fn add<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        let Some(line) = prompt(input, out, "Enter boat data in CSV format: ")? else {
            return Ok(());
        };

        // 滿了就不必解析
        if self.repository.is_full() {
            let e = RepoError::CapacityExceeded {
                capacity: self.repository.capacity(),
            };
            writeln!(out, "Error: {}.", e)?;
            return Ok(());
        }

        let boat = match codec::decode_row(&line) {
            Ok(boat) => boat,
            Err(e) => {
                writeln!(out, "Error: Invalid boat data: {}", e)?;
                return Ok(());
            }
        };

        if let Err(e) = boat.validate() {
            tracing::warn!("Adding '{}' anyway: {}", boat.name, e);
        }

        match self.repository.add(boat) {
            Ok(()) => writeln!(out, "Boat added successfully!")?,
            Err(e) => writeln!(out, "Error: {}.", e)?,
        }
        Ok(())
    }

    fn remove<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        let Some(name) = prompt(input, out, "Enter boat name: ")? else {
            return Ok(());
        };

        match self.repository.remove_by_name(&name) {
            Ok(_) => writeln!(out, "The boat has been removed successfully!")?,
            Err(_) => writeln!(out, "Uh-oh. No boats with that name.")?,
        }
        Ok(())
    }

    fn payment<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        let Some(name) = prompt(input, out, "Please enter boat name: ")? else {
            return Ok(());
        };

        let Some(boat) = self.repository.find_by_name_mut(&name) else {
            writeln!(out, "Uh-oh. No boats with that name.")?;
            return Ok(());
        };

        let Some(text) = prompt(input, out, "Please enter the amount to be paid: ")? else {
            return Ok(());
        };
        let Ok(amount) = text.trim().parse::<f64>() else {
            writeln!(out, "Invalid amount: '{}'", text.trim())?;
            return Ok(());
        };

        match self.billing.apply_payment(boat, amount) {
            Ok(balance) => writeln!(out, "Payment successful. New balance is ${:.2}", balance)?,
            Err(PaymentError::Overpayment { balance, .. }) => {
                writeln!(out, "That is more than the amount owed, ${:.2}", balance)?
            }
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
        Ok(())
    }

    fn month<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let report = self.billing.accrue_monthly_charges(&mut self.repository);
        for skipped in &report.skipped {
            writeln!(out, "Error: {}", skipped)?;
        }
        writeln!(out, "Monthly charges updated.")?;
        Ok(())
    }
}

/// `None` at end of input. The returned line has its line ending removed.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
