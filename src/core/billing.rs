use crate::core::repository::Repository;
use crate::domain::model::{round_cents, Boat, Location};
use crate::utils::error::{BillingError, PaymentError, RepoError, Result};
use serde::{Deserialize, Serialize};

pub const SLIP_RATE: f64 = 12.5;
pub const LAND_RATE: f64 = 14.0;
pub const TRAILOR_RATE: f64 = 25.0;
pub const STORAGE_RATE: f64 = 11.2;

/// Monthly charge per foot of boat length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateTable {
    pub slip: f64,
    pub land: f64,
    pub trailor: f64,
    pub storage: f64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            slip: SLIP_RATE,
            land: LAND_RATE,
            trailor: TRAILOR_RATE,
            storage: STORAGE_RATE,
        }
    }
}

impl RateTable {
    pub fn rate(&self, location: Location) -> Option<f64> {
        match location {
            Location::Slip => Some(self.slip),
            Location::Land => Some(self.land),
            Location::Trailor => Some(self.trailor),
            Location::Storage => Some(self.storage),
            Location::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccrualReport {
    pub charged: usize,
    pub total: f64,
    pub skipped: Vec<BillingError>,
}

#[derive(Debug, Clone, Default)]
pub struct BillingEngine {
    rates: RateTable,
}

impl BillingEngine {
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn monthly_charge(&self, boat: &Boat) -> std::result::Result<f64, BillingError> {
        self.rates
            .rate(boat.location())
            .map(|rate| rate * f64::from(boat.length))
            .ok_or_else(|| BillingError::UnknownLocation {
                name: boat.name.clone(),
            })
    }

    /// Adds one month's charge to every boat. All charges are worked out
    /// before any balance changes; boats without a rate are reported and left
    /// alone.
    pub fn accrue_monthly_charges(&self, repository: &mut Repository) -> AccrualReport {
        let mut report = AccrualReport::default();

        let charges: Vec<Option<f64>> = repository
            .iter()
            .map(|boat| match self.monthly_charge(boat) {
                Ok(charge) => Some(charge),
                Err(e) => {
                    tracing::error!("{}", e);
                    report.skipped.push(e);
                    None
                }
            })
            .collect();

        for (boat, charge) in repository.iter_mut().zip(charges) {
            if let Some(charge) = charge {
                boat.balance = round_cents(boat.balance + charge);
                report.charged += 1;
                report.total += charge;
            }
        }
        report.total = round_cents(report.total);

        tracing::info!(
            "Monthly charges applied to {} boats (${:.2})",
            report.charged,
            report.total
        );
        report
    }

    /// Paying exactly the balance is allowed; paying more is not. The amount
    /// is rounded to cents first and must come to at least one cent.
    pub fn apply_payment(&self, boat: &mut Boat, amount: f64) -> std::result::Result<f64, PaymentError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(PaymentError::InvalidAmount { amount });
        }
        let amount = round_cents(amount);
        if amount <= 0.0 {
            return Err(PaymentError::InvalidAmount { amount });
        }
        if amount > boat.balance {
            return Err(PaymentError::Overpayment {
                amount,
                balance: boat.balance,
            });
        }

        boat.balance = round_cents(boat.balance - amount);
        tracing::info!(
            "Payment of ${:.2} from '{}', new balance ${:.2}",
            amount,
            boat.name,
            boat.balance
        );
        Ok(boat.balance)
    }

    /// First boat matching `name`, same rule as removal.
    pub fn process_payment(&self, repository: &mut Repository, name: &str, amount: f64) -> Result<f64> {
        let boat = repository
            .find_by_name_mut(name)
            .ok_or_else(|| RepoError::NotFound {
                name: name.to_string(),
            })?;
        Ok(self.apply_payment(boat, amount)?)
    }
}
