//! Request bodies for subscription lifecycle calls.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Billing frequency codes used by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Biannually,
    Annually,
}

impl Frequency {
    /// Numeric code sent on the wire.
    pub fn code(&self) -> u8 {
        match self {
            Frequency::Daily => 1,
            Frequency::Weekly => 2,
            Frequency::Monthly => 3,
            Frequency::Quarterly => 4,
            Frequency::Biannually => 5,
            Frequency::Annually => 6,
        }
    }
}

impl From<Frequency> for u8 {
    fn from(frequency: Frequency) -> Self {
        frequency.code()
    }
}

impl TryFrom<u8> for Frequency {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Frequency::Daily),
            2 => Ok(Frequency::Weekly),
            3 => Ok(Frequency::Monthly),
            4 => Ok(Frequency::Quarterly),
            5 => Ok(Frequency::Biannually),
            6 => Ok(Frequency::Annually),
            other => Err(format!("unknown frequency code {}", other)),
        }
    }
}

/// Partial update of a subscription. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionUpdate {
    /// Remaining number of billing cycles (0 means indefinite).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycles: Option<u32>,

    /// New recurring amount in cents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    /// Next run date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
}

impl SubscriptionUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cycles(mut self, cycles: u32) -> Self {
        self.cycles = Some(cycles);
        self
    }

    pub fn with_amount(mut self, cents: i64) -> Self {
        self.amount = Some(cents);
        self
    }

    pub fn with_run_date(mut self, run_date: NaiveDate) -> Self {
        self.run_date = Some(run_date);
        self
    }

    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_none()
            && self.amount.is_none()
            && self.run_date.is_none()
            && self.frequency.is_none()
    }

    /// Set fields as `(name, value)` pairs, in wire form, for request signing.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if let Some(cycles) = self.cycles {
            fields.push(("cycles", cycles.to_string()));
        }
        if let Some(amount) = self.amount {
            fields.push(("amount", amount.to_string()));
        }
        if let Some(run_date) = self.run_date {
            fields.push(("run_date", run_date.format("%Y-%m-%d").to_string()));
        }
        if let Some(frequency) = self.frequency {
            fields.push(("frequency", frequency.code().to_string()));
        }
        fields
    }
}

/// Body of a pause call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseRequest {
    /// Number of billing cycles to skip.
    pub cycles: u32,
}

impl Default for PauseRequest {
    fn default() -> Self {
        Self { cycles: 1 }
    }
}

impl PauseRequest {
    /// Pause for `cycles` cycles; zero falls back to the default of one.
    pub fn new(cycles: Option<u32>) -> Self {
        match cycles {
            Some(cycles) if cycles > 0 => Self { cycles },
            _ => Self::default(),
        }
    }

    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![("cycles", self.cycles.to_string())]
    }
}
