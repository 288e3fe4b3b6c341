use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use serde::{de, Deserialize, Deserializer};

use crate::errors::PaymentError;

const DECIMALS: u32 = 2;

/// Positive payment amount held in minor units (paise).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub fn from_minor(minor: i64) -> Result<Amount, PaymentError> {
        if minor <= 0 {
            return Err(PaymentError::InvalidAmount);
        }
        Ok(Amount(minor))
    }

    pub fn from_major(value: f64) -> Result<Amount, PaymentError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(PaymentError::InvalidAmount);
        }
        let minor = (value * 10f64.powi(DECIMALS as i32)).round();
        if minor >= i64::MAX as f64 {
            return Err(PaymentError::InvalidAmount);
        }
        Amount::from_minor(minor as i64)
    }

    pub fn minor(&self) -> i64 {
        self.0
    }
}

impl Debug for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unit = 10i64.pow(DECIMALS);
        write!(f, "{}.{:02}", self.0 / unit, self.0 % unit)
    }
}

impl TryFrom<&str> for Amount {
    type Error = PaymentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let val = value
            .trim()
            .parse::<f64>()
            .map_err(|_| PaymentError::InvalidAmount)?;
        Amount::from_major(val)
    }
}

impl FromStr for Amount {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::try_from(s)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Amount, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        let amount = match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Amount::from_major(value),
            Raw::Text(value) => Amount::try_from(value.as_str()),
        };
        amount.map_err(de::Error::custom)
    }
}
