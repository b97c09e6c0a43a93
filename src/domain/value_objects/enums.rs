//! # Domain Enums
//!
//! Enumeration types for shipment and carrier classification.
//!
//! - [`BusinessLine`] - DKSH business unit a shipment belongs to
//! - [`CargoType`] - Dangerous or general goods
//! - [`TransportMode`] - Less-than-truckload or full-truckload
//! - [`BillingBasis`] - Net or gross contractual fee structure
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Business line a shipment is booked under.
///
/// # Examples
///
/// ```
/// use freight_quote::domain::value_objects::enums::BusinessLine;
///
/// assert_eq!(BusinessLine::Sci.to_string(), "SCI");
/// assert_eq!("phi".parse::<BusinessLine>().unwrap(), BusinessLine::Phi);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum BusinessLine {
    /// Specialty chemicals and ingredients.
    Sci = 0,
    /// Pharma and healthcare.
    Phi = 1,
    /// Performance and consumer ingredients.
    Pci = 2,
    /// Food and beverage ingredients.
    Fbi = 3,
}

impl BusinessLine {
    /// Every business line, in declaration order.
    pub const ALL: [Self; 4] = [Self::Sci, Self::Phi, Self::Pci, Self::Fbi];

    /// Returns the short code used in carrier contracts.
    #[inline]
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Sci => "SCI",
            Self::Phi => "PHI",
            Self::Pci => "PCI",
            Self::Fbi => "FBI",
        }
    }
}

impl fmt::Display for BusinessLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for BusinessLine {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SCI" => Ok(Self::Sci),
            "PHI" => Ok(Self::Phi),
            "PCI" => Ok(Self::Pci),
            "FBI" => Ok(Self::Fbi),
            _ => Err(ParseEnumError::InvalidValue("BusinessLine", s.to_string())),
        }
    }
}

/// Cargo classification.
///
/// # Examples
///
/// ```
/// use freight_quote::domain::value_objects::enums::CargoType;
///
/// assert!(CargoType::Dg.is_dangerous());
/// assert_eq!(CargoType::Ndg.to_string(), "NDG");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum CargoType {
    /// Dangerous goods.
    Dg = 0,
    /// Non-dangerous (general) goods.
    Ndg = 1,
}

impl CargoType {
    /// Every cargo type, in declaration order.
    pub const ALL: [Self; 2] = [Self::Dg, Self::Ndg];

    /// Returns true for dangerous goods.
    #[inline]
    #[must_use]
    pub const fn is_dangerous(self) -> bool {
        matches!(self, Self::Dg)
    }

    /// Returns the short code used in carrier contracts.
    #[inline]
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Dg => "DG",
            Self::Ndg => "NDG",
        }
    }
}

impl fmt::Display for CargoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CargoType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "").as_str() {
            "DG" => Ok(Self::Dg),
            "NDG" | "NONDG" => Ok(Self::Ndg),
            _ => Err(ParseEnumError::InvalidValue("CargoType", s.to_string())),
        }
    }
}

/// Road transport mode.
///
/// # Examples
///
/// ```
/// use freight_quote::domain::value_objects::enums::TransportMode;
///
/// assert_eq!("ftl".parse::<TransportMode>().unwrap(), TransportMode::Ftl);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum TransportMode {
    /// Less than truckload.
    Ltl = 0,
    /// Full truckload.
    Ftl = 1,
}

impl TransportMode {
    /// Every transport mode, in declaration order.
    pub const ALL: [Self; 2] = [Self::Ltl, Self::Ftl];

    /// Returns the short code used in carrier contracts.
    #[inline]
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ltl => "LTL",
            Self::Ftl => "FTL",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TransportMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LTL" => Ok(Self::Ltl),
            "FTL" => Ok(Self::Ftl),
            _ => Err(ParseEnumError::InvalidValue("TransportMode", s.to_string())),
        }
    }
}

/// Contractual billing basis of a carrier.
///
/// Informational only, pricing never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum BillingBasis {
    /// Net billing.
    #[default]
    Net,
    /// Gross billing.
    Gross,
}

impl fmt::Display for BillingBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Net => write!(f, "Net"),
            Self::Gross => write!(f, "Gross"),
        }
    }
}

impl FromStr for BillingBasis {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "net" => Ok(Self::Net),
            "gross" => Ok(Self::Gross),
            _ => Err(ParseEnumError::InvalidValue("BillingBasis", s.to_string())),
        }
    }
}

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEnumError {
    /// The provided string value is not valid for the enum.
    #[error("invalid {0} value: '{1}'")]
    InvalidValue(&'static str, String),
}
