//! # Shipment Request
//!
//! The parameters a caller supplies to obtain carrier quotes.
//!
//! # Examples
//!
//! ```
//! use freight_quote::domain::entities::shipment::ShipmentRequest;
//! use freight_quote::domain::value_objects::{BusinessLine, CargoType, TransportMode};
//! use rust_decimal::Decimal;
//!
//! let request = ShipmentRequest::builder("Shanghai", "Guangzhou")
//!     .business_line(BusinessLine::Sci)
//!     .cargo_type(CargoType::Dg)
//!     .mode(TransportMode::Ltl)
//!     .weight_kg(Decimal::from(600))
//!     .volume_cbm(Decimal::new(15, 1))
//!     .build()
//!     .unwrap();
//!
//! assert!(!request.is_same_region());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{BusinessLine, CargoType, ChargeableWeight, TransportMode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cities offered by the quote form.
///
/// The evaluator does not restrict requests to this list.
pub const KNOWN_CITIES: [&str; 8] = [
    "Shanghai",
    "Zhangjiagang",
    "Guangzhou",
    "Beijing",
    "Jinan",
    "Chengdu",
    "Wuhan",
    "Shenzhen",
];

/// Heaviest accepted actual weight, in kg.
pub const MAX_WEIGHT_KG: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Largest accepted volume, in cbm.
pub const MAX_VOLUME_CBM: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Returns true if the city is one of [`KNOWN_CITIES`].
#[must_use]
pub fn is_known_city(city: &str) -> bool {
    KNOWN_CITIES.contains(&city)
}

/// A request for carrier quotes.
///
/// Immutable for the duration of an evaluation. [`ShipmentRequest::new`]
/// validates weight and volume; deserialized requests are taken as-is and
/// can be checked with [`ShipmentRequest::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRequest {
    origin: String,
    destination: String,
    business_line: BusinessLine,
    cargo_type: CargoType,
    mode: TransportMode,
    weight_kg: Decimal,
    volume_cbm: Decimal,
}

impl ShipmentRequest {
    /// Creates a validated request.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyLocation` if origin or destination is blank,
    /// `DomainError::InvalidWeight` if the weight is not positive,
    /// `DomainError::InvalidVolume` if the volume is negative and
    /// `DomainError::OutOfRange` if weight or volume is above
    /// [`MAX_WEIGHT_KG`] or [`MAX_VOLUME_CBM`].
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        business_line: BusinessLine,
        cargo_type: CargoType,
        mode: TransportMode,
        weight_kg: Decimal,
        volume_cbm: Decimal,
    ) -> DomainResult<Self> {
        let request = Self {
            origin: origin.into(),
            destination: destination.into(),
            business_line,
            cargo_type,
            mode,
            weight_kg,
            volume_cbm,
        };
        request.validate()?;
        Ok(request)
    }

    /// Starts a builder with the lane filled in.
    ///
    /// Defaults: SCI, DG, LTL, zero volume. Weight must be set.
    #[must_use]
    pub fn builder(
        origin: impl Into<String>,
        destination: impl Into<String>,
    ) -> ShipmentRequestBuilder {
        ShipmentRequestBuilder::new(origin, destination)
    }

    /// Checks the boundary invariants.
    ///
    /// # Errors
    ///
    /// Same as [`ShipmentRequest::new`].
    pub fn validate(&self) -> DomainResult<()> {
        if self.origin.trim().is_empty() {
            return Err(DomainError::EmptyLocation("origin"));
        }
        if self.destination.trim().is_empty() {
            return Err(DomainError::EmptyLocation("destination"));
        }
        if self.weight_kg <= Decimal::ZERO {
            return Err(DomainError::InvalidWeight(self.weight_kg));
        }
        if self.volume_cbm < Decimal::ZERO {
            return Err(DomainError::InvalidVolume(self.volume_cbm));
        }
        if self.weight_kg > MAX_WEIGHT_KG {
            return Err(DomainError::OutOfRange {
                field: "weight_kg",
                value: self.weight_kg,
                max: MAX_WEIGHT_KG,
            });
        }
        if self.volume_cbm > MAX_VOLUME_CBM {
            return Err(DomainError::OutOfRange {
                field: "volume_cbm",
                value: self.volume_cbm,
                max: MAX_VOLUME_CBM,
            });
        }
        Ok(())
    }

    /// Pickup city.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Delivery city.
    #[inline]
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Business line.
    #[inline]
    #[must_use]
    pub fn business_line(&self) -> BusinessLine {
        self.business_line
    }

    /// Cargo classification.
    #[inline]
    #[must_use]
    pub fn cargo_type(&self) -> CargoType {
        self.cargo_type
    }

    /// Transport mode.
    #[inline]
    #[must_use]
    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    /// Declared weight in kilograms.
    #[inline]
    #[must_use]
    pub fn weight_kg(&self) -> Decimal {
        self.weight_kg
    }

    /// Declared volume in cubic metres.
    #[inline]
    #[must_use]
    pub fn volume_cbm(&self) -> Decimal {
        self.volume_cbm
    }

    /// Billing weight for this request.
    #[must_use]
    pub fn chargeable_weight(&self) -> ChargeableWeight {
        ChargeableWeight::compute(self.weight_kg, self.volume_cbm)
    }

    /// Returns true when origin equals destination.
    #[must_use]
    pub fn is_same_region(&self) -> bool {
        self.origin == self.destination
    }
}

impl fmt::Display for ShipmentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} {}/{}/{} {}kg {}cbm",
            self.origin,
            self.destination,
            self.business_line,
            self.cargo_type,
            self.mode,
            self.weight_kg,
            self.volume_cbm
        )
    }
}

/// Builder for [`ShipmentRequest`].
#[derive(Debug, Clone)]
#[must_use]
pub struct ShipmentRequestBuilder {
    origin: String,
    destination: String,
    business_line: BusinessLine,
    cargo_type: CargoType,
    mode: TransportMode,
    weight_kg: Decimal,
    volume_cbm: Decimal,
}

impl ShipmentRequestBuilder {
    /// Creates a builder for the given lane.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            business_line: BusinessLine::Sci,
            cargo_type: CargoType::Dg,
            mode: TransportMode::Ltl,
            weight_kg: Decimal::ZERO,
            volume_cbm: Decimal::ZERO,
        }
    }

    /// Sets the business line.
    pub fn business_line(mut self, business_line: BusinessLine) -> Self {
        self.business_line = business_line;
        self
    }

    /// Sets the cargo type.
    pub fn cargo_type(mut self, cargo_type: CargoType) -> Self {
        self.cargo_type = cargo_type;
        self
    }

    /// Sets the transport mode.
    pub fn mode(mut self, mode: TransportMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the weight in kilograms.
    pub fn weight_kg(mut self, weight_kg: Decimal) -> Self {
        self.weight_kg = weight_kg;
        self
    }

    /// Sets the volume in cubic metres.
    pub fn volume_cbm(mut self, volume_cbm: Decimal) -> Self {
        self.volume_cbm = volume_cbm;
        self
    }

    /// Builds and validates the request.
    ///
    /// # Errors
    ///
    /// Same as [`ShipmentRequest::new`].
    pub fn build(self) -> DomainResult<ShipmentRequest> {
        ShipmentRequest::new(
            self.origin,
            self.destination,
            self.business_line,
            self.cargo_type,
            self.mode,
            self.weight_kg,
            self.volume_cbm,
        )
    }
}
