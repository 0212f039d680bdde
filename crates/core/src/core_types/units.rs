//! Semantic unit types for type-safe quantity handling
//!
//! This module provides newtype wrappers for the physical and monetary quantities
//! the cost engine works with, to prevent accidental mixing of incompatible units
//! (e.g., miles with kilometres, or litres with kilowatt-hours).
//!
//! # Design Philosophy
//! - All quantities use f64; journey-cost arithmetic is tiny and currency output
//!   is rounded to 2 decimal places, so precision wins over width
//! - Implements common traits (Add, Sub, Mul, Div, Ord, Display, etc.)
//! - Provides explicit conversion methods between related types
//! - Serde support for serialization
//! - Total ordering via Ord trait (NaN handled via `total_cmp`)
//! - Private inner fields with validated constructors
//!
//! # Usage
//! ```
//! use drive_cost_core::core_types::units::{Kilometres, Miles};
//!
//! let trip = Kilometres::new(160.934);
//! let miles: Miles = trip.to_miles();
//! assert!((*miles - 100.0).abs() < 1e-9);
//!
//! // Use standard min/max from Ord trait
//! let a = Miles::new(50.0);
//! let b = Miles::new(120.0);
//! assert_eq!(a.max(b), Miles::new(120.0));
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Deref, DerefMut, Div, Mul, Sub, SubAssign};

/// Kilometres per statute mile (exact definition: 1 mile = 1.60934 km)
pub const KM_PER_MILE: f64 = 1.60934;

/// Litres per imperial (UK) gallon, the MPG basis used throughout
pub const LITRES_PER_UK_GALLON: f64 = 4.54609;

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// DISTANCE TYPES
// ============================================================================

/// Distance in statute miles
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Miles(f64);

impl Eq for Miles {}

impl PartialOrd for Miles {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Miles {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Miles {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for Miles {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl Miles {
    /// Create a new distance in miles
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "Miles::new: negative distance is invalid");
        Miles(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0 (non-negative distance).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        Miles(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to kilometres
    #[inline]
    #[must_use]
    pub fn to_kilometres(self) -> Kilometres {
        Kilometres(self.0 * KM_PER_MILE)
    }
}

impl From<Miles> for f64 {
    fn from(m: Miles) -> f64 {
        m.0
    }
}

impl Add for Miles {
    type Output = Miles;
    fn add(self, rhs: Miles) -> Miles {
        Miles(self.0 + rhs.0)
    }
}

impl Sub for Miles {
    type Output = Miles;
    fn sub(self, rhs: Miles) -> Miles {
        Miles(self.0 - rhs.0)
    }
}

impl Mul<f64> for Miles {
    type Output = Miles;
    fn mul(self, rhs: f64) -> Miles {
        Miles(self.0 * rhs)
    }
}

impl Div<f64> for Miles {
    type Output = Miles;
    fn div(self, rhs: f64) -> Miles {
        Miles(self.0 / rhs)
    }
}

impl fmt::Display for Miles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} mi", self.0)
    }
}

/// Distance in kilometres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Kilometres(f64);

impl Eq for Kilometres {}

impl PartialOrd for Kilometres {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kilometres {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Kilometres {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for Kilometres {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl Kilometres {
    /// Create a new distance in kilometres
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "Kilometres::new: negative distance is invalid");
        Kilometres(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0 (non-negative distance).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        Kilometres(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to statute miles
    #[inline]
    #[must_use]
    pub fn to_miles(self) -> Miles {
        Miles(self.0 / KM_PER_MILE)
    }
}

impl From<Kilometres> for f64 {
    fn from(km: Kilometres) -> f64 {
        km.0
    }
}

impl Add for Kilometres {
    type Output = Kilometres;
    fn add(self, rhs: Kilometres) -> Kilometres {
        Kilometres(self.0 + rhs.0)
    }
}

impl Sub for Kilometres {
    type Output = Kilometres;
    fn sub(self, rhs: Kilometres) -> Kilometres {
        Kilometres(self.0 - rhs.0)
    }
}

impl Mul<f64> for Kilometres {
    type Output = Kilometres;
    fn mul(self, rhs: f64) -> Kilometres {
        Kilometres(self.0 * rhs)
    }
}

impl Div<f64> for Kilometres {
    type Output = Kilometres;
    fn div(self, rhs: f64) -> Kilometres {
        Kilometres(self.0 / rhs)
    }
}

impl fmt::Display for Kilometres {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} km", self.0)
    }
}

// ============================================================================
// VOLUME / ENERGY TYPES
// ============================================================================

/// Liquid fuel volume in litres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Litres(f64);

impl Eq for Litres {}

impl PartialOrd for Litres {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Litres {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Litres {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for Litres {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl Litres {
    /// Create a new volume in litres
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "Litres::new: negative volume is invalid");
        Litres(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0 (non-negative volume).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        Litres(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Number of imperial gallons this volume represents
    #[inline]
    #[must_use]
    pub fn to_uk_gallons(self) -> f64 {
        self.0 / LITRES_PER_UK_GALLON
    }
}

impl From<Litres> for f64 {
    fn from(l: Litres) -> f64 {
        l.0
    }
}

impl Add for Litres {
    type Output = Litres;
    fn add(self, rhs: Litres) -> Litres {
        Litres(self.0 + rhs.0)
    }
}

impl Sub for Litres {
    type Output = Litres;
    fn sub(self, rhs: Litres) -> Litres {
        Litres(self.0 - rhs.0)
    }
}

impl Mul<f64> for Litres {
    type Output = Litres;
    fn mul(self, rhs: f64) -> Litres {
        Litres(self.0 * rhs)
    }
}

impl Div<f64> for Litres {
    type Output = Litres;
    fn div(self, rhs: f64) -> Litres {
        Litres(self.0 / rhs)
    }
}

impl fmt::Display for Litres {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} L", self.0)
    }
}

/// Electrical energy in kilowatt-hours
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KilowattHours(f64);

impl Eq for KilowattHours {}

impl PartialOrd for KilowattHours {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KilowattHours {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for KilowattHours {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for KilowattHours {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl KilowattHours {
    /// Create a new energy amount in kWh
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "KilowattHours::new: negative energy is invalid");
        KilowattHours(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0 (non-negative energy).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        KilowattHours(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<KilowattHours> for f64 {
    fn from(kwh: KilowattHours) -> f64 {
        kwh.0
    }
}

impl Add for KilowattHours {
    type Output = KilowattHours;
    fn add(self, rhs: KilowattHours) -> KilowattHours {
        KilowattHours(self.0 + rhs.0)
    }
}

impl Sub for KilowattHours {
    type Output = KilowattHours;
    fn sub(self, rhs: KilowattHours) -> KilowattHours {
        KilowattHours(self.0 - rhs.0)
    }
}

impl Mul<f64> for KilowattHours {
    type Output = KilowattHours;
    fn mul(self, rhs: f64) -> KilowattHours {
        KilowattHours(self.0 * rhs)
    }
}

impl Div<f64> for KilowattHours {
    type Output = KilowattHours;
    fn div(self, rhs: f64) -> KilowattHours {
        KilowattHours(self.0 / rhs)
    }
}

impl fmt::Display for KilowattHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} kWh", self.0)
    }
}

// ============================================================================
// MONETARY TYPE
// ============================================================================

/// Monetary amount in pounds sterling
///
/// Journey costs are always non-negative, but intermediate comparison arithmetic
/// subtracts totals, so `Sub` saturates at zero via [`Pounds::saturating_sub`]
/// only when requested; plain `Sub` keeps the signed value for difference maths.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Pounds(f64);

impl Eq for Pounds {}

impl PartialOrd for Pounds {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pounds {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Pounds {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for Pounds {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl Pounds {
    /// Zero cost
    pub const ZERO: Pounds = Pounds(0.0);

    /// Create a new monetary amount. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "Pounds::new: negative amount is invalid");
        Pounds(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0 (non-negative amount).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        Pounds(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Absolute difference between two amounts, always >= 0
    #[inline]
    #[must_use]
    pub fn abs_diff(self, other: Pounds) -> Pounds {
        Pounds((self.0 - other.0).abs())
    }

    /// Subtract, clamping at zero instead of going negative
    #[inline]
    #[must_use]
    pub fn saturating_sub(self, other: Pounds) -> Pounds {
        Pounds((self.0 - other.0).max(0.0))
    }
}

impl From<Pounds> for f64 {
    fn from(p: Pounds) -> f64 {
        p.0
    }
}

impl Add for Pounds {
    type Output = Pounds;
    fn add(self, rhs: Pounds) -> Pounds {
        Pounds(self.0 + rhs.0)
    }
}

impl AddAssign for Pounds {
    fn add_assign(&mut self, rhs: Pounds) {
        self.0 += rhs.0;
    }
}

impl Sub for Pounds {
    type Output = Pounds;
    fn sub(self, rhs: Pounds) -> Pounds {
        Pounds(self.0 - rhs.0)
    }
}

impl SubAssign for Pounds {
    fn sub_assign(&mut self, rhs: Pounds) {
        self.0 -= rhs.0;
    }
}

impl Mul<f64> for Pounds {
    type Output = Pounds;
    fn mul(self, rhs: f64) -> Pounds {
        Pounds(self.0 * rhs)
    }
}

impl Div<f64> for Pounds {
    type Output = Pounds;
    fn div(self, rhs: f64) -> Pounds {
        Pounds(self.0 / rhs)
    }
}

impl fmt::Display for Pounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "£{:.2}", self.0)
    }
}
