use std::fmt;

/// Identifies the client on whose behalf a parking session is requested.
///
/// Identities are assigned by the caller (e.g. from an account database) and are opaque to
/// the allocator; all the allocator requires is that they are stable and unique per client.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ClientId(u64);

impl ClientId {
    /// Creates a client identity from a caller-assigned value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value of the identity.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ClientId {
    #[cfg_attr(test, mutants::skip)] // No API contract for the exact rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The broad category of a vehicle.
///
/// Purely descriptive today: any free spot satisfies any vehicle, so the kind does not
/// influence allocation. It is carried on the session for display and record keeping.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum VehicleKind {
    /// A passenger car.
    Car,

    /// A motorcycle.
    Motorcycle,

    /// A truck.
    Truck,
}

impl fmt::Display for VehicleKind {
    #[cfg_attr(test, mutants::skip)] // No API contract for the exact rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Car => write!(f, "car"),
            Self::Motorcycle => write!(f, "motorcycle"),
            Self::Truck => write!(f, "truck"),
        }
    }
}

/// Describes the vehicle a parking session is requested for.
///
/// Passive data with no behavior: the allocator carries it on the session untouched.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Vehicle {
    kind: VehicleKind,
    plate: String,
}

impl Vehicle {
    /// Creates a vehicle descriptor from its kind and registration plate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use parking_allocator::{Vehicle, VehicleKind};
    ///
    /// let vehicle = Vehicle::new(VehicleKind::Motorcycle, "MC-42");
    /// assert_eq!(vehicle.plate(), "MC-42");
    /// ```
    pub fn new(kind: VehicleKind, plate: impl Into<String>) -> Self {
        Self {
            kind,
            plate: plate.into(),
        }
    }

    /// Returns the kind of this vehicle.
    #[must_use]
    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    /// Returns the registration plate of this vehicle.
    #[must_use]
    pub fn plate(&self) -> &str {
        &self.plate
    }
}
