//! Typed indices for points, edges and vehicles.
//!
//! Every id is a plain `u32` newtype.  Points and edges index the graph's
//! arrays and the point store; truck and capture ids index their fleet
//! `Vec`s, and a fleet only ever grows, so an id stays valid for the run.

use std::fmt;

/// Declare an id newtype that displays as `"<label> <n>"`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Position in the owning `Vec`.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", $label, self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// A collection point.
    pub struct PointId(u32) => "point";
}

typed_id! {
    /// One direction of a road in the CSR arrays.
    pub struct EdgeId(u32) => "edge";
}

typed_id! {
    pub struct TruckId(u32) => "truck";
}

typed_id! {
    pub struct CaptureId(u32) => "capture vehicle";
}
