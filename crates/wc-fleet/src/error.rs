use thiserror::Error;

use wc_core::{AnimalKind, CaptureId, PointId};

/// Refused capture-vehicle requests.
///
/// None of these change vehicle or point state; the scheduler treats them
/// as "move on to the next point".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FleetError {
    #[error("{0}s are not captured")]
    NotCapturable(AnimalKind),

    #[error("{0} is full")]
    VehicleFull(CaptureId),

    #[error("no {kind} at {point}")]
    NoneAtPoint { kind: AnimalKind, point: PointId },
}

pub type FleetResult<T> = Result<T, FleetError>;
