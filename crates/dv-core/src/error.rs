//! Render errors

use strum::Display;
use thiserror::Error;

use crate::description::Point;

/// What was being placed when a coordinate fell off the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Feature {
    Room,
    Door,
    Waypoint,
    Entity,
}

/// Every failure aborts the whole render; no partial map is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("invalid dimensions for {target}: {width}x{height}")]
    InvalidDimensions {
        target: String,
        width: i64,
        height: i64,
    },

    #[error("{feature} '{id}' at {position} lies outside the {width}x{height} grid")]
    OutOfBounds {
        feature: Feature,
        id: String,
        position: Point,
        width: usize,
        height: usize,
    },

    #[error("corridor '{corridor}' references unknown room '{room}'")]
    UnknownRoom { corridor: String, room: String },

    #[error("room '{room}' has no door connecting to corridor '{corridor}'")]
    UnresolvedDoor { corridor: String, room: String },

    #[error("corridor '{corridor}' has a diagonal segment from {from} to {to}")]
    InvalidCorridorSegment {
        corridor: String,
        from: Point,
        to: Point,
    },

    #[error("malformed dungeon description: {0}")]
    MalformedDescription(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_culprit() {
        let err = RenderError::OutOfBounds {
            feature: Feature::Door,
            id: "hall".to_string(),
            position: Point::new(9, -1),
            width: 5,
            height: 5,
        };
        assert_eq!(
            err.to_string(),
            "door 'hall' at (9, -1) lies outside the 5x5 grid"
        );

        let err = RenderError::InvalidCorridorSegment {
            corridor: "c1".to_string(),
            from: Point::new(2, 2),
            to: Point::new(5, 4),
        };
        assert_eq!(
            err.to_string(),
            "corridor 'c1' has a diagonal segment from (2, 2) to (5, 4)"
        );
    }
}
