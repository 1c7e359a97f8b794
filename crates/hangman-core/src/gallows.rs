//! Gallows figure model and geometry.
//!
//! All coordinates are in a square canvas space of [`CANVAS_SIZE`] units with
//! the origin at the top-left corner. Renderers scale this space to whatever
//! surface they draw on.

use crate::game::MAX_ATTEMPTS;
use kurbo::{BezPath, Circle, Line, Point, Shape};
use serde::{Deserialize, Serialize};

/// Side length of the gallows canvas.
pub const CANVAS_SIZE: f64 = 250.0;

/// Tolerance used when flattening curves into paths.
const PATH_TOLERANCE: f64 = 0.1;

/// The fixed frame drawn in every round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaffoldPiece {
    Base,
    Pole,
    Beam,
    Rope,
}

impl ScaffoldPiece {
    pub const ALL: [ScaffoldPiece; 4] = [
        ScaffoldPiece::Base,
        ScaffoldPiece::Pole,
        ScaffoldPiece::Beam,
        ScaffoldPiece::Rope,
    ];

    pub fn line(self) -> Line {
        match self {
            ScaffoldPiece::Base => Line::new((20.0, 230.0), (180.0, 230.0)),
            ScaffoldPiece::Pole => Line::new((50.0, 230.0), (50.0, 20.0)),
            ScaffoldPiece::Beam => Line::new((50.0, 20.0), (150.0, 20.0)),
            ScaffoldPiece::Rope => Line::new((150.0, 20.0), (150.0, 50.0)),
        }
    }

    pub fn path(self) -> BezPath {
        self.line().to_path(PATH_TOLERANCE)
    }
}

/// Body parts, one per wrong guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GallowsPart {
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl GallowsPart {
    /// Drawing order. The n-th part appears on the n-th wrong guess.
    pub const ALL: [GallowsPart; MAX_ATTEMPTS as usize] = [
        GallowsPart::Head,
        GallowsPart::Body,
        GallowsPart::LeftArm,
        GallowsPart::RightArm,
        GallowsPart::LeftLeg,
        GallowsPart::RightLeg,
    ];

    /// Number of wrong guesses after which this part is shown.
    pub fn threshold(self) -> u8 {
        match self {
            GallowsPart::Head => 1,
            GallowsPart::Body => 2,
            GallowsPart::LeftArm => 3,
            GallowsPart::RightArm => 4,
            GallowsPart::LeftLeg => 5,
            GallowsPart::RightLeg => 6,
        }
    }

    pub fn path(self) -> BezPath {
        let (from, to) = match self {
            GallowsPart::Head => {
                return Circle::new(Point::new(150.0, 70.0), 20.0).to_path(PATH_TOLERANCE);
            }
            GallowsPart::Body => ((150.0, 90.0), (150.0, 150.0)),
            GallowsPart::LeftArm => ((150.0, 100.0), (120.0, 130.0)),
            GallowsPart::RightArm => ((150.0, 100.0), (180.0, 130.0)),
            GallowsPart::LeftLeg => ((150.0, 150.0), (130.0, 190.0)),
            GallowsPart::RightLeg => ((150.0, 150.0), (170.0, 190.0)),
        };
        Line::new(from, to).to_path(PATH_TOLERANCE)
    }
}

/// Parts to draw when `attempts_remaining` attempts are left.
pub fn visible_parts(attempts_remaining: u8) -> Vec<GallowsPart> {
    let wrong = MAX_ATTEMPTS.saturating_sub(attempts_remaining);
    GallowsPart::ALL
        .into_iter()
        .filter(|part| part.threshold() <= wrong)
        .collect()
}
