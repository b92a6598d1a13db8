//! Blend Classification
//!
//! Maps the terrain of the four world cells around a mesh cell to the
//! blend sprite drawn in that mesh cell and its rotation. This is the
//! 16-case marching squares table collapsed onto five sprites by symmetry:
//!
//! ```text
//! grass corners   sprite        rotation picks
//! 0               none
//! 1               Corner        which corner is grass
//! 2 (shared edge) Edge          which edge is grass
//! 2 (diagonal)    Diagonal      which diagonal is grass
//! 3               InnerCorner   which corner is soil
//! 4               Full          always 0
//! ```
//!
//! Sprites are authored with their grass in the bottom-right (Corner),
//! right edge (Edge), TR/BL diagonal (Diagonal) and everything but the
//! top-left (InnerCorner); rotations are clockwise on screen.

use super::terrain::TerrainState;

/// One corner of a mesh cell's 2x2 world neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];
}

/// Terrain at the four corners of a mesh cell. `None` marks a corner with
/// no world cell under it (outer border of the mesh grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CornerStates {
    pub tl: Option<TerrainState>,
    pub tr: Option<TerrainState>,
    pub bl: Option<TerrainState>,
    pub br: Option<TerrainState>,
}

impl CornerStates {
    pub fn new(
        tl: Option<TerrainState>,
        tr: Option<TerrainState>,
        bl: Option<TerrainState>,
        br: Option<TerrainState>,
    ) -> Self {
        Self { tl, tr, bl, br }
    }

    /// All four corners present with the same terrain.
    pub fn uniform(state: TerrainState) -> Self {
        Self::new(Some(state), Some(state), Some(state), Some(state))
    }

    pub fn get(&self, corner: Corner) -> Option<TerrainState> {
        match corner {
            Corner::TopLeft => self.tl,
            Corner::TopRight => self.tr,
            Corner::BottomLeft => self.bl,
            Corner::BottomRight => self.br,
        }
    }

    pub fn set(&mut self, corner: Corner, state: Option<TerrainState>) {
        match corner {
            Corner::TopLeft => self.tl = state,
            Corner::TopRight => self.tr = state,
            Corner::BottomLeft => self.bl = state,
            Corner::BottomRight => self.br = state,
        }
    }

    /// A missing corner never counts as grass.
    #[inline]
    pub fn is_grass(&self, corner: Corner) -> bool {
        self.get(corner).is_some_and(|s| s.is_grass())
    }

    pub fn grass_count(&self) -> u8 {
        Corner::ALL.iter().filter(|&&c| self.is_grass(c)).count() as u8
    }
}

/// Blend sprites, numbered by their atlas index. Index 0 is the plain
/// soil tile of the world layer and never appears on the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BlendSprite {
    /// One grass corner
    Corner = 1,
    /// Two grass corners sharing an edge
    Edge = 2,
    /// Two grass corners on a diagonal
    Diagonal = 3,
    /// Three grass corners
    InnerCorner = 4,
    /// All grass
    Full = 5,
}

impl BlendSprite {
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Sprite rotation. Only the four axis-aligned turns occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    NegDeg90,
}

impl Rotation {
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::NegDeg90 => -90,
        }
    }

    pub fn radians(self) -> f32 {
        (self.degrees() as f32).to_radians()
    }

    /// Clockwise quarter turns in 0..4.
    pub fn quarter_turns(self) -> u8 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::NegDeg90 => 3,
        }
    }
}

/// What a mesh cell draws: a sprite and its rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlendTile {
    pub sprite: BlendSprite,
    pub rotation: Rotation,
}

impl BlendTile {
    pub fn new(sprite: BlendSprite, rotation: Rotation) -> Self {
        Self { sprite, rotation }
    }
}

/// Classify a 2x2 neighborhood into the blend tile to draw, or `None`
/// when no corner is grass.
///
/// Pure and total over every combination of present/absent corners.
pub fn classify(corners: &CornerStates) -> Option<BlendTile> {
    let tl = corners.is_grass(Corner::TopLeft);
    let tr = corners.is_grass(Corner::TopRight);
    let bl = corners.is_grass(Corner::BottomLeft);
    let br = corners.is_grass(Corner::BottomRight);

    let tile = |sprite, rotation| Some(BlendTile::new(sprite, rotation));

    match corners.grass_count() {
        0 => None,
        1 => match (tl, tr, bl, br) {
            (true, _, _, _) => tile(BlendSprite::Corner, Rotation::Deg180),
            (_, true, _, _) => tile(BlendSprite::Corner, Rotation::NegDeg90),
            (_, _, true, _) => tile(BlendSprite::Corner, Rotation::Deg90),
            (_, _, _, true) => tile(BlendSprite::Corner, Rotation::Deg0),
            _ => unclassified(corners),
        },
        2 => match (tl, tr, bl, br) {
            (true, true, false, false) => tile(BlendSprite::Edge, Rotation::NegDeg90),
            (true, false, true, false) => tile(BlendSprite::Edge, Rotation::Deg180),
            (false, true, false, true) => tile(BlendSprite::Edge, Rotation::Deg0),
            (false, false, true, true) => tile(BlendSprite::Edge, Rotation::Deg90),
            (true, false, false, true) => tile(BlendSprite::Diagonal, Rotation::Deg90),
            (false, true, true, false) => tile(BlendSprite::Diagonal, Rotation::Deg0),
            _ => unclassified(corners),
        },
        3 => match (tl, tr, bl, br) {
            (false, _, _, _) => tile(BlendSprite::InnerCorner, Rotation::Deg0),
            (_, false, _, _) => tile(BlendSprite::InnerCorner, Rotation::Deg90),
            (_, _, false, _) => tile(BlendSprite::InnerCorner, Rotation::NegDeg90),
            (_, _, _, false) => tile(BlendSprite::InnerCorner, Rotation::Deg180),
            _ => unclassified(corners),
        },
        4 => tile(BlendSprite::Full, Rotation::Deg0),
        _ => unclassified(corners),
    }
}

/// A corner pattern the table does not cover. Fails loudly in debug builds
/// and draws nothing in release builds.
fn unclassified(corners: &CornerStates) -> Option<BlendTile> {
    debug_assert!(false, "blend table has no entry for {corners:?}");
    tracing::error!(?corners, "unclassified blend neighborhood");
    None
}
