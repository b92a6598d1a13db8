//! Terrain states held by the world layer.

/// Terrain of one world cell. Grass is the single blended foreground state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TerrainState {
    #[default]
    Soil,
    Grass,
}

impl TerrainState {
    #[inline]
    pub fn is_grass(&self) -> bool {
        matches!(self, TerrainState::Grass)
    }
}

impl std::fmt::Display for TerrainState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerrainState::Soil => write!(f, "soil"),
            TerrainState::Grass => write!(f, "grass"),
        }
    }
}

/// Payload of a world-layer tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorldCell {
    pub state: TerrainState,
}
