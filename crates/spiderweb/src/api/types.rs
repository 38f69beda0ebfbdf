use crate::core::rng::Rng;

/// Node palette. Sparks inherit the color of their source node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NodeColor {
    Blue = 0,
    Purple,
    Green,
}

impl NodeColor {
    pub const ALL: [NodeColor; 3] = [Self::Blue, Self::Purple, Self::Green];

    pub fn random(rng: &mut Rng) -> Self {
        Self::ALL[rng.next_int(Self::ALL.len() as u32) as usize]
    }

    /// CSS color string for canvas fill/stroke styles.
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Blue => "#00f3ff",
            Self::Purple => "#9d00ff",
            Self::Green => "#00ff9d",
        }
    }
}
