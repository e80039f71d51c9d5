// Fill and stroke styles for particles and their proximity links,
// formatted as CSS color strings for the 2d canvas context

/// One of the two hues a particle can spawn with. Saturation and lightness
/// are fixed; only the hue angle and the per-particle alpha vary.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Hue {
    Violet,
    Cyan,
}

impl Hue {
    pub fn degrees(self) -> u32 {
        match self {
            Hue::Violet => 270,
            Hue::Cyan => 190,
        }
    }

    /// Fill style for a particle disc, e.g. `hsla(270, 80%, 65%, 0.35)`.
    pub fn fill_style(self, alpha: f64) -> String {
        format!("hsla({}, 80%, 65%, {})", self.degrees(), alpha)
    }
}

/// Stroke style for a proximity link. The link hue is fixed and distinct
/// from both particle hues.
pub fn link_style(alpha: f64) -> String {
    format!("rgba(124, 58, 237, {})", alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_style_varies_only_hue_and_alpha() {
        assert_eq!(Hue::Violet.fill_style(0.5), "hsla(270, 80%, 65%, 0.5)");
        assert_eq!(Hue::Cyan.fill_style(0.1), "hsla(190, 80%, 65%, 0.1)");
    }

    #[test]
    fn link_style_carries_alpha() {
        assert_eq!(link_style(0.024), "rgba(124, 58, 237, 0.024)");
    }
}
