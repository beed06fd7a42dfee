//! Small pieces of per-component UI state.

/// Which face of the About flip card is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardFace {
    #[default]
    Front,
    Back,
}

impl CardFace {
    pub fn toggled(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }

    pub fn is_flipped(self) -> bool {
        matches!(self, Self::Back)
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Front => "flip-card",
            Self::Back => "flip-card flipped",
        }
    }
}

/// Intensity of the decorative glow behind a project card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Glow {
    #[default]
    Idle,
    Hovered,
}

impl Glow {
    pub fn from_hover(hovered: bool) -> Self {
        if hovered {
            Self::Hovered
        } else {
            Self::Idle
        }
    }

    pub fn opacity(self) -> f32 {
        match self {
            Self::Idle => 0.3,
            Self::Hovered => 0.8,
        }
    }

    /// `color` is a `#rrggbb` accent; the gradient uses it at 25% alpha.
    pub fn style(self, color: &str) -> String {
        format!(
            "background: radial-gradient(circle, {color}40 0%, transparent 70%); opacity: {};",
            self.opacity()
        )
    }
}

/// Load state of a third-party embed that has a static fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmbedStatus {
    #[default]
    Pending,
    Failed,
}

impl EmbedStatus {
    pub fn image_hidden(self) -> bool {
        matches!(self, Self::Failed)
    }

    pub fn fallback_visible(self) -> bool {
        matches!(self, Self::Failed)
    }

    pub fn image_style(self) -> &'static str {
        if self.image_hidden() {
            "display: none;"
        } else {
            ""
        }
    }

    pub fn fallback_class(self) -> &'static str {
        if self.fallback_visible() {
            "codolio-fallback show"
        } else {
            "codolio-fallback"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_card_alternates_from_front() {
        let faces = std::iter::successors(Some(CardFace::default()), |f| Some(f.toggled()))
            .take(5)
            .collect::<Vec<_>>();
        assert_eq!(
            faces,
            vec![
                CardFace::Front,
                CardFace::Back,
                CardFace::Front,
                CardFace::Back,
                CardFace::Front,
            ]
        );
        assert_eq!(CardFace::Front.class(), "flip-card");
        assert_eq!(CardFace::Back.class(), "flip-card flipped");
        assert!(CardFace::Back.is_flipped());
    }

    #[test]
    fn test_glow_enter_and_leave() {
        let mut glow = Glow::default();
        assert_eq!(glow.opacity(), 0.3);
        glow = Glow::from_hover(true);
        assert_eq!(glow.opacity(), 0.8);
        glow = Glow::from_hover(false);
        assert_eq!(glow, Glow::Idle);
        assert_eq!(
            Glow::Hovered.style("#ef4444"),
            "background: radial-gradient(circle, #ef444440 0%, transparent 70%); opacity: 0.8;"
        );
    }

    #[test]
    fn test_glow_is_per_card() {
        let mut cards = vec![Glow::default(); 3];
        cards[1] = Glow::from_hover(true);
        assert_eq!(cards, vec![Glow::Idle, Glow::Hovered, Glow::Idle]);
        cards[1] = Glow::from_hover(false);
        assert!(cards.iter().all(|g| *g == Glow::Idle));
    }

    #[test]
    fn test_embed_failure_swaps_to_fallback() {
        let status = EmbedStatus::default();
        assert!(!status.image_hidden());
        assert!(!status.fallback_visible());
        assert_eq!(status.image_style(), "");
        assert_eq!(status.fallback_class(), "codolio-fallback");

        let status = EmbedStatus::Failed;
        assert!(status.image_hidden());
        assert!(status.fallback_visible());
        assert_eq!(status.image_style(), "display: none;");
        assert_eq!(status.fallback_class(), "codolio-fallback show");
    }
}
