//! Decorative twinkling star background. Purely visual; nothing else reads
//! it.

use rand::Rng;

/// How long one star stays on screen before its animation cycle restarts.
pub const STAR_LIFETIME_SECS: f32 = 8.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub size_px: f32,
    pub left_vw: f32,
    pub top_vh: f32,
    pub opacity: f32,
    pub twinkle_secs: f32,
    pub delay_secs: f32,
}

impl Star {
    pub fn style(&self) -> String {
        format!(
            concat!(
                "width:{size:.2}px;height:{size:.2}px;",
                "left:{left:.2}vw;top:{top:.2}vh;opacity:{opacity:.2};",
                "animation:twinkle {twinkle:.2}s {delay:.2}s ",
                "infinite ease-in-out",
            ),
            size = self.size_px,
            left = self.left_vw,
            top = self.top_vh,
            opacity = self.opacity,
            twinkle = self.twinkle_secs,
            delay = self.delay_secs,
        )
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct StarField {
    pub stars: Vec<Star>,
}

impl StarField {
    pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                size_px: rng.gen_range(0.0..3.0),
                left_vw: rng.gen_range(0.0..100.0),
                top_vh: rng.gen_range(0.0..100.0),
                opacity: rng.gen_range(0.0..1.0),
                twinkle_secs: rng.gen_range(2.0..7.0),
                delay_secs: rng.gen_range(0.0..STAR_LIFETIME_SECS),
            })
            .collect();

        Self { stars }
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
