use crate::glyph::Glyph;

/// Keyframe set a background glyph floats along. See `driftA..driftC` in
/// the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Drift {
    #[default]
    A,
    B,
    C,
}

impl Drift {
    pub const fn class(self) -> &'static str {
        match self {
            Drift::A => "driftA",
            Drift::B => "driftB",
            Drift::C => "driftC",
        }
    }
}

/// Placement and animation of one ambient background glyph.
///
/// `top`/`left` are percentages of the section box, `depth` is the
/// `translateZ` offset in px (negative pushes the glyph back).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoration {
    pub glyph: Glyph,
    pub top: u8,
    pub left: u8,
    pub size: u16,
    pub rotate: i16,
    pub opacity: f32,
    pub blur: f32,
    pub depth: i16,
    pub drift: Drift,
    pub duration: u8,
    pub delay: u8,
}

impl Decoration {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        glyph: Glyph,
        top: u8,
        left: u8,
        size: u16,
        rotate: i16,
        opacity: f32,
        blur: f32,
        depth: i16,
        drift: Drift,
        duration: u8,
    ) -> Self {
        Self {
            glyph,
            top,
            left,
            size,
            rotate,
            opacity,
            blur,
            depth,
            drift,
            duration,
            delay: 0,
        }
    }

    pub fn class(&self) -> String {
        format!("bgIcon {}", self.drift.class())
    }

    pub fn style(&self) -> String {
        format!(
            "top: {}%; left: {}%; font-size: {}px; opacity: {}; filter: blur({}px); \
             transform: translateZ({}px) rotate({}deg); \
             animation-duration: {}s; animation-delay: {}s;",
            self.top,
            self.left,
            self.size,
            self.opacity,
            self.blur,
            self.depth,
            self.rotate,
            self.duration,
            self.delay,
        )
    }
}

pub static ABOUT_BG: &[Decoration] = &[
    Decoration::new(Glyph::Terminal, 12, 6, 120, -12, 0.07, 0.7, -260, Drift::A, 22),
    Decoration::new(Glyph::Code, 18, 78, 140, 10, 0.06, 0.9, -280, Drift::B, 24),
    Decoration::new(Glyph::Cogs, 62, 10, 160, 8, 0.05, 1.0, -320, Drift::C, 26),
    Decoration::new(Glyph::ProjectDiagram, 70, 76, 135, -8, 0.06, 0.9, -300, Drift::A, 25),
    Decoration::new(Glyph::GitAlt, 35, 20, 120, 14, 0.05, 1.0, -330, Drift::C, 27),
    Decoration::new(Glyph::Bug, 30, 58, 110, -6, 0.04, 1.1, -360, Drift::A, 28),
    Decoration::new(Glyph::Shield, 78, 40, 125, 12, 0.04, 1.1, -340, Drift::B, 30),
    Decoration::new(Glyph::Linux, 10, 45, 105, 6, 0.04, 1.2, -380, Drift::C, 32),
    Decoration::new(Glyph::Windows, 55, 88, 100, -10, 0.035, 1.2, -380, Drift::A, 33),
];

pub static SKILLS_BG: &[Decoration] = &[
    Decoration::new(Glyph::React, 12, 8, 170, -10, 0.055, 1.2, -420, Drift::A, 28),
    Decoration::new(Glyph::Python, 10, 78, 180, 10, 0.05, 1.3, -430, Drift::B, 30),
    Decoration::new(Glyph::Java, 74, 10, 160, 8, 0.045, 1.4, -460, Drift::C, 32),
    Decoration::new(Glyph::NodeJs, 76, 78, 180, -8, 0.045, 1.4, -470, Drift::A, 34),
    Decoration::new(Glyph::Database, 44, 50, 155, 12, 0.04, 1.5, -500, Drift::B, 36),
    Decoration::new(Glyph::Cloud, 26, 60, 155, 6, 0.04, 1.5, -520, Drift::C, 38),
];

pub static PROJECTS_BG: &[Decoration] = &[
    Decoration::new(Glyph::Robot, 10, 10, 175, -8, 0.045, 1.4, -460, Drift::A, 30),
    Decoration::new(Glyph::Brain, 12, 78, 185, 10, 0.045, 1.5, -470, Drift::B, 32),
    Decoration::new(Glyph::ChartLine, 72, 8, 165, 10, 0.04, 1.5, -500, Drift::C, 34),
    Decoration::new(Glyph::ProjectDiagram, 75, 78, 170, -10, 0.04, 1.6, -520, Drift::A, 36),
    Decoration::new(Glyph::NetworkWired, 44, 18, 140, 8, 0.04, 1.6, -520, Drift::B, 38),
    Decoration::new(Glyph::Lock, 42, 80, 140, -8, 0.04, 1.6, -520, Drift::C, 40),
    Decoration::new(Glyph::Database, 20, 46, 155, 12, 0.035, 1.7, -540, Drift::A, 42),
    Decoration::new(Glyph::CloudUpload, 62, 46, 155, -12, 0.035, 1.7, -560, Drift::B, 44),
];

pub static EXPERIENCE_BG: &[Decoration] = &[
    Decoration::new(Glyph::Aws, 10, 8, 175, -10, 0.045, 1.4, -480, Drift::A, 32),
    Decoration::new(Glyph::Docker, 12, 80, 175, 10, 0.045, 1.4, -480, Drift::B, 34),
    Decoration::new(Glyph::Server, 74, 10, 165, 8, 0.04, 1.5, -520, Drift::C, 36),
    Decoration::new(Glyph::Cloud, 72, 78, 175, -10, 0.04, 1.5, -540, Drift::A, 38),
    Decoration::new(Glyph::Shield, 42, 18, 145, 6, 0.04, 1.6, -560, Drift::B, 40),
    Decoration::new(Glyph::Key, 44, 80, 145, -6, 0.04, 1.6, -560, Drift::C, 42),
    Decoration::new(Glyph::GitAlt, 22, 46, 150, 12, 0.035, 1.7, -580, Drift::A, 44),
    Decoration::new(Glyph::Cogs, 62, 46, 155, -12, 0.035, 1.7, -600, Drift::B, 46),
];

pub static CONTACT_BG: &[Decoration] = &[
    Decoration::new(Glyph::Envelope, 12, 10, 175, -8, 0.045, 1.4, -480, Drift::A, 34),
    Decoration::new(Glyph::Linkedin, 10, 78, 175, 10, 0.045, 1.4, -480, Drift::B, 36),
    Decoration::new(Glyph::Github, 74, 10, 165, 8, 0.04, 1.5, -520, Drift::C, 38),
    Decoration::new(Glyph::Handshake, 74, 78, 175, -10, 0.04, 1.5, -540, Drift::A, 40),
    Decoration::new(Glyph::UserTie, 44, 18, 145, 6, 0.04, 1.6, -560, Drift::B, 42),
    Decoration::new(Glyph::Phone, 44, 80, 145, -6, 0.04, 1.6, -560, Drift::C, 44),
];
