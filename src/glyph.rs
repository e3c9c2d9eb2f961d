/// Icon-font glyphs used across the page.
///
/// Rendered as `<i class=...>` against the Font Awesome stylesheet linked
/// from the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Angular,
    Aws,
    Brain,
    Bug,
    CLang,
    ChartLine,
    Cloud,
    CloudUpload,
    Code,
    Cogs,
    Css3,
    Database,
    Docker,
    Envelope,
    GitAlt,
    Github,
    Handshake,
    Html5,
    Java,
    Key,
    Linkedin,
    Linux,
    Lock,
    NetworkWired,
    NodeJs,
    Phone,
    ProjectDiagram,
    Python,
    React,
    Robot,
    Server,
    Shield,
    Terminal,
    Tools,
    UserTie,
    Windows,
}

impl Glyph {
    pub const fn class(self) -> &'static str {
        match self {
            Glyph::Angular => "fa-brands fa-angular",
            Glyph::Aws => "fa-brands fa-aws",
            Glyph::Brain => "fa-solid fa-brain",
            Glyph::Bug => "fa-solid fa-bug",
            Glyph::CLang => "fa-solid fa-c",
            Glyph::ChartLine => "fa-solid fa-chart-line",
            Glyph::Cloud => "fa-solid fa-cloud",
            Glyph::CloudUpload => "fa-solid fa-cloud-arrow-up",
            Glyph::Code => "fa-solid fa-code",
            Glyph::Cogs => "fa-solid fa-gears",
            Glyph::Css3 => "fa-brands fa-css3-alt",
            Glyph::Database => "fa-solid fa-database",
            Glyph::Docker => "fa-brands fa-docker",
            Glyph::Envelope => "fa-solid fa-envelope",
            Glyph::GitAlt => "fa-brands fa-git-alt",
            Glyph::Github => "fa-brands fa-github",
            Glyph::Handshake => "fa-regular fa-handshake",
            Glyph::Html5 => "fa-brands fa-html5",
            Glyph::Java => "fa-brands fa-java",
            Glyph::Key => "fa-solid fa-key",
            Glyph::Linkedin => "fa-brands fa-linkedin",
            Glyph::Linux => "fa-brands fa-linux",
            Glyph::Lock => "fa-solid fa-lock",
            Glyph::NetworkWired => "fa-solid fa-network-wired",
            Glyph::NodeJs => "fa-brands fa-node-js",
            Glyph::Phone => "fa-solid fa-phone",
            Glyph::ProjectDiagram => "fa-solid fa-diagram-project",
            Glyph::Python => "fa-brands fa-python",
            Glyph::React => "fa-brands fa-react",
            Glyph::Robot => "fa-solid fa-robot",
            Glyph::Server => "fa-solid fa-server",
            Glyph::Shield => "fa-solid fa-shield-halved",
            Glyph::Terminal => "fa-solid fa-terminal",
            Glyph::Tools => "fa-solid fa-screwdriver-wrench",
            Glyph::UserTie => "fa-solid fa-user-tie",
            Glyph::Windows => "fa-brands fa-windows",
        }
    }
}
