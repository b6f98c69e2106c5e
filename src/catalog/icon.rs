//! Decorative icon handles. An icon carries no behavior; the renderer looks
//! the handle up to get a short badge and a tint.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tint {
    White,
    Sky,
    Cyan,
    Emerald,
    Orange,
    Purple,
    Yellow,
    Indigo,
    Blue,
    Teal,
    Red,
    Gray,
}

impl Tint {
    pub const ALL: [Tint; 12] = [
        Tint::White,
        Tint::Sky,
        Tint::Cyan,
        Tint::Emerald,
        Tint::Orange,
        Tint::Purple,
        Tint::Yellow,
        Tint::Indigo,
        Tint::Blue,
        Tint::Teal,
        Tint::Red,
        Tint::Gray,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Settings key of this tint.
    pub fn name(self) -> &'static str {
        match self {
            Tint::White => "white",
            Tint::Sky => "sky",
            Tint::Cyan => "cyan",
            Tint::Emerald => "emerald",
            Tint::Orange => "orange",
            Tint::Purple => "purple",
            Tint::Yellow => "yellow",
            Tint::Indigo => "indigo",
            Tint::Blue => "blue",
            Tint::Teal => "teal",
            Tint::Red => "red",
            Tint::Gray => "gray",
        }
    }

    pub fn from_name(name: &str) -> Option<Tint> {
        let name = name.trim();
        Tint::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    NextJs,
    Flutter,
    Go,
    Rust,
    Elixir,
    Python,
    Kotlin,
    Postgresql,
    Clickhouse,
    Elasticsearch,
    Redis,
    Kubernetes,
    Terraform,
    Generic(Tint),
}

impl IconId {
    /// Badge text, always 4 cells wide.
    pub fn badge(self) -> &'static str {
        match self {
            IconId::NextJs => "[Nx]",
            IconId::Flutter => "[Fl]",
            IconId::Go => "[Go]",
            IconId::Rust => "[Rs]",
            IconId::Elixir => "[Ex]",
            IconId::Python => "[Py]",
            IconId::Kotlin => "[Kt]",
            IconId::Postgresql => "[Pg]",
            IconId::Clickhouse => "[Ch]",
            IconId::Elasticsearch => "[Es]",
            IconId::Redis => "[Rd]",
            IconId::Kubernetes => "[K8]",
            IconId::Terraform => "[Tf]",
            IconId::Generic(_) => "[<>]",
        }
    }

    pub fn tint(self) -> Tint {
        match self {
            IconId::NextJs => Tint::White,
            IconId::Flutter => Tint::Sky,
            IconId::Go => Tint::Cyan,
            IconId::Rust => Tint::Orange,
            IconId::Elixir => Tint::Purple,
            IconId::Python => Tint::Yellow,
            IconId::Kotlin => Tint::Indigo,
            IconId::Postgresql => Tint::Blue,
            IconId::Clickhouse => Tint::Yellow,
            IconId::Elasticsearch => Tint::Teal,
            IconId::Redis => Tint::Red,
            IconId::Kubernetes => Tint::Blue,
            IconId::Terraform => Tint::Purple,
            IconId::Generic(tint) => tint,
        }
    }
}
