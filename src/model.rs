// src/model.rs
//
// Typed rows for the two reference tables, plus Record: the joined
// team/stadium pairing everything downstream (filters, table, detail
// dialog) operates on. Enum tokens match the store's CSV cells; parse
// failures surface as None and the store turns them into line errors.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum League {
    American,
    National,
}

impl League {
    pub fn label(&self) -> &'static str {
        match self {
            League::American => "American",
            League::National => "National",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "american" => Some(League::American),
            "national" => Some(League::National),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Roof {
    Open,
    Retractable,
    Closed,
}

impl Roof {
    pub fn label(&self) -> &'static str {
        match self {
            Roof::Open => "Open",
            Roof::Retractable => "Retractable",
            Roof::Closed => "Closed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Some(Roof::Open),
            "retractable" => Some(Roof::Retractable),
            "closed" => Some(Roof::Closed),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    Grass,
    AstroTurf,
    AstroTurf3D,
}

impl Surface {
    pub fn label(&self) -> &'static str {
        match self {
            Surface::Grass => "Grass",
            Surface::AstroTurf => "AstroTurf",
            Surface::AstroTurf3D => "AstroTurf 3D",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grass" => Some(Surface::Grass),
            "astroturf" => Some(Surface::AstroTurf),
            "astroturf 3d" => Some(Surface::AstroTurf3D),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Typology {
    RetroModern,
    RetroClassic,
    JewelBox,
    Modern,
    Contemporary,
    Multipurpose,
}

impl Typology {
    pub fn label(&self) -> &'static str {
        match self {
            Typology::RetroModern => "Retro Modern",
            Typology::RetroClassic => "Retro Classic",
            Typology::JewelBox => "Jewel Box",
            Typology::Modern => "Modern",
            Typology::Contemporary => "Contemporary",
            Typology::Multipurpose => "Multipurpose",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retro modern" => Some(Typology::RetroModern),
            "retro classic" => Some(Typology::RetroClassic),
            "jewel box" => Some(Typology::JewelBox),
            "modern" => Some(Typology::Modern),
            "contemporary" => Some(Typology::Contemporary),
            "multipurpose" => Some(Typology::Multipurpose),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub league: League,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stadium {
    pub id: u32,
    /// Owning team; exactly one team per stadium in this model.
    pub team_id: u32,
    pub name: String,
    pub location: String,
    pub year_opened: u16,
    pub seating_capacity: u32,
    pub typology: Typology,
    pub roof: Roof,
    pub surface: Surface,
    /// Distance to center field, in feet.
    pub center_field_dist: u32,
}

/// One team paired with its stadium. Read-only snapshot; the database
/// hands out fresh copies on every load and nothing mutates them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub team: Team,
    pub stadium: Stadium,
}
