use serde::Serialize;
use std::fmt;
use std::ops::Neg;

/// Particle species. Antiparticles carry the negated code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    NueBar = -12,
    Positron = -11,
    TopBar = -6,
    BottomBar = -5,
    CharmBar = -4,
    StrangeBar = -3,
    DownBar = -2,
    UpBar = -1,
    Gluon = 0,
    Up = 1,
    Down = 2,
    Strange = 3,
    Charm = 4,
    Bottom = 5,
    Top = 6,
    Electron = 11,
    Nue = 12,
}

impl Default for Flavor {
    fn default() -> Flavor {
        Flavor::Gluon
    }
}

impl Flavor {
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Flavor> {
        Some(match code {
            -12 => Flavor::NueBar,
            -11 => Flavor::Positron,
            -6 => Flavor::TopBar,
            -5 => Flavor::BottomBar,
            -4 => Flavor::CharmBar,
            -3 => Flavor::StrangeBar,
            -2 => Flavor::DownBar,
            -1 => Flavor::UpBar,
            0 => Flavor::Gluon,
            1 => Flavor::Up,
            2 => Flavor::Down,
            3 => Flavor::Strange,
            4 => Flavor::Charm,
            5 => Flavor::Bottom,
            6 => Flavor::Top,
            11 => Flavor::Electron,
            12 => Flavor::Nue,
            _ => return None,
        })
    }

    #[inline]
    pub fn is_antiparticle(self) -> bool {
        self.code() < 0
    }

    #[inline]
    pub fn is_quark(self) -> bool {
        let c = self.code().abs();
        c >= 1 && c <= 6
    }

    pub fn name(self) -> &'static str {
        match self {
            Flavor::NueBar => "nuebar",
            Flavor::Positron => "positron",
            Flavor::TopBar => "topbar",
            Flavor::BottomBar => "bottombar",
            Flavor::CharmBar => "charmbar",
            Flavor::StrangeBar => "strangebar",
            Flavor::DownBar => "downbar",
            Flavor::UpBar => "upbar",
            Flavor::Gluon => "gluon",
            Flavor::Up => "up",
            Flavor::Down => "down",
            Flavor::Strange => "strange",
            Flavor::Charm => "charm",
            Flavor::Bottom => "bottom",
            Flavor::Top => "top",
            Flavor::Electron => "electron",
            Flavor::Nue => "nue",
        }
    }
}

impl Neg for Flavor {
    type Output = Flavor;

    /// The antiparticle. The gluon is its own antiparticle.
    fn neg(self) -> Flavor {
        match self {
            Flavor::NueBar => Flavor::Nue,
            Flavor::Positron => Flavor::Electron,
            Flavor::TopBar => Flavor::Top,
            Flavor::BottomBar => Flavor::Bottom,
            Flavor::CharmBar => Flavor::Charm,
            Flavor::StrangeBar => Flavor::Strange,
            Flavor::DownBar => Flavor::Down,
            Flavor::UpBar => Flavor::Up,
            Flavor::Gluon => Flavor::Gluon,
            Flavor::Up => Flavor::UpBar,
            Flavor::Down => Flavor::DownBar,
            Flavor::Strange => Flavor::StrangeBar,
            Flavor::Charm => Flavor::CharmBar,
            Flavor::Bottom => Flavor::BottomBar,
            Flavor::Top => Flavor::TopBar,
            Flavor::Electron => Flavor::Positron,
            Flavor::Nue => Flavor::NueBar,
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_flips_code() {
        for code in -12..=12 {
            if let Some(f) = Flavor::from_code(code) {
                assert_eq!((-f).code(), -code);
                assert_eq!(-(-f), f);
            }
        }
    }

    #[test]
    fn codes_round_trip() {
        assert_eq!(Flavor::from_code(11), Some(Flavor::Electron));
        assert_eq!(Flavor::from_code(-1), Some(Flavor::UpBar));
        assert_eq!(Flavor::from_code(-2), Some(Flavor::DownBar));
        assert_eq!(Flavor::from_code(7), None);
        assert_eq!(Flavor::Charm.code(), 4);
    }

    #[test]
    fn display_uses_names() {
        assert_eq!(Flavor::Positron.to_string(), "positron");
        assert_eq!((-Flavor::Up).to_string(), "upbar");
        assert!(Flavor::StrangeBar.is_antiparticle());
        assert!(Flavor::Bottom.is_quark());
        assert!(!Flavor::Electron.is_quark());
    }
}
