pub mod aliases;

use crate::error::BodyMapError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical body regions drawn on the map.
///
/// Declaration order is the region table order: `Ord` and every ordered
/// output of this crate follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionId {
    Cabeza,
    Cuello,
    HombroIzquierdo,
    HombroDerecho,
    PechoIzquierdo,
    PechoDerecho,
    BrazoIzquierdo,
    BrazoDerecho,
    IntercostalIzquierdo,
    IntercostalDerecho,
    Abdomen,
    AntebrazoIzquierdo,
    AntebrazoDerecho,
    ManoIzquierda,
    ManoDerecha,
    Cadera,
    MusloIzquierdo,
    MusloDerecho,
    RodillaIzquierda,
    RodillaDerecha,
    PiernaIzquierda,
    PiernaDerecha,
    TobilloIzquierdo,
    TobilloDerecho,
    PieIzquierdo,
    PieDerecho,
    Espalda,
    Gluteo,
}

impl RegionId {
    /// Table entry for this region.
    pub fn def(self) -> &'static RegionDef {
        &REGIONS[self as usize]
    }

    /// Stable snake_case id, e.g. `hombro_izquierdo`.
    pub fn id(self) -> &'static str {
        self.def().id
    }

    /// Human-readable label, e.g. `Hombro Izquierdo`.
    pub fn label(self) -> &'static str {
        self.def().label
    }

    pub fn all() -> impl Iterator<Item = RegionId> {
        REGIONS.iter().map(|r| r.region)
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for RegionId {
    type Err = BodyMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        REGIONS
            .iter()
            .find(|r| r.id == wanted)
            .map(|r| r.region)
            .ok_or_else(|| BodyMapError::UnknownRegion(s.to_string()))
    }
}

/// SVG primitive for a region, in the 300x510 body-map view box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Ellipse { cx: u16, cy: u16, rx: u16, ry: u16 },
    Rect { x: u16, y: u16, width: u16, height: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionDef {
    pub region: RegionId,
    pub id: &'static str,
    pub label: &'static str,
    pub shape: Shape,
}

const fn ellipse(cx: u16, cy: u16, rx: u16, ry: u16) -> Shape {
    Shape::Ellipse { cx, cy, rx, ry }
}

const fn rect(x: u16, y: u16, width: u16, height: u16) -> Shape {
    Shape::Rect {
        x,
        y,
        width,
        height,
    }
}

const fn def(region: RegionId, id: &'static str, label: &'static str, shape: Shape) -> RegionDef {
    RegionDef {
        region,
        id,
        label,
        shape,
    }
}

/// Static region table, indexed by `RegionId as usize`.
pub static REGIONS: [RegionDef; 28] = [
    def(RegionId::Cabeza, "cabeza", "Cabeza", ellipse(150, 45, 35, 40)),
    def(RegionId::Cuello, "cuello", "Cuello", rect(135, 85, 30, 25)),
    def(RegionId::HombroIzquierdo, "hombro_izquierdo", "Hombro Izquierdo", ellipse(95, 120, 20, 12)),
    def(RegionId::HombroDerecho, "hombro_derecho", "Hombro Derecho", ellipse(205, 120, 20, 12)),
    def(RegionId::PechoIzquierdo, "pecho_izquierdo", "Pecho Izquierdo", rect(110, 130, 40, 40)),
    def(RegionId::PechoDerecho, "pecho_derecho", "Pecho Derecho", rect(150, 130, 40, 40)),
    def(RegionId::BrazoIzquierdo, "brazo_izquierdo", "Brazo Izquierdo", rect(55, 135, 28, 60)),
    def(RegionId::BrazoDerecho, "brazo_derecho", "Brazo Derecho", rect(217, 135, 28, 60)),
    def(RegionId::IntercostalIzquierdo, "intercostal_izquierdo", "Intercostal Izquierdo", rect(110, 170, 40, 30)),
    def(RegionId::IntercostalDerecho, "intercostal_derecho", "Intercostal Derecho", rect(150, 170, 40, 30)),
    def(RegionId::Abdomen, "abdomen", "Abdomen", rect(120, 200, 60, 40)),
    def(RegionId::AntebrazoIzquierdo, "antebrazo_izquierdo", "Antebrazo Izquierdo", rect(40, 200, 25, 65)),
    def(RegionId::AntebrazoDerecho, "antebrazo_derecho", "Antebrazo Derecho", rect(235, 200, 25, 65)),
    def(RegionId::ManoIzquierda, "mano_izquierda", "Mano Izquierda", ellipse(40, 280, 15, 18)),
    def(RegionId::ManoDerecha, "mano_derecha", "Mano Derecha", ellipse(260, 280, 15, 18)),
    def(RegionId::Cadera, "cadera", "Cadera", rect(110, 240, 80, 25)),
    def(RegionId::MusloIzquierdo, "muslo_izquierdo", "Muslo Izquierdo", rect(110, 270, 38, 75)),
    def(RegionId::MusloDerecho, "muslo_derecho", "Muslo Derecho", rect(152, 270, 38, 75)),
    def(RegionId::RodillaIzquierda, "rodilla_izquierda", "Rodilla Izquierda", ellipse(129, 355, 16, 15)),
    def(RegionId::RodillaDerecha, "rodilla_derecha", "Rodilla Derecha", ellipse(171, 355, 16, 15)),
    def(RegionId::PiernaIzquierda, "pierna_izquierda", "Pierna Izquierda", rect(113, 375, 32, 70)),
    def(RegionId::PiernaDerecha, "pierna_derecha", "Pierna Derecha", rect(155, 375, 32, 70)),
    def(RegionId::TobilloIzquierdo, "tobillo_izquierdo", "Tobillo Izquierdo", ellipse(129, 455, 14, 10)),
    def(RegionId::TobilloDerecho, "tobillo_derecho", "Tobillo Derecho", ellipse(171, 455, 14, 10)),
    def(RegionId::PieIzquierdo, "pie_izquierdo", "Pie Izquierdo", ellipse(125, 480, 18, 14)),
    def(RegionId::PieDerecho, "pie_derecho", "Pie Derecho", ellipse(175, 480, 18, 14)),
    def(RegionId::Espalda, "espalda", "Espalda", rect(120, 135, 60, 45)),
    def(RegionId::Gluteo, "gluteo", "Glúteos", rect(115, 248, 70, 20)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_indexed_by_region() {
        for (i, def) in REGIONS.iter().enumerate() {
            assert_eq!(def.region as usize, i, "{} out of place", def.id);
        }
    }

    #[test]
    fn test_ids_match_serde_names() {
        for region in RegionId::all() {
            let json = serde_json::to_string(&region).unwrap();
            assert_eq!(json, format!("\"{}\"", region.id()));
        }
    }

    #[test]
    fn test_parse_region_id() {
        assert_eq!("hombro_izquierdo".parse::<RegionId>().unwrap(), RegionId::HombroIzquierdo);
        assert_eq!(" Gluteo ".parse::<RegionId>().unwrap(), RegionId::Gluteo);
        assert!("codo".parse::<RegionId>().is_err());
    }

    #[test]
    fn test_gluteo_label_keeps_accent() {
        assert_eq!(RegionId::Gluteo.label(), "Glúteos");
        assert_eq!(RegionId::Gluteo.to_string(), "gluteo");
    }
}
