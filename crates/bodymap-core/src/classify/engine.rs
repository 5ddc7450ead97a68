use crate::classify::normalize::normalize_label;
use crate::regions::aliases::ALIASES;
use crate::regions::RegionId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a label was resolved against the alias dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    /// The normalized label equals a dictionary key.
    Exact,
    /// The label and a key overlap as substrings; first key in dictionary order wins.
    Substring,
}

impl fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMethod::Exact => write!(f, "exact"),
            MatchMethod::Substring => write!(f, "substring"),
        }
    }
}

/// A resolved label, with the dictionary entry that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub region: RegionId,
    /// The label after normalization.
    pub normalized: String,
    /// Dictionary key that matched.
    pub matched_key: &'static str,
    pub method: MatchMethod,
}

/// Map a raw body-part label onto its canonical region.
///
/// Returns `None` for labels that match nothing, which callers treat as
/// "drop this record".
pub fn classify(raw: &str) -> Option<RegionId> {
    classify_detailed(raw).map(|c| c.region)
}

/// Like [`classify`], but reports which dictionary entry matched and how.
pub fn classify_detailed(raw: &str) -> Option<Classification> {
    let normalized = normalize_label(raw);

    // Every key contains the empty string, so it would otherwise match the first entry
    if normalized.is_empty() {
        return None;
    }

    if let Some(&(key, region)) = ALIASES.iter().find(|&&(key, _)| key == normalized) {
        return Some(Classification {
            region,
            normalized,
            matched_key: key,
            method: MatchMethod::Exact,
        });
    }

    let &(key, region) = ALIASES
        .iter()
        .find(|&&(key, _)| normalized.contains(key) || key.contains(normalized.as_str()))?;

    tracing::trace!(label = raw, key, region = %region, "label resolved by substring fallback");

    Some(Classification {
        region,
        normalized,
        matched_key: key,
        method: MatchMethod::Substring,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(classify("HOMBRO IZQUIERDO"), Some(RegionId::HombroIzquierdo));
        assert_eq!(classify("HOMBRO IZQ"), Some(RegionId::HombroIzquierdo));
        assert_eq!(classify("Cervical"), Some(RegionId::Cuello));
        assert_eq!(classify("abdominal"), Some(RegionId::Abdomen));
    }

    #[test]
    fn test_case_and_accents_ignored() {
        assert_eq!(classify("Muñeca Izquierda"), Some(RegionId::AntebrazoIzquierdo));
        assert_eq!(classify("MUNECA IZQUIERDA"), Some(RegionId::AntebrazoIzquierdo));
        assert_eq!(classify("talón derecho"), Some(RegionId::PieDerecho));
        assert_eq!(classify("Glúteo medio izquierdo"), Some(RegionId::Gluteo));
        assert_eq!(classify("  cráneo "), Some(RegionId::Cabeza));
    }

    #[test]
    fn test_unqualified_labels_default_to_right_side() {
        assert_eq!(classify("HOMBRO"), classify("HOMBRO DERECHO"));
        assert_eq!(classify("rodilla"), Some(RegionId::RodillaDerecha));
        assert_eq!(classify("Dedos"), Some(RegionId::ManoDerecha));
        assert_eq!(classify("Intercostal"), Some(RegionId::IntercostalDerecho));
    }

    #[test]
    fn test_chest_defaults_to_left() {
        assert_eq!(classify("Pecho"), Some(RegionId::PechoIzquierdo));
        assert_eq!(classify("Tórax"), Some(RegionId::PechoIzquierdo));
    }

    #[test]
    fn test_exact_reported_as_exact() {
        let c = classify_detailed("Pie izq").unwrap();
        assert_eq!(c.method, MatchMethod::Exact);
        assert_eq!(c.matched_key, "PIE IZQ");
        assert_eq!(c.normalized, "PIE IZQ");
    }

    #[test]
    fn test_label_containing_key() {
        let c = classify_detailed("Rodilla izq.").unwrap();
        assert_eq!(c.region, RegionId::RodillaIzquierda);
        assert_eq!(c.method, MatchMethod::Substring);
        assert_eq!(c.matched_key, "RODILLA IZQ");
    }

    #[test]
    fn test_key_containing_label() {
        // "MAN" is a prefix of "MANO IZQUIERDA", the first key that contains it
        let c = classify_detailed("man").unwrap();
        assert_eq!(c.region, RegionId::ManoIzquierda);
        assert_eq!(c.matched_key, "MANO IZQUIERDA");
    }

    #[test]
    fn test_earliest_key_wins_on_overlap() {
        // Both "BRAZO" and "PIERNA" are keys; "BRAZO" comes first in the dictionary
        for label in ["dolor pierna y brazo", "BRAZO Y PIERNA"] {
            let c = classify_detailed(label).unwrap();
            assert_eq!(c.region, RegionId::BrazoDerecho, "{label}");
            assert_eq!(c.matched_key, "BRAZO");
        }
    }

    #[test]
    fn test_short_fragment_hits_first_qualified_key() {
        assert_eq!(classify("IZQ"), Some(RegionId::HombroIzquierdo));
    }

    #[test]
    fn test_no_region() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("   "), None);
        assert_eq!(classify("12345"), None);
        assert_eq!(classify("XYZ_UNKNOWN"), None);
        assert_eq!(classify("Politraumatismo"), None);
    }

    #[test]
    fn test_normalized_input_classifies_the_same() {
        let labels = [
            "Hombro izq",
            "muñeca",
            "Espalda baja",
            "Pié derecho",
            "dedo mano izquierda",
            "región lumbar",
            "ojo",
            "",
        ];
        for label in labels {
            assert_eq!(classify(label), classify(&normalize_label(label)), "{label}");
            assert_eq!(classify(label), classify(&label.to_uppercase()), "{label}");
        }
    }

    #[test]
    fn test_unicode_heavy_input_does_not_panic() {
        assert_eq!(classify("🦶🦶"), None);
        assert_eq!(classify("\u{301}\u{301}"), None);
        let _ = classify("ǅ ß ﬁ İ");
    }
}
