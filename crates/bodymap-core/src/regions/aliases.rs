//! Ordered dictionary of known body-part label variants.

use super::RegionId as R;

/// Normalized label variant -> canonical region, in lookup order.
///
/// Order matters: the substring fallback returns the first entry that
/// overlaps the label, so moving an entry can change how ambiguous
/// labels resolve. Keys must already be in normalized form (uppercase,
/// no diacritics, trimmed).
pub static ALIASES: &[(&str, R)] = &[
    // Head and neck
    ("CABEZA", R::Cabeza),
    ("CRANEO", R::Cabeza),
    ("CARA", R::Cabeza),
    ("ROSTRO", R::Cabeza),
    ("FRENTE", R::Cabeza),
    ("CUELLO", R::Cuello),
    ("CERVICAL", R::Cuello),

    // Shoulders (bare HOMBRO defaults to the right side)
    ("HOMBRO IZQUIERDO", R::HombroIzquierdo),
    ("HOMBRO IZQ", R::HombroIzquierdo),
    ("HOMBRO DERECHO", R::HombroDerecho),
    ("HOMBRO DER", R::HombroDerecho),
    ("HOMBRO", R::HombroDerecho),

    // Chest
    ("PECHO", R::PechoIzquierdo),
    ("PECTORAL IZQUIERDO", R::PechoIzquierdo),
    ("PECHO IZQUIERDO", R::PechoIzquierdo),
    ("PECTORAL DERECHO", R::PechoDerecho),
    ("PECHO DERECHO", R::PechoDerecho),
    ("TORAX", R::PechoIzquierdo),

    // Upper arms
    ("BRAZO IZQUIERDO", R::BrazoIzquierdo),
    ("BRAZO POSTERIOR IZQUIERDO", R::BrazoIzquierdo),
    ("BRAZO ANTERIOR IZQUIERDO", R::BrazoIzquierdo),
    ("BRAZO IZQ", R::BrazoIzquierdo),
    ("BRAZO DERECHO", R::BrazoDerecho),
    ("BRAZO POSTERIOR DERECHO", R::BrazoDerecho),
    ("BRAZO ANTERIOR DERECHO", R::BrazoDerecho),
    ("BRAZO DER", R::BrazoDerecho),
    ("BRAZO", R::BrazoDerecho),

    // Ribs
    ("INTERCOSTAL IZQUIERDO", R::IntercostalIzquierdo),
    ("INTERCOSTAL IZQ", R::IntercostalIzquierdo),
    ("INTERCOSTAL DERECHO", R::IntercostalDerecho),
    ("INTERCOSTAL DER", R::IntercostalDerecho),
    ("INTERCOSTAL", R::IntercostalDerecho),

    // Abdomen
    ("ABDOMEN", R::Abdomen),
    ("ABDOMINAL", R::Abdomen),
    ("ESTOMAGO", R::Abdomen),

    // Forearms; wrists map onto the forearm
    ("ANTEBRAZO IZQUIERDO", R::AntebrazoIzquierdo),
    ("ANTEBRAZO IZQ", R::AntebrazoIzquierdo),
    ("ANTEBRAZO DERECHO", R::AntebrazoDerecho),
    ("ANTEBRAZO DER", R::AntebrazoDerecho),
    ("ANTEBRAZO", R::AntebrazoDerecho),
    ("MUNECA IZQUIERDA", R::AntebrazoIzquierdo),
    ("MUNECA DERECHA", R::AntebrazoDerecho),
    ("MUNECA", R::AntebrazoDerecho),

    // Hands and fingers
    ("MANO IZQUIERDA", R::ManoIzquierda),
    ("MANO IZQ", R::ManoIzquierda),
    ("MANO DERECHA", R::ManoDerecha),
    ("MANO DER", R::ManoDerecha),
    ("MANO", R::ManoDerecha),
    ("DEDO", R::ManoDerecha),
    ("DEDOS", R::ManoDerecha),
    ("DEDO MANO DERECHA", R::ManoDerecha),
    ("DEDO MANO IZQUIERDA", R::ManoIzquierda),

    // Hip and groin
    ("CADERA", R::Cadera),
    ("PELVIS", R::Cadera),
    ("INGLE", R::Cadera),

    // Thighs
    ("MUSLO IZQUIERDO", R::MusloIzquierdo),
    ("MUSLO IZQ", R::MusloIzquierdo),
    ("MUSLO DERECHO", R::MusloDerecho),
    ("MUSLO DER", R::MusloDerecho),
    ("MUSLO", R::MusloDerecho),

    // Lower legs
    ("PIERNA IZQUIERDA", R::PiernaIzquierda),
    ("PIERNA IZQ", R::PiernaIzquierda),
    ("PIERNA DERECHA", R::PiernaDerecha),
    ("PIERNA DER", R::PiernaDerecha),
    ("PIERNA", R::PiernaDerecha),

    // Knees
    ("RODILLA IZQUIERDA", R::RodillaIzquierda),
    ("RODILLA IZQ", R::RodillaIzquierda),
    ("RODILLA DERECHA", R::RodillaDerecha),
    ("RODILLA DER", R::RodillaDerecha),
    ("RODILLA", R::RodillaDerecha),

    // Ankles
    ("TOBILLO IZQUIERDO", R::TobilloIzquierdo),
    ("TOBILLO IZQ", R::TobilloIzquierdo),
    ("TOBILLO DERECHO", R::TobilloDerecho),
    ("TOBILLO DER", R::TobilloDerecho),
    ("TOBILLO", R::TobilloDerecho),

    // Feet and heels
    ("PIE IZQUIERDO", R::PieIzquierdo),
    ("PIES IZQUIERDO", R::PieIzquierdo),
    ("PIE IZQ", R::PieIzquierdo),
    ("PIE DERECHO", R::PieDerecho),
    ("PIES DERECHO", R::PieDerecho),
    ("PIE DER", R::PieDerecho),
    ("PIE", R::PieDerecho),
    ("PIES", R::PieDerecho),
    ("TALON IZQUIERDO", R::PieIzquierdo),
    ("TALON DERECHO", R::PieDerecho),
    ("TALON", R::PieDerecho),

    // Back and spine
    ("ESPALDA", R::Espalda),
    ("ESPALDA ALTA", R::Espalda),
    ("ESPALDA BAJA", R::Espalda),
    ("LUMBAR", R::Espalda),
    ("DORSAL", R::Espalda),
    ("COLUMNA", R::Espalda),

    // Glutes
    ("GLUTEO", R::Gluteo),
    ("GLUTEOS", R::Gluteo),
    ("GLUTEO DERECHO", R::Gluteo),
    ("GLUTEO IZQUIERDO", R::Gluteo),
    ("GLUTEO MEDIO DERECHO", R::Gluteo),
    ("GLUTEO MEDIO IZQUIERDO", R::Gluteo),
];
