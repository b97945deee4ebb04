use crate::domain::StandardComparison;

/// Literature reference pKa values used for the accuracy comparison.
const STANDARD_TABLE: [(&str, f64); 7] = [
    ("Acetic Acid", 4.76),
    ("Carbonic Acid (pKa1)", 6.35),
    ("Phosphoric Acid (pKa1)", 2.15),
    ("Ammonia", 9.25),
    ("Hydrochloric Acid", -6.3),
    ("Sodium Hydroxide", 15.7),
    ("Benzoic Acid", 4.2),
];

#[derive(Debug, Clone, PartialEq)]
pub struct StandardReference {
    pub name: String,
    pub pka: f64,
}

impl StandardReference {
    /// User-entered standard outside the built-in table.
    pub fn custom(name: impl Into<String>, pka: f64) -> Self {
        Self {
            name: name.into(),
            pka,
        }
    }
}

pub fn standard_references() -> Vec<StandardReference> {
    STANDARD_TABLE
        .iter()
        .map(|(name, pka)| StandardReference {
            name: (*name).to_string(),
            pka: *pka,
        })
        .collect()
}

pub fn lookup_standard(name: &str) -> Option<StandardReference> {
    STANDARD_TABLE
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(candidate, pka)| StandardReference {
            name: (*candidate).to_string(),
            pka: *pka,
        })
}

/// Compares a measured pKa against a reference value.
///
/// `difference` is the absolute gap. Accuracy is normalized by the
/// magnitude of the standard's pKa, clamped to the 0..=100 range, and 0%
/// when the normalizer is zero.
pub fn compare_to_standard(
    measured_pka: f64,
    reference: &StandardReference,
) -> StandardComparison {
    let difference = (reference.pka - measured_pka).abs();
    let normalizer = reference.pka.abs();
    let accuracy_percent = if normalizer == 0.0 {
        0.0
    } else {
        (100.0 * (1.0 - difference / normalizer)).max(0.0)
    };

    StandardComparison {
        standard_name: reference.name.clone(),
        standard_pka: reference.pka,
        measured_pka,
        difference,
        accuracy_percent,
    }
}
