//! Seed Catalog
//!
//! Constant substitute-part and risk data for a handful of common parts.
//! This is a fixed seed dataset, not derived from any live source; it backs
//! the simulated remote and the aggregator's fallback when the alternatives
//! or risk lookups fail.

use crate::models::{AlternativeRecord, RelationKind, RiskRecord};

const ICCHAX: &str = "ICChax";
const CHIP_SELECT: &str = "ChipSelect";
const CHIP_TEAM_AI: &str = "ChipTeam AI";
const ZHIXINGU: &str = "ZhiXinGu";

struct SeedAlternative {
    model: &'static str,
    kind: RelationKind,
    source: &'static str,
    notes: &'static str,
}

const fn alt(
    model: &'static str,
    kind: RelationKind,
    source: &'static str,
    notes: &'static str,
) -> SeedAlternative {
    SeedAlternative {
        model,
        kind,
        source,
        notes,
    }
}

static ALTERNATIVES: &[(&str, &[SeedAlternative])] = &[
    (
        "ATMEGA328P-PU",
        &[
            alt("ATMEGA328P-AU", RelationKind::Direct, ICCHAX, "Different package, identical function"),
            alt("ATTINY85-20PU", RelationKind::Parametric, CHIP_SELECT, "Fewer pins, partially compatible"),
            alt("PIC16F887-I/P", RelationKind::Functional, CHIP_TEAM_AI, "Different architecture, firmware must be rewritten"),
        ],
    ),
    (
        "STM32F103C8T6",
        &[
            alt("STM32F103CBT6", RelationKind::Direct, ICCHAX, "Larger flash, otherwise identical"),
            alt("GD32F103C8T6", RelationKind::Other, ZHIXINGU, "Domestic pin-compatible part with similar performance"),
        ],
    ),
    (
        "ESP8266EX",
        &[
            alt("ESP8285", RelationKind::Direct, ICCHAX, "Integrated 1MB flash, otherwise identical"),
            alt("HLK-W806", RelationKind::Other, ZHIXINGU, "Domestic Wi-Fi chip with similar performance"),
        ],
    ),
    (
        "NE555D",
        &[
            alt("LM555", RelationKind::Direct, ICCHAX, "Identical function, package compatible"),
            alt("NE555P", RelationKind::Direct, ICCHAX, "Different package, identical function"),
            alt("ICM7555", RelationKind::LowPower, CHIP_SELECT, "Low-power CMOS version, functionally compatible"),
        ],
    ),
    (
        "CDCM6208V1RGZT",
        &[
            alt("CDCM6208V2RGZT", RelationKind::Upgrade, ICCHAX, "Improved revision, pin compatible"),
            alt("SI5351A", RelationKind::Functional, CHIP_SELECT, "Similar function, circuit redesign required"),
        ],
    ),
    (
        "LM7805",
        &[
            alt("LM7805CT", RelationKind::Direct, ICCHAX, "Different package, identical function"),
            alt("XC6206P502MR", RelationKind::LowPower, CHIP_SELECT, "Low-power LDO with lower output current"),
            alt("MP1484EN", RelationKind::Other, ZHIXINGU, "Switching regulator, higher efficiency"),
        ],
    ),
    (
        "LM317",
        &[
            alt("LM317T", RelationKind::Direct, ICCHAX, "Different package, identical function"),
            alt("XC6206P332MR", RelationKind::Other, CHIP_SELECT, "Fixed output voltage, pick the matching variant"),
            alt("MP2307DN", RelationKind::Other, ZHIXINGU, "Switching regulator, higher efficiency"),
        ],
    ),
    (
        "1N4148",
        &[
            alt("1N4148W", RelationKind::Direct, ICCHAX, "Glass package variant, identical function"),
            alt("BAS16", RelationKind::Other, CHIP_SELECT, "High-speed switching diode, faster recovery"),
            alt("FR107", RelationKind::Other, ZHIXINGU, "Rectifier diode with higher forward current"),
        ],
    ),
];

/// Parts with a risk record: all in volume production and RoHS compliant.
static RISK_PARTS: &[&str] = &[
    "ATMEGA328P-PU",
    "STM32F103C8T6",
    "ESP8266EX",
    "NE555D",
    "CDCM6208V1RGZT",
    "LM7805",
    "LM317",
    "1N4148",
];

/// Substitutes for `part_number`, empty when the part is not in the seed.
pub fn alternatives_for(part_number: &str) -> Vec<AlternativeRecord> {
    ALTERNATIVES
        .iter()
        .find(|(part, _)| *part == part_number)
        .map(|(_, seeds)| {
            seeds
                .iter()
                .map(|seed| AlternativeRecord::new(seed.model, seed.kind, seed.source, seed.notes))
                .collect()
        })
        .unwrap_or_default()
}

/// Risk record for `part_number`, if the seed knows the part.
pub fn risk_for(part_number: &str) -> Option<RiskRecord> {
    RISK_PARTS
        .contains(&part_number)
        .then(|| RiskRecord::new("in production", "compliant", "normal"))
}

/// Every part number the seed has data for.
pub fn known_parts() -> impl Iterator<Item = &'static str> {
    ALTERNATIVES.iter().map(|(part, _)| *part)
}

// == Part Catalog ==
/// Static fallback data for alternatives and risk, keyed by exact part number.
pub trait PartCatalog: Send + Sync + std::fmt::Debug {
    fn alternatives(&self, part_number: &str) -> Vec<AlternativeRecord>;

    fn risk(&self, part_number: &str) -> Option<RiskRecord>;
}

/// [`PartCatalog`] backed by the constant seed tables in this module.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedCatalog;

impl PartCatalog for SeedCatalog {
    fn alternatives(&self, part_number: &str) -> Vec<AlternativeRecord> {
        alternatives_for(part_number)
    }

    fn risk(&self, part_number: &str) -> Option<RiskRecord> {
        risk_for(part_number)
    }
}
