use crate::warnings::{
    vehicle_class::VehicleClass,
    warning_rule::{
        Criticality, LabelMatcher, LocalizedMessage, RuleOutcome, VehicleMatcher, WarningRule,
    },
};

const CYCLISTS: VehicleMatcher = VehicleMatcher::OneOf(&[
    VehicleClass::Bike,
    VehicleClass::Mtb,
    VehicleClass::Racingbike,
]);

const UNPAVED_SURFACES: &[&str] = &[
    "unpaved",
    "compacted",
    "fine_gravel",
    "gravel",
    "ground",
    "dirt",
    "grass",
    "sand",
    "mud",
];

/// Route quality rules, evaluated in this order for every road class and
/// surface combination of a route.
pub static WARNING_RULES: &[WarningRule] = &[
    WarningRule {
        id: 100,
        road_class: LabelMatcher::OneOf(&["path_grade4", "path_grade5"]),
        surface: LabelMatcher::Any,
        outcomes: &[
            RuleOutcome {
                vehicles: CYCLISTS,
                criticality: Criticality::Warning,
                message: LocalizedMessage {
                    de: "(schwieriger) Steig, Trittsicherheit erforderlich. Fahrrad muss vorher abgestellt werden.",
                    en: "(Difficult) mountain trail, sure-footedness required. The bike must be parked beforehand.",
                },
            },
            RuleOutcome {
                vehicles: VehicleMatcher::OneOf(&[VehicleClass::Hike]),
                criticality: Criticality::Hint,
                message: LocalizedMessage {
                    de: "(schwieriger) Steig, Trittsicherheit erforderlich.",
                    en: "(Difficult) mountain trail, sure-footedness required.",
                },
            },
        ],
    },
    WarningRule {
        id: 101,
        road_class: LabelMatcher::OneOf(&["path_grade3", "track_grade5"]),
        surface: LabelMatcher::Any,
        outcomes: &[RuleOutcome {
            vehicles: VehicleMatcher::OneOf(&[VehicleClass::Bike, VehicleClass::Racingbike]),
            criticality: Criticality::Hint,
            message: LocalizedMessage {
                de: "Schwieriger Anstieg auf unbefestigtem Weg, eventuell muss geschoben werden.",
                en: "Difficult climb on an unpaved way, pushing may be necessary.",
            },
        }],
    },
    WarningRule {
        id: 200,
        road_class: LabelMatcher::OneOf(&["steps"]),
        surface: LabelMatcher::Any,
        outcomes: &[RuleOutcome {
            vehicles: CYCLISTS,
            criticality: Criticality::Warning,
            message: LocalizedMessage {
                de: "Treppe, das Fahrrad muss getragen werden.",
                en: "Stairs, the bike has to be carried.",
            },
        }],
    },
    WarningRule {
        id: 300,
        road_class: LabelMatcher::Any,
        surface: LabelMatcher::OneOf(UNPAVED_SURFACES),
        outcomes: &[RuleOutcome {
            vehicles: VehicleMatcher::OneOf(&[VehicleClass::Racingbike]),
            criticality: Criticality::Warning,
            message: LocalizedMessage {
                de: "Unbefestigter Weg, für Rennräder ungeeignet.",
                en: "Unpaved way, unsuitable for racing bikes.",
            },
        }],
    },
    WarningRule {
        id: 301,
        road_class: LabelMatcher::Any,
        surface: LabelMatcher::OneOf(&["sand", "mud", "grass"]),
        outcomes: &[RuleOutcome {
            vehicles: VehicleMatcher::OneOf(&[VehicleClass::Bike, VehicleClass::Mtb]),
            criticality: Criticality::Hint,
            message: LocalizedMessage {
                de: "Weicher Untergrund, nur eingeschränkt befahrbar.",
                en: "Soft ground, only partly rideable.",
            },
        }],
    },
    WarningRule {
        id: 400,
        road_class: LabelMatcher::AnyOf(&[
            LabelMatcher::Family(&["footway"]),
            LabelMatcher::OneOf(&["pedestrian"]),
        ]),
        surface: LabelMatcher::Any,
        outcomes: &[RuleOutcome {
            vehicles: CYCLISTS,
            criticality: Criticality::Hint,
            message: LocalizedMessage {
                de: "Fußweg, das Fahrrad muss geschoben werden.",
                en: "Footway, the bike has to be pushed.",
            },
        }],
    },
    WarningRule {
        id: 500,
        road_class: LabelMatcher::OneOf(&["other", "primary", "motorway", "secondary"]),
        surface: LabelMatcher::Any,
        outcomes: &[RuleOutcome {
            vehicles: VehicleMatcher::Any,
            criticality: Criticality::Hint,
            message: LocalizedMessage {
                de: "Abschnitt auf einer stark befahrenen oder nicht klassifizierten Straße.",
                en: "Section on a busy or unclassified road.",
            },
        }],
    },
];
