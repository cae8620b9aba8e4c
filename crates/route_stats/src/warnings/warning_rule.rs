use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::warnings::vehicle_class::VehicleClass;

pub type WarningId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
pub enum Criticality {
    Hint,
    Warning,
}

/// Languages warning messages are available in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    De,
    En,
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    /// Accepts bare codes as well as tags like `de-DE` or `en_GB`.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let primary = code.split(['-', '_']).next().unwrap_or(code);
        match primary.to_ascii_lowercase().as_str() {
            "de" => Ok(Language::De),
            "en" => Ok(Language::En),
            _ => Err(UnsupportedLanguage(code.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedMessage {
    pub de: &'static str,
    pub en: &'static str,
}

impl LocalizedMessage {
    pub fn resolve(&self, language: Option<Language>) -> Option<&'static str> {
        match language? {
            Language::De => Some(self.de),
            Language::En => Some(self.en),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum LabelMatcher {
    Any,
    OneOf(&'static [&'static str]),
    /// Matches the listed road classes and their track type combinations,
    /// `footway` matches `footway_grade1` as well.
    Family(&'static [&'static str]),
    /// Matches when any of the inner matchers does.
    AnyOf(&'static [LabelMatcher]),
}

impl LabelMatcher {
    pub fn matches(&self, label: Option<&str>) -> bool {
        match (self, label) {
            (LabelMatcher::Any, _) => true,
            (LabelMatcher::AnyOf(matchers), label) => {
                matchers.iter().any(|matcher| matcher.matches(label))
            }
            (LabelMatcher::OneOf(labels), Some(label)) => labels.contains(&label),
            (LabelMatcher::Family(families), Some(label)) => families.iter().any(|family| {
                label
                    .strip_prefix(family)
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with('_'))
            }),
            (_, None) => false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum VehicleMatcher {
    Any,
    OneOf(&'static [VehicleClass]),
}

impl VehicleMatcher {
    pub fn matches(&self, vehicle: VehicleClass) -> bool {
        match self {
            VehicleMatcher::Any => true,
            VehicleMatcher::OneOf(vehicles) => vehicles.contains(&vehicle),
        }
    }
}

/// Severity and wording of a rule for a group of vehicles.
#[derive(Debug, Clone, Copy)]
pub struct RuleOutcome {
    pub vehicles: VehicleMatcher,
    pub criticality: Criticality,
    pub message: LocalizedMessage,
}

/// A route quality rule. The first outcome matching the vehicle decides
/// criticality and message; a rule without a matching outcome does not
/// apply.
#[derive(Debug, Clone, Copy)]
pub struct WarningRule {
    pub id: WarningId,
    pub road_class: LabelMatcher,
    pub surface: LabelMatcher,
    pub outcomes: &'static [RuleOutcome],
}

#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub language: Option<Language>,
    pub vehicle: VehicleClass,
    pub road_class: Option<&'a str>,
    pub surface: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub id: WarningId,
    pub message: Option<String>,
    pub criticality: Criticality,
}

impl WarningRule {
    pub fn evaluate(&self, context: &RuleContext) -> Option<Warning> {
        if !self.road_class.matches(context.road_class) || !self.surface.matches(context.surface)
        {
            return None;
        }

        self.outcomes
            .iter()
            .find(|outcome| outcome.vehicles.matches(context.vehicle))
            .map(|outcome| Warning {
                id: self.id,
                message: outcome.message.resolve(context.language).map(String::from),
                criticality: outcome.criticality,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULE: WarningRule = WarningRule {
        id: 7,
        road_class: LabelMatcher::Family(&["footway"]),
        surface: LabelMatcher::OneOf(&["gravel"]),
        outcomes: &[
            RuleOutcome {
                vehicles: VehicleMatcher::OneOf(&[VehicleClass::Bike]),
                criticality: Criticality::Warning,
                message: LocalizedMessage {
                    de: "Rad",
                    en: "bike",
                },
            },
            RuleOutcome {
                vehicles: VehicleMatcher::Any,
                criticality: Criticality::Hint,
                message: LocalizedMessage {
                    de: "Alle",
                    en: "all",
                },
            },
        ],
    };

    fn context<'a>(
        vehicle: VehicleClass,
        road_class: Option<&'a str>,
        surface: Option<&'a str>,
    ) -> RuleContext<'a> {
        RuleContext {
            language: Some(Language::En),
            vehicle,
            road_class,
            surface,
        }
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("de".parse::<Language>(), Ok(Language::De));
        assert_eq!("en-GB".parse::<Language>(), Ok(Language::En));
        assert_eq!("DE_at".parse::<Language>(), Ok(Language::De));
        assert_eq!(
            "fr".parse::<Language>(),
            Err(UnsupportedLanguage(String::from("fr")))
        );
    }

    #[test]
    fn test_family_matcher() {
        let matcher = LabelMatcher::Family(&["footway", "path"]);

        assert!(matcher.matches(Some("footway")));
        assert!(matcher.matches(Some("path_grade4")));
        assert!(!matcher.matches(Some("pathway")));
        assert!(!matcher.matches(Some("track_grade1")));
        assert!(!matcher.matches(None));
        assert!(LabelMatcher::Any.matches(None));
    }

    #[test]
    fn test_any_of_matcher() {
        let matcher = LabelMatcher::AnyOf(&[
            LabelMatcher::Family(&["footway"]),
            LabelMatcher::OneOf(&["pedestrian"]),
        ]);

        assert!(matcher.matches(Some("footway_grade2")));
        assert!(matcher.matches(Some("pedestrian")));
        assert!(!matcher.matches(Some("pedestrian_grade1")));
        assert!(!matcher.matches(None));
    }

    #[test]
    fn test_first_matching_outcome_wins() {
        let bike = RULE.evaluate(&context(VehicleClass::Bike, Some("footway_grade1"), Some("gravel")));
        let hike = RULE.evaluate(&context(VehicleClass::Hike, Some("footway"), Some("gravel")));

        assert_eq!(
            bike,
            Some(Warning {
                id: 7,
                message: Some(String::from("bike")),
                criticality: Criticality::Warning,
            })
        );
        assert_eq!(hike.map(|w| w.criticality), Some(Criticality::Hint));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(
            RULE.evaluate(&context(VehicleClass::Bike, Some("footway"), Some("asphalt"))),
            None
        );
        assert_eq!(
            RULE.evaluate(&context(VehicleClass::Bike, None, Some("gravel"))),
            None
        );
    }

    #[test]
    fn test_unknown_language_keeps_warning() {
        let mut context = context(VehicleClass::Bike, Some("footway"), Some("gravel"));
        context.language = None;

        let warning = RULE.evaluate(&context).unwrap();
        assert_eq!(warning.id, 7);
        assert_eq!(warning.message, None);
    }
}
