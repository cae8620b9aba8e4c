use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// An inclusive index range `[from, to]` over a route's coordinates, tagged
/// with the value of one path detail (surface, road class, track type...).
///
/// Intervals without a label are skipped by every aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledInterval<L = Option<String>> {
    pub from: usize,
    pub to: usize,
    pub label: L,
}

pub type Segment = [usize; 2];

impl<L> LabeledInterval<L> {
    pub fn new(from: usize, to: usize, label: L) -> Self {
        debug_assert!(from <= to, "interval [{from}, {to}] is reversed");
        Self { from, to, label }
    }

    pub fn segment(&self) -> Segment {
        [self.from, self.to]
    }

    /// Strict overlap test, intervals only touching at one endpoint do not
    /// interact.
    #[inline]
    pub fn interacts_with<M>(&self, other: &LabeledInterval<M>) -> bool {
        other.to > self.from && other.from < self.to
    }
}

impl LabeledInterval {
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl From<(usize, usize, Option<Value>)> for LabeledInterval {
    fn from((from, to, label): (usize, usize, Option<Value>)) -> Self {
        let label = match label {
            None | Some(Value::Null) => None,
            Some(Value::String(label)) => Some(label),
            Some(other) => Some(other.to_string()),
        };

        LabeledInterval { from, to, label }
    }
}

/// Path details come as `[from, to, value]` triples where the value may be
/// any JSON scalar.
impl<'de> Deserialize<'de> for LabeledInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = <(usize, usize, Option<Value>)>::deserialize(deserializer)?;
        Ok(raw.into())
    }
}

impl Serialize for LabeledInterval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.from, self.to, &self.label).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_mixed_labels() {
        let intervals: Vec<LabeledInterval> =
            serde_json::from_str(r#"[[0, 1, null], [1, 4, "asphalt"], [4, 6, 30.0], [6, 7, true]]"#)
                .unwrap();

        assert_eq!(intervals[0], LabeledInterval::new(0, 1, None));
        assert_eq!(intervals[1].label(), Some("asphalt"));
        assert_eq!(intervals[2].label(), Some("30.0"));
        assert_eq!(intervals[3].label(), Some("true"));
    }

    #[test]
    fn test_deserialize_missing_label() {
        let intervals: Vec<LabeledInterval> = serde_json::from_str("[[0, 3, null]]").unwrap();
        assert_eq!(intervals[0].label(), None);
    }

    #[test]
    fn test_serialize_as_triple() {
        let interval = LabeledInterval::new(2, 5, Some(String::from("gravel")));
        assert_eq!(
            serde_json::to_string(&interval).unwrap(),
            r#"[2,5,"gravel"]"#
        );
    }

    #[test]
    fn test_interacts_with_is_strict() {
        let interval = LabeledInterval::new(3, 7, ());

        assert!(interval.interacts_with(&LabeledInterval::new(0, 4, ())));
        assert!(interval.interacts_with(&LabeledInterval::new(6, 10, ())));
        assert!(interval.interacts_with(&LabeledInterval::new(4, 5, ())));
        assert!(!interval.interacts_with(&LabeledInterval::new(0, 3, ())));
        assert!(!interval.interacts_with(&LabeledInterval::new(7, 9, ())));
    }
}
