//! Class specification model.
//!
//! A class is one recurring subject: its weekly period requirement, the
//! teacher who gives it, and the length of the contiguous blocks
//! (sessions) its periods are grouped into.

use serde::{Deserialize, Serialize};

/// Display colors cycled through classes that do not set one.
pub const PALETTE: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98D8C8", "#F7DC6F", "#BB8FCE", "#85C1E2",
    "#F8B739", "#52B788",
];

/// A class to be placed on the weekly grid.
///
/// `periods_per_week` need not be a multiple of `duration`; the
/// remainder becomes one shorter trailing session. Payloads may omit
/// `duration` (1) and `color` (none).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSpec {
    /// Unique class identifier.
    pub id: String,
    /// Display name (e.g. "Mathematics").
    pub name: String,
    /// Teacher giving this class. One teacher can hold only one class
    /// in any given period.
    pub teacher: String,
    /// Periods required per week.
    pub periods_per_week: u32,
    /// Periods per contiguous session block.
    #[serde(default = "default_duration")]
    pub duration: u32,
    /// Display color (hex). Filled from [`PALETTE`] when omitted.
    #[serde(default)]
    pub color: Option<String>,
}

fn default_duration() -> u32 {
    1
}

impl ClassSpec {
    /// Creates a single-period-session class.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        teacher: impl Into<String>,
        periods_per_week: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            teacher: teacher.into(),
            periods_per_week,
            duration: 1,
            color: None,
        }
    }

    /// Sets the session block length in periods.
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Fills missing display colors from [`PALETTE`], keyed by position in
/// the input list. Explicit colors are left untouched.
pub fn assign_palette_colors(classes: &mut [ClassSpec]) {
    for (i, class) in classes.iter_mut().enumerate() {
        if class.color.is_none() {
            class.color = Some(PALETTE[i % PALETTE.len()].to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_builder() {
        let class = ClassSpec::new("math", "Mathematics", "Kim", 5)
            .with_duration(2)
            .with_color("#FF6B6B");

        assert_eq!(class.id, "math");
        assert_eq!(class.name, "Mathematics");
        assert_eq!(class.teacher, "Kim");
        assert_eq!(class.periods_per_week, 5);
        assert_eq!(class.duration, 2);
        assert_eq!(class.color.as_deref(), Some("#FF6B6B"));
    }

    #[test]
    fn test_class_defaults() {
        let class = ClassSpec::new("eng", "English", "Lee", 3);
        assert_eq!(class.duration, 1);
        assert_eq!(class.color, None);
    }

    #[test]
    fn test_palette_fills_missing_only() {
        let mut classes = vec![
            ClassSpec::new("a", "A", "T1", 1),
            ClassSpec::new("b", "B", "T2", 1).with_color("#000000"),
            ClassSpec::new("c", "C", "T3", 1),
        ];
        assign_palette_colors(&mut classes);

        assert_eq!(classes[0].color.as_deref(), Some(PALETTE[0]));
        assert_eq!(classes[1].color.as_deref(), Some("#000000"));
        // Palette index follows list position, not missing-count.
        assert_eq!(classes[2].color.as_deref(), Some(PALETTE[2]));
    }

    #[test]
    fn test_palette_wraps() {
        let mut classes: Vec<ClassSpec> = (0..12)
            .map(|i| ClassSpec::new(format!("c{i}"), format!("C{i}"), "T", 1))
            .collect();
        assign_palette_colors(&mut classes);

        assert_eq!(classes[10].color.as_deref(), Some(PALETTE[0]));
        assert_eq!(classes[11].color.as_deref(), Some(PALETTE[1]));
    }

    #[test]
    fn test_wire_format() {
        let class = ClassSpec::new("sci", "Science", "Park", 4).with_duration(2);
        let json = serde_json::to_value(&class).unwrap();
        assert_eq!(json["id"], "sci");
        assert_eq!(json["name"], "Science");
        assert_eq!(json["teacher"], "Park");
        assert_eq!(json["periods_per_week"], 4);
        assert_eq!(json["duration"], 2);
        assert!(json["color"].is_null());

        let back: ClassSpec = serde_json::from_value(json).unwrap();
        assert_eq!(back, class);
    }

    #[test]
    fn test_deserializes_without_optional_fields() {
        let json = serde_json::json!({
            "id": "math",
            "name": "Mathematics",
            "teacher": "Kim",
            "periods_per_week": 5
        });
        let class: ClassSpec = serde_json::from_value(json).unwrap();
        assert_eq!(class.duration, 1);
        assert_eq!(class.color, None);
    }
}
