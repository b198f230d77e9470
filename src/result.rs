//! The uniform result of every power analysis.

use std::fmt;

use crate::hypothesis::Hypothesis;

/// The result of a power analysis.
///
/// Contains a description of the method, the value that was solved and every
/// parameter of the design (including the solved one and the power), in the
/// same order as the inputs of the corresponding function.
///
/// It is immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerResult {
    method: &'static str,
    note: Option<&'static str>,
    url: &'static str,
    solved: &'static str,
    alternative: Option<Hypothesis>,
    values: Vec<(&'static str, f64)>,
}

impl PowerResult {
    #[must_use]
    pub const fn new(
        method: &'static str,
        note: Option<&'static str>,
        url: &'static str,
        solved: &'static str,
        alternative: Option<Hypothesis>,
        values: Vec<(&'static str, f64)>,
    ) -> PowerResult {
        return PowerResult {
            method,
            note,
            url,
            solved,
            alternative,
            values,
        };
    }

    /// Description of the test.
    #[must_use]
    pub const fn method(&self) -> &'static str {
        return self.method;
    }

    /// Extra information (usually how the sample size is counted).
    #[must_use]
    pub const fn note(&self) -> Option<&'static str> {
        return self.note;
    }

    /// Where to find more information about the method.
    #[must_use]
    pub const fn url(&self) -> &'static str {
        return self.url;
    }

    /// The name of the parameter that was solved (`"power"` if every other
    /// parameter was given).
    #[must_use]
    pub const fn solved(&self) -> &'static str {
        return self.solved;
    }

    /// The alternative hypothesis, if the test has a direction.
    #[must_use]
    pub const fn alternative(&self) -> Option<Hypothesis> {
        return self.alternative;
    }

    /// Every `(name, value)` pair, in order.
    #[must_use]
    pub fn values(&self) -> &[(&'static str, f64)] {
        return &self.values;
    }

    /// Returns the value of the parameter `name`, if it exists.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        return self
            .values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value);
    }

    /// The value that was solved.
    #[must_use]
    pub fn solved_value(&self) -> f64 {
        return self.get(self.solved).unwrap_or(f64::NAN);
    }

    /// The power of the (final) design.
    #[must_use]
    pub fn power(&self) -> f64 {
        return self.get("power").unwrap_or(f64::NAN);
    }

    /// The significance level of the design.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        return self.get("alpha").unwrap_or(f64::NAN);
    }
}

/// Formats with at most 7 decimals and without trailing zeros.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value}");
    }
    let text: String = format!("{value:.7}");
    return text.trim_end_matches('0').trim_end_matches('.').to_string();
}

impl fmt::Display for PowerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f)?;

        let width: usize = self
            .values
            .iter()
            .map(|(name, _)| name.len())
            .chain(self.alternative.map(|_| "alternative".len()))
            .max()
            .unwrap_or(0);

        for (name, value) in &self.values {
            writeln!(f, "    {name:>width$} = {}", format_value(*value))?;
        }
        if let Some(alternative) = self.alternative {
            writeln!(f, "    {:>width$} = {alternative}", "alternative")?;
        }

        writeln!(f)?;
        if let Some(note) = self.note {
            writeln!(f, "NOTE: {note}")?;
        }
        return write!(f, "URL: {}", self.url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> PowerResult {
        return PowerResult::new(
            "Power for One-way ANOVA",
            Some("n is the total sample size (overall)"),
            "http://psychstat.org/anova",
            "n",
            None,
            vec![
                ("k", 4.0),
                ("n", 179.0),
                ("f", 0.25),
                ("alpha", 0.05),
                ("power", 0.80118),
            ],
        );
    }

    #[test]
    fn accessors() {
        let result: PowerResult = example();
        assert_eq!(result.solved_value(), 179.0);
        assert_eq!(result.alpha(), 0.05);
        assert_eq!(result.get("f"), Some(0.25));
        assert_eq!(result.get("icc"), None);
    }

    #[test]
    fn display_table() {
        let text: String = example().to_string();
        assert!(text.starts_with("Power for One-way ANOVA\n"));
        assert!(text.contains("        n = 179\n"));
        assert!(text.contains("    alpha = 0.05\n"));
        assert!(text.contains("    power = 0.80118\n"));
        assert!(text.ends_with("URL: http://psychstat.org/anova"));
    }
}
