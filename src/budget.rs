//! Labeled advertising-budget input passed to the regression model.

/// Feature labels in the exact column order the model is trained on.
pub const FEATURE_COLUMNS: [&str; 3] = ["youtube", "tiktok", "instagram"];

/// One row of advertising budgets, in USD.
///
/// Lives only for the duration of a single form submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetRecord {
    /// YouTube advertising budget.
    pub youtube: f64,
    /// TikTok advertising budget.
    pub tiktok: f64,
    /// Instagram advertising budget.
    pub instagram: f64,
}

impl BudgetRecord {
    /// Build a record from the three channel budgets.
    pub fn new(youtube: f64, tiktok: f64, instagram: f64) -> Self {
        Self {
            youtube,
            tiktok,
            instagram,
        }
    }

    /// Labeled values in the fixed column order.
    pub fn columns(&self) -> [(&'static str, f64); 3] {
        [
            ("youtube", self.youtube),
            ("tiktok", self.tiktok),
            ("instagram", self.instagram),
        ]
    }

    /// Look up a value by feature label.
    pub fn value(&self, feature: &str) -> Option<f64> {
        self.columns()
            .into_iter()
            .find(|(label, _)| *label == feature)
            .map(|(_, value)| value)
    }
}
