//! Rider categories and the monthly usage buckets.

use serde::Serialize;
use std::fmt;

/// Upper bound (inclusive) of a month classified as [`UsageCluster::Low`].
pub const LOW_USAGE_MAX: i64 = 100_000;

/// Upper bound (inclusive) of a month classified as [`UsageCluster::Medium`].
pub const MEDIUM_USAGE_MAX: i64 = 200_000;

/// The two rider populations whose counts make up `total_rentals`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Casual,
    Registered,
}

impl UserType {
    pub const ALL: [UserType; 2] = [UserType::Casual, UserType::Registered];

    /// Name of the frame column holding this population's count.
    pub fn column(&self) -> &'static str {
        match self {
            UserType::Casual => "casual",
            UserType::Registered => "registered",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Usage level of a month, bucketed on its total rentals with fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum UsageCluster {
    Low,
    Medium,
    High,
}

impl UsageCluster {
    pub const ALL: [UsageCluster; 3] = [UsageCluster::Low, UsageCluster::Medium, UsageCluster::High];

    /// Buckets a monthly total. Both upper boundaries are closed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bikeshare::UsageCluster;
    ///
    /// assert_eq!(UsageCluster::classify(100_000), UsageCluster::Low);
    /// assert_eq!(UsageCluster::classify(100_001), UsageCluster::Medium);
    /// assert_eq!(UsageCluster::classify(200_001), UsageCluster::High);
    /// ```
    pub fn classify(total_rentals: i64) -> Self {
        if total_rentals <= LOW_USAGE_MAX {
            UsageCluster::Low
        } else if total_rentals <= MEDIUM_USAGE_MAX {
            UsageCluster::Medium
        } else {
            UsageCluster::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UsageCluster::Low => "Low",
            UsageCluster::Medium => "Medium",
            UsageCluster::High => "High",
        }
    }
}

impl fmt::Display for UsageCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(UsageCluster::classify(0), UsageCluster::Low);
        assert_eq!(UsageCluster::classify(100_000), UsageCluster::Low);
        assert_eq!(UsageCluster::classify(100_001), UsageCluster::Medium);
        assert_eq!(UsageCluster::classify(200_000), UsageCluster::Medium);
        assert_eq!(UsageCluster::classify(200_001), UsageCluster::High);
    }

    #[test]
    fn test_user_type_columns() {
        assert_eq!(UserType::Casual.column(), "casual");
        assert_eq!(UserType::Registered.to_string(), "registered");
    }
}
