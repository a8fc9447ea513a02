//! Recommendation models

/// App suggestion categories, in the order they are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppCategory {
    Taxi,
    Hotel,
    Emergency,
    Tourism,
    Food,
}

impl AppCategory {
    pub const ALL: [AppCategory; 5] = [
        AppCategory::Taxi,
        AppCategory::Hotel,
        AppCategory::Emergency,
        AppCategory::Tourism,
        AppCategory::Food,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            AppCategory::Taxi => "Taxi Apps",
            AppCategory::Hotel => "Hotel Apps",
            AppCategory::Emergency => "Emergency Apps",
            AppCategory::Tourism => "Tourism Apps",
            AppCategory::Food => "Food Apps",
        }
    }

    /// Column holding the comma-separated app names.
    pub(crate) fn names_column(&self) -> &'static str {
        self.title()
    }

    /// Column holding the pipe-separated links.
    pub(crate) fn links_column(&self) -> &'static str {
        match self {
            AppCategory::Taxi => "Taxi App Links",
            AppCategory::Hotel => "Hotel App Links",
            AppCategory::Emergency => "Emergency App Links",
            AppCategory::Tourism => "Tourism App Links",
            AppCategory::Food => "Food App Links",
        }
    }
}

/// One suggested app with its install or info link. The link may be
/// empty when the source row had more names than links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppListing {
    pub name: String,
    pub link: String,
}

/// All suggestions for one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateRecommendation {
    pub state: String,
    pub apps: Vec<(AppCategory, Vec<AppListing>)>,
    pub famous_foods: Vec<String>,
    pub famous_purchases: String,
    pub special_features: Vec<String>,
}

impl StateRecommendation {
    pub fn apps_for(&self, category: AppCategory) -> &[AppListing] {
        self.apps
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, listings)| listings.as_slice())
            .unwrap_or(&[])
    }
}
