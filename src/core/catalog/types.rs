/// Best-rated movie of one year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearBest {
    pub year: i32,
    pub rating: f64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearTitle {
    pub year: i32,
    pub title: String,
}

/// Outcome of a load pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// What the menu can ask of a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    ByYear(i32),
    HighestRatedPerYear,
    ByLanguage(String),
    Exit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Titles(Vec<String>),
    YearBest(Vec<YearBest>),
    YearTitles(Vec<YearTitle>),
    Exit,
}
