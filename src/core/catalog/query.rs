use std::collections::HashMap;

use super::types::{YearBest, YearTitle};
use super::Catalog;

impl Catalog {
    /// Titles released in `year`, in load order.
    pub fn find_by_year(&self, year: i32) -> Vec<String> {
        self.movies
            .iter()
            .filter(|m| m.year == year)
            .map(|m| m.title.clone())
            .collect()
    }

    /// One entry per distinct year: the highest-rated movie of that year.
    ///
    /// Years come out in the order they first appear in the catalog. On equal
    /// ratings the movie loaded first wins.
    pub fn highest_rated_per_year(&self) -> Vec<YearBest> {
        let mut slots: HashMap<i32, usize> = HashMap::new();
        let mut best: Vec<usize> = Vec::new();

        for (idx, movie) in self.movies.iter().enumerate() {
            match slots.get(&movie.year) {
                Some(&slot) => {
                    if movie.rating > self.movies[best[slot]].rating {
                        best[slot] = idx;
                    }
                }
                None => {
                    slots.insert(movie.year, best.len());
                    best.push(idx);
                }
            }
        }

        best.into_iter()
            .map(|idx| {
                let m = &self.movies[idx];
                YearBest { year: m.year, rating: m.rating, title: m.title.clone() }
            })
            .collect()
    }

    /// Movies listing `language` among their spoken languages (exact, case-sensitive).
    pub fn find_by_language(&self, language: &str) -> Vec<YearTitle> {
        self.movies
            .iter()
            .filter(|m| m.languages.contains(language))
            .map(|m| YearTitle { year: m.year, title: m.title.clone() })
            .collect()
    }
}
