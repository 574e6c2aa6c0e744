//! In-memory list of favorite city names.
//!
//! The list is rebuilt from [`DEFAULT_FAVORITES`] on every start and is never
//! saved. Entries are unique by exact, case-sensitive string match.

use std::fmt;

pub const DEFAULT_FAVORITES: [&str; 11] = [
    "London",
    "Los Angeles",
    "Kochi",
    "Jaipur",
    "İstanbul",
    "New York City",
    "Philadelphia",
    "Paris",
    "San Diego",
    "Agra",
    "Tokyo",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorites {
    cities: Vec<String>,
}

/// Result of [`Favorites::add`]. Displays as the console message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(String),
    AlreadyPresent(String),
}

/// Result of [`Favorites::remove`]. Displays as the console message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(String),
    NotPresent(String),
}

impl Favorites {
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn contains(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c == city)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(String::as_str)
    }

    /// Append `city` unless an identical entry exists.
    pub fn add(&mut self, city: &str) -> AddOutcome {
        if self.contains(city) {
            return AddOutcome::AlreadyPresent(city.to_owned());
        }

        self.cities.push(city.to_owned());
        AddOutcome::Added(city.to_owned())
    }

    /// Remove the entry equal to `city`, keeping the order of the rest.
    pub fn remove(&mut self, city: &str) -> RemoveOutcome {
        match self.cities.iter().position(|c| c == city) {
            Some(idx) => {
                self.cities.remove(idx);
                RemoveOutcome::Removed(city.to_owned())
            }
            None => RemoveOutcome::NotPresent(city.to_owned()),
        }
    }
}

impl Default for Favorites {
    fn default() -> Self {
        DEFAULT_FAVORITES.iter().map(|c| c.to_string()).collect()
    }
}

impl FromIterator<String> for Favorites {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut favorites = Favorites { cities: Vec::new() };
        for city in iter {
            favorites.add(&city);
        }
        favorites
    }
}

impl fmt::Display for Favorites {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Favorite Cities:")?;
        for city in &self.cities {
            write!(f, "\n{city}")?;
        }
        Ok(())
    }
}

impl fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddOutcome::Added(city) => {
                write!(f, "Successfully added {city} to the favorite list.")
            }
            AddOutcome::AlreadyPresent(city) => write!(f, "{city} is already in the list."),
        }
    }
}

impl fmt::Display for RemoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoveOutcome::Removed(city) => {
                write!(f, "{city} is removed successfully from the list.")
            }
            RemoveOutcome::NotPresent(city) => write!(f, "{city} is not in the list."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(f: &Favorites) -> Vec<String> {
        f.iter().map(str::to_owned).collect()
    }

    #[test]
    fn default_list_has_eleven_cities_in_order() {
        let favorites = Favorites::default();

        assert_eq!(favorites.len(), 11);
        assert_eq!(snapshot(&favorites), DEFAULT_FAVORITES.to_vec());
    }

    #[test]
    fn add_new_city_appends_once() {
        let mut favorites = Favorites::default();
        let before = snapshot(&favorites);

        let outcome = favorites.add("Rome");

        assert_eq!(outcome, AddOutcome::Added("Rome".into()));
        assert_eq!(favorites.len(), 12);
        assert_eq!(favorites.iter().last(), Some("Rome"));
        assert_eq!(snapshot(&favorites)[..11], before[..]);
    }

    #[test]
    fn add_duplicate_leaves_list_unchanged() {
        let mut favorites = Favorites::default();
        let before = snapshot(&favorites);

        let outcome = favorites.add("London");

        assert_eq!(outcome, AddOutcome::AlreadyPresent("London".into()));
        assert_eq!(snapshot(&favorites), before);
    }

    #[test]
    fn add_is_case_sensitive() {
        let mut favorites = Favorites::default();

        assert_eq!(favorites.add("london"), AddOutcome::Added("london".into()));
        assert!(favorites.contains("London"));
        assert!(favorites.contains("london"));
        assert_eq!(favorites.len(), 12);
    }

    #[test]
    fn remove_present_city_keeps_relative_order() {
        let mut favorites = Favorites::default();
        let mut expected = snapshot(&favorites);
        expected.retain(|c| c != "Kochi");

        let outcome = favorites.remove("Kochi");

        assert_eq!(outcome, RemoveOutcome::Removed("Kochi".into()));
        assert_eq!(favorites.len(), 10);
        assert!(!favorites.contains("Kochi"));
        assert_eq!(snapshot(&favorites), expected);
    }

    #[test]
    fn remove_absent_city_leaves_list_unchanged() {
        let mut favorites = Favorites::default();
        let before = snapshot(&favorites);

        let outcome = favorites.remove("Rome");

        assert_eq!(outcome, RemoveOutcome::NotPresent("Rome".into()));
        assert_eq!(snapshot(&favorites), before);
    }

    #[test]
    fn display_lists_entries_in_insertion_order() {
        let mut favorites: Favorites = ["Paris", "Agra"].map(String::from).into_iter().collect();
        favorites.add("Berlin");
        favorites.add("Agra");

        assert_eq!(favorites.to_string(), "Favorite Cities:\nParis\nAgra\nBerlin");
    }

    #[test]
    fn display_of_empty_list_is_header_only() {
        let favorites: Favorites = std::iter::empty().collect();

        assert!(favorites.is_empty());
        assert_eq!(favorites.to_string(), "Favorite Cities:");
    }

    #[test]
    fn outcomes_render_console_messages() {
        assert_eq!(
            AddOutcome::Added("Rome".into()).to_string(),
            "Successfully added Rome to the favorite list."
        );
        assert_eq!(
            AddOutcome::AlreadyPresent("London".into()).to_string(),
            "London is already in the list."
        );
        assert_eq!(
            RemoveOutcome::Removed("Kochi".into()).to_string(),
            "Kochi is removed successfully from the list."
        );
        assert_eq!(
            RemoveOutcome::NotPresent("Rome".into()).to_string(),
            "Rome is not in the list."
        );
    }
}
