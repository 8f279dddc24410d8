//! Location codes
//!
//! Each distinct location in a report is abbreviated to a short uppercase
//! code. Codes follow spreadsheet column naming: `A`..`Z`, then `AA`, `AB`,
//! and so on, so there is no upper bound on the number of locations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Short uppercase code standing in for a location name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationCode(String);

impl LocationCode {
    /// Code for the zero-based position `index` in discovery order
    ///
    /// ```
    /// use pettycash::models::LocationCode;
    /// assert_eq!(LocationCode::from_index(0).as_str(), "A");
    /// assert_eq!(LocationCode::from_index(26).as_str(), "AA");
    /// ```
    pub fn from_index(index: usize) -> Self {
        let mut letters = Vec::new();
        let mut n = index + 1;
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push(b'A' + rem as u8);
            n = (n - 1) / 26;
        }
        letters.reverse();
        Self(letters.into_iter().map(char::from).collect())
    }

    /// Get the code text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mapping from location name to code, remembering discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationCodes {
    order: Vec<(String, LocationCode)>,
    index: HashMap<String, usize>,
}

impl LocationCodes {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the code for `location`, assigning the next one if unseen
    pub fn get_or_assign(&mut self, location: &str) -> &LocationCode {
        let position = match self.index.get(location) {
            Some(&position) => position,
            None => {
                let position = self.order.len();
                self.order
                    .push((location.to_string(), LocationCode::from_index(position)));
                self.index.insert(location.to_string(), position);
                position
            }
        };
        &self.order[position].1
    }

    /// Look up the code for a location
    pub fn code_for(&self, location: &str) -> Option<&LocationCode> {
        self.index.get(location).map(|&i| &self.order[i].1)
    }

    /// Iterate over (location, code) pairs in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocationCode)> {
        self.order.iter().map(|(name, code)| (name.as_str(), code))
    }

    /// Number of distinct locations
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if no location has been coded
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
