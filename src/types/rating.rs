// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;

/// The reviewer's self-reported recall quality for one presentation of a
/// card.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Rating {
    Hard,
    Good,
    Easy,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Hard => "hard",
            Rating::Good => "good",
            Rating::Easy => "easy",
        }
    }

    /// `good` and `easy` count as correct answers, `hard` as incorrect.
    pub fn is_correct(&self) -> bool {
        match self {
            Rating::Hard => false,
            Rating::Good | Rating::Easy => true,
        }
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Rating {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hard" => Ok(Rating::Hard),
            "good" => Ok(Rating::Good),
            "easy" => Ok(Rating::Easy),
            _ => Err(Error::InvalidRating {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Rating {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rating> for String {
    fn from(rating: Rating) -> Self {
        rating.as_str().to_string()
    }
}

/// Button numbering, left to right: 1 = hard, 2 = good, 3 = easy.
impl TryFrom<u8> for Rating {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Rating::Hard),
            2 => Ok(Rating::Good),
            3 => Ok(Rating::Easy),
            _ => Err(Error::InvalidRating {
                value: value.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_parse() -> Fallible<()> {
        assert_eq!("hard".parse::<Rating>()?, Rating::Hard);
        assert_eq!("Good".parse::<Rating>()?, Rating::Good);
        assert_eq!(" EASY ".parse::<Rating>()?, Rating::Easy);
        Ok(())
    }

    #[test]
    fn test_parse_invalid() {
        let err = "forgot".parse::<Rating>().unwrap_err();
        assert!(matches!(err, Error::InvalidRating { ref value } if value == "forgot"));
    }

    #[test]
    fn test_try_from_u8() -> Fallible<()> {
        assert_eq!(Rating::try_from(1u8)?, Rating::Hard);
        assert_eq!(Rating::try_from(2u8)?, Rating::Good);
        assert_eq!(Rating::try_from(3u8)?, Rating::Easy);
        assert!(Rating::try_from(0u8).is_err());
        assert!(Rating::try_from(4u8).is_err());
        Ok(())
    }

    #[test]
    fn test_is_correct() {
        assert!(!Rating::Hard.is_correct());
        assert!(Rating::Good.is_correct());
        assert!(Rating::Easy.is_correct());
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Rating::Easy).unwrap();
        assert_eq!(json, "\"easy\"");
        let rating: Rating = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(rating, Rating::Hard);
        let result: Result<Rating, _> = serde_json::from_str("\"again\"");
        assert!(result.is_err());
    }
}
