use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DemoError, Result};

/// Config files accept the same spellings as `FromStr`, e.g. `"htc"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Manufacturer {
    Nokia,
    Samsung,
    #[serde(rename = "HTC")]
    Htc,
}

impl Manufacturer {
    /// Index order: 0 is Nokia, 1 is Samsung, 2 is HTC.
    pub const ALL: [Manufacturer; 3] = [Manufacturer::Nokia, Manufacturer::Samsung, Manufacturer::Htc];

    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| DemoError::unknown_manufacturer(index))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Manufacturer::Nokia => "Nokia",
            Manufacturer::Samsung => "Samsung",
            Manufacturer::Htc => "HTC",
        }
    }
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Manufacturer {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DemoError::unknown_manufacturer_name(s))
    }
}

impl TryFrom<String> for Manufacturer {
    type Error = DemoError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}
