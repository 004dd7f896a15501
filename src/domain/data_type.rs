// ============================================================
// Layer 3 - Data Type
// ============================================================
// Which slice of the corpus a loader serves.
//
//   train    - the shuffled indices after the validation block
//   valid    - the first ceil(N * validation_split) shuffled indices
//   finetune - every sample, in file order, never split
//
// Parsing is the only place a bad name can enter the system,
// so it fails immediately with the offending name.

use std::{fmt, str::FromStr};

use anyhow::bail;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Train,
    Valid,
    Finetune,
}

impl DataType {
    /// True for the data types that draw from a train/validation split
    pub fn is_split(self) -> bool {
        matches!(self, DataType::Train | DataType::Valid)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Train    => "train",
            DataType::Valid    => "valid",
            DataType::Finetune => "finetune",
        }
    }
}

impl FromStr for DataType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "train"    => Ok(DataType::Train),
            "valid"    => Ok(DataType::Valid),
            "finetune" => Ok(DataType::Finetune),
            other      => bail!("data_type: '{}' is not defined.", other),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
