use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Day-of-week codes used as cell keys in the persisted grid, Monday first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Day {
    M,
    Tu,
    W,
    Th,
    Fr,
    Sa,
    Su,
}

impl Day {
    pub const ALL: [Day; 7] = [Day::M, Day::Tu, Day::W, Day::Th, Day::Fr, Day::Sa, Day::Su];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Day::M => "M",
            Day::Tu => "Tu",
            Day::W => "W",
            Day::Th => "Th",
            Day::Fr => "Fr",
            Day::Sa => "Sa",
            Day::Su => "Su",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellFill {
    #[default]
    None,
    Selected,
    Partial,
    Filled,
}

impl CellFill {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CellFill::None => "none",
            CellFill::Selected => "selected",
            CellFill::Partial => "partial",
            CellFill::Filled => "filled",
        }
    }

    fn from_wire(raw: &str) -> Self {
        match raw {
            "selected" => CellFill::Selected,
            "partial" => CellFill::Partial,
            "filled" => CellFill::Filled,
            // unknown values clamp rather than fail the decode
            _ => CellFill::None,
        }
    }
}

impl Serialize for CellFill {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CellFill {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&raw))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellColor {
    #[default]
    Black,
    Red,
    Green,
    Blue,
}

impl CellColor {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CellColor::Black => "black",
            CellColor::Red => "red",
            CellColor::Green => "green",
            CellColor::Blue => "blue",
        }
    }

    fn from_wire(raw: &str) -> Self {
        match raw {
            "red" => CellColor::Red,
            "green" => CellColor::Green,
            "blue" => CellColor::Blue,
            _ => CellColor::Black,
        }
    }
}

impl Serialize for CellColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CellColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&raw))
    }
}

/// Row completion status; stored as `"A"` / `"D"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowStatus {
    #[default]
    Active,
    Done,
}

impl RowStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RowStatus::Active => "A",
            RowStatus::Done => "D",
        }
    }

    fn from_wire(raw: &str) -> Self {
        match raw {
            "D" => RowStatus::Done,
            _ => RowStatus::Active,
        }
    }
}

impl Serialize for RowStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RowStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&raw))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CellState {
    #[serde(default)]
    pub state: CellFill,

    #[serde(default)]
    pub color: CellColor,

    #[serde(default)]
    pub weeks: Vec<i32>,
}

impl CellState {
    #[must_use]
    pub fn seeded(week: i32) -> Self {
        Self {
            state: CellFill::None,
            color: CellColor::Black,
            weeks: vec![week],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Row {
    pub id: String,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub status: RowStatus,

    #[serde(default)]
    pub weeks: Vec<i32>,

    #[serde(default, rename = "cellStates")]
    pub cell_states: BTreeMap<Day, CellState>,
}

impl Row {
    #[must_use]
    pub fn new_seeded(id: String, week: i32) -> Self {
        Self {
            id,
            text: String::new(),
            status: RowStatus::Active,
            weeks: vec![week],
            cell_states: BTreeMap::new(),
        }
    }
}
