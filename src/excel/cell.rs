use calamine::Data;

#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub value: String,
    pub cell_type: CellType,
    pub original_type: Option<DataTypeInfo>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellType {
    Text,
    Number,
    Date,
    Boolean,
    Error,
    Empty,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DataTypeInfo {
    Empty,
    String,
    Float(f64),
    Int(i64),
    Bool(bool),
    DateTime(f64),
    DateTimeIso(String),
    DurationIso(String),
    Error,
}

impl Cell {
    pub fn new_with_type(
        value: String,
        cell_type: CellType,
        original_type: Option<DataTypeInfo>,
    ) -> Self {
        Self {
            value,
            cell_type,
            original_type,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new_with_type(value.into(), CellType::Text, Some(DataTypeInfo::String))
    }

    pub fn empty() -> Self {
        Self {
            value: String::new(),
            cell_type: CellType::Empty,
            original_type: Some(DataTypeInfo::Empty),
        }
    }

    /// Whitespace-only text counts as empty, the same way a blank cell does.
    pub fn is_blank(&self) -> bool {
        self.cell_type == CellType::Empty || self.value.trim().is_empty()
    }

    /// Finite numeric value of the cell, if it holds one or is text that parses as one.
    /// `NaN` and infinities are not numbers a spreadsheet can store.
    pub fn as_number(&self) -> Option<f64> {
        let number = match &self.original_type {
            Some(DataTypeInfo::Float(f)) => Some(*f),
            Some(DataTypeInfo::Int(i)) => Some(*i as f64),
            _ if self.cell_type == CellType::Text => self.value.trim().parse::<f64>().ok(),
            _ => None,
        };
        number.filter(|n| n.is_finite())
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::empty(),

            Data::String(s) => Cell::text(s.clone()),

            Data::Float(f) => {
                let value = if *f == (*f as i64) as f64 && f.abs() < 1e10 {
                    (*f as i64).to_string()
                } else {
                    f.to_string()
                };
                Cell::new_with_type(value, CellType::Number, Some(DataTypeInfo::Float(*f)))
            }

            Data::Int(i) => Cell::new_with_type(
                i.to_string(),
                CellType::Number,
                Some(DataTypeInfo::Int(*i)),
            ),

            Data::Bool(b) => Cell::new_with_type(
                if *b { "TRUE" } else { "FALSE" }.to_string(),
                CellType::Boolean,
                Some(DataTypeInfo::Bool(*b)),
            ),

            Data::Error(e) => Cell::new_with_type(
                format!("Error: {:?}", e),
                CellType::Error,
                Some(DataTypeInfo::Error),
            ),

            Data::DateTime(dt) => Cell::new_with_type(
                dt.to_string(),
                CellType::Date,
                Some(DataTypeInfo::DateTime(dt.as_f64())),
            ),

            Data::DateTimeIso(s) => Cell::new_with_type(
                s.clone(),
                CellType::Date,
                Some(DataTypeInfo::DateTimeIso(s.clone())),
            ),

            Data::DurationIso(s) => Cell::new_with_type(
                s.clone(),
                CellType::Text,
                Some(DataTypeInfo::DurationIso(s.clone())),
            ),
        }
    }
}
