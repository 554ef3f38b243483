mod cell;
mod sheet;
mod workbook;

pub use cell::{Cell, CellType, DataTypeInfo};
pub use sheet::Sheet;
pub use workbook::open_sheet;
