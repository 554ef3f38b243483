#![allow(dead_code)]

use calamine::{open_workbook_auto, Data, Range, Reader};
use rust_xlsxwriter::Workbook;
use std::path::Path;

pub enum Value<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

pub use Value::{Blank, Number, Text};

/// Writes a single-sheet workbook with the given rows (first row is the header).
pub fn write_input(path: &Path, rows: &[Vec<Value>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Transactions").unwrap();

    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            match value {
                Text(s) => {
                    worksheet.write_string(r as u32, c as u16, *s).unwrap();
                }
                Number(n) => {
                    worksheet.write_number(r as u32, c as u16, *n).unwrap();
                }
                Blank => {}
            }
        }
    }

    workbook.save(path).unwrap();
}

pub fn sales_rows() -> Vec<Vec<Value<'static>>> {
    vec![
        vec![Text("Region"), Text("Client"), Text("Amount")],
        vec![Text("North"), Text("B"), Number(20.0)],
        vec![Text("South"), Text("Acme"), Number(5.0)],
        vec![Text("North"), Text("A"), Number(4.0)],
        vec![Text("North"), Text("A"), Number(6.0)],
        vec![Text("South"), Text("Zed"), Number(2.5)],
    ]
}

/// Reads back every sheet of a generated report.
pub fn read_report(path: &Path) -> Vec<(String, Range<Data>)> {
    let mut workbook = open_workbook_auto(path).unwrap();
    let names = workbook.sheet_names();
    names
        .into_iter()
        .map(|name| {
            let range = workbook.worksheet_range(&name).unwrap();
            (name, range)
        })
        .collect()
}

pub fn text(range: &Range<Data>, row: u32, col: u32) -> String {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => s.clone(),
        other => panic!("expected text at ({row}, {col}), found {other:?}"),
    }
}

pub fn number(range: &Range<Data>, row: u32, col: u32) -> f64 {
    match range.get_value((row, col)) {
        Some(Data::Float(f)) => *f,
        Some(Data::Int(i)) => *i as f64,
        other => panic!("expected number at ({row}, {col}), found {other:?}"),
    }
}

pub fn is_blank(range: &Range<Data>, row: u32, col: u32) -> bool {
    matches!(range.get_value((row, col)), None | Some(Data::Empty))
}
