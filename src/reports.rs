//! Reports - Esportazione di snapshot in fogli di calcolo
//!
//! Collaboratore di sola lettura: prende una fotografia delle righe
//! correnti e produce un file `<tipo>_<data-ISO>.xlsx` con un foglio,
//! una riga di intestazione e una riga per record (oppure una sola riga
//! a layout fisso per i report di dettaglio).

use crate::entities::{Household, Inspection, MaintenanceRecord};
use chrono::{NaiveDate, Utc};
use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::{Path, PathBuf};

/// One worksheet worth of data: header row plus data rows.
pub struct Report {
    kind: &'static str,
    sheet: &'static str,
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Report {
    pub fn new(kind: &'static str, sheet: &'static str, headers: Vec<&'static str>) -> Self {
        Self {
            kind,
            sheet,
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[&'static str] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// `<report-kind>_<YYYY-MM-DD>.xlsx` for the given date.
    pub fn filename_for(&self, date: NaiveDate) -> String {
        format!("{}_{}.xlsx", self.kind, date)
    }

    /// Filename stamped with today's date.
    pub fn filename(&self) -> String {
        self.filename_for(Utc::now().date_naive())
    }

    /// Writes the workbook into `dir` and returns the full path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(self.sheet)?;
        for (col, header) in self.headers.iter().enumerate() {
            worksheet.write(0, col as u16, *header)?;
        }
        for (row_index, row) in self.rows.iter().enumerate() {
            for (col, cell) in row.iter().enumerate() {
                worksheet.write(row_index as u32 + 1, col as u16, cell.as_str())?;
            }
        }
        let path = dir.join(self.filename());
        workbook.save(&path)?;
        Ok(path)
    }
}

/// Collection snapshot exportable as a one-sheet spreadsheet.
pub trait Exportable {
    const REPORT_KIND: &'static str;
    const SHEET: &'static str;

    fn headers() -> Vec<&'static str>;
    fn row(&self) -> Vec<String>;
}

impl Exportable for Household {
    const REPORT_KIND: &'static str = "households";
    const SHEET: &'static str = "Households";

    fn headers() -> Vec<&'static str> {
        vec![
            "Name",
            "Solar Generation (kWh)",
            "Energy Consumption (kWh)",
            "Address",
            "City",
            "Created At",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.solar_generation.to_string(),
            self.energy_consumption.to_string(),
            self.address.clone(),
            self.city.clone(),
            self.created_at.date_naive().to_string(),
        ]
    }
}

/// Header + one row per record, in snapshot order.
pub fn collection_report<T: Exportable>(items: &[T]) -> Report {
    let mut report = Report::new(T::REPORT_KIND, T::SHEET, T::headers());
    for item in items {
        report.push_row(item.row());
    }
    report
}

/// Single fixed-layout row with the inspection detail view.
pub fn inspection_report(inspection: &Inspection, unit_name: &str) -> Report {
    let mut report = Report::new(
        "inspection_report",
        "Inspection Report",
        vec![
            "Unit",
            "Date",
            "Status",
            "Inspection Details",
            "Comments",
            "Completed Date",
            "Inspected By",
        ],
    );
    report.push_row(vec![
        unit_name.to_string(),
        inspection.inspection_date.to_string(),
        inspection.status.clone().unwrap_or_default(),
        inspection.inspection_details.clone().unwrap_or_default(),
        inspection.comments.clone().unwrap_or_default(),
        inspection
            .completed_date
            .map(|date| date.to_string())
            .unwrap_or_default(),
        inspection.inspected_by.clone().unwrap_or_default(),
    ]);
    report
}

/// Single fixed-layout row with the maintenance detail view.
pub fn maintenance_report(record: &MaintenanceRecord, unit_name: &str) -> Report {
    let assigned_to = match &record.assigned_to {
        Some(staff) => format!(
            "{} ({})",
            staff.name.as_deref().unwrap_or("N/A"),
            staff.department.as_deref().unwrap_or("N/A"),
        ),
        None => "N/A (N/A)".to_string(),
    };
    let mut report = Report::new(
        "maintenance_report",
        "Maintenance Report",
        vec![
            "Unit",
            "Date",
            "Status",
            "Maintenance Type",
            "Specification",
            "Assigned To",
            "Completed Date",
        ],
    );
    report.push_row(vec![
        unit_name.to_string(),
        record.maintenance_date.to_string(),
        record.status.clone().unwrap_or_default(),
        record.maintenance_type.as_str().to_string(),
        record.record_specifications.clone(),
        assigned_to,
        record
            .completed_date
            .map(|date| date.to_string())
            .unwrap_or_default(),
    ]);
    report
}
