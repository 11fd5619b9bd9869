use crate::libs::report::{AttendanceRow, MonthlyRowFormatted, StageCellRow, TrackingRowFormatted, WorkEntryRow};
use anyhow::Result;
use prettytable::{row, Row, Table};

pub struct View {}

impl View {
    pub fn attendance(rows: &[AttendanceRow]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row![
            "#", "DEPT", "ID", "NAME", "ROLE", "DATE", "IN", "OUT", "SHIFT", "SHIFT IN", "SHIFT OUT", "WORK", "OT", "TOTAL", "LATE", "EARLY",
            "STATUS", "PUNCH RECORD"
        ]);
        for entry in rows {
            table.add_row(row![
                entry.serial,
                entry.department,
                entry.person_id,
                entry.person_name,
                entry.role,
                entry.date,
                entry.in_time,
                entry.out_time,
                entry.shift_name,
                entry.shift_in,
                entry.shift_out,
                entry.work_duration,
                entry.overtime,
                entry.total_duration,
                entry.late_by,
                entry.early_by,
                entry.status,
                entry.punch_record
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn daily(rows: &[WorkEntryRow]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "JOB ID", "JOB", "DATE", "START", "END", "DURATION", "STAGE", "PERFORMER", "PAGES"]);
        for entry in rows {
            table.add_row(row![
                entry.serial,
                entry.job_id,
                entry.job_name,
                entry.date,
                entry.start,
                entry.end,
                entry.duration,
                entry.stage,
                entry.performer,
                entry.page_count
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn monthly(rows: &[MonthlyRowFormatted]) -> Result<()> {
        let mut table = Table::new();

        // Date columns are the union of every person's active days.
        let mut dates: Vec<String> = Vec::new();
        for row in rows {
            for cell in &row.cells {
                if !dates.contains(&cell.date) {
                    dates.push(cell.date.clone());
                }
            }
        }

        let mut header = vec!["#".to_string(), "ID".to_string(), "NAME".to_string()];
        header.extend(dates.iter().cloned());
        header.push("TOTAL PAGES".to_string());
        header.push("TOTAL HOURS".to_string());
        table.add_row(Row::from(header));

        for entry in rows {
            let mut cells = vec![entry.serial.to_string(), entry.person_id.to_string(), entry.person_name.clone()];
            for date in &dates {
                match entry.cells.iter().find(|cell| &cell.date == date) {
                    Some(cell) => cells.push(format!("{}p/{:.1}h", cell.pages, cell.hours)),
                    None => cells.push("-".to_string()),
                }
            }
            cells.push(entry.total_pages.to_string());
            cells.push(format!("{:.1}", entry.total_hours));
            table.add_row(Row::from(cells));
        }
        table.printstd();

        Ok(())
    }

    pub fn tracking(rows: &[TrackingRowFormatted]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "JOB ID", "JOB", "PO HRS", "DATE", "DTP", "QC", "QA", "QC CXN", "QA CXN"]);
        for entry in rows {
            table.add_row(row![
                entry.sequence,
                entry.job_id,
                entry.job_name,
                format!("{:.1}", entry.po_hours),
                entry.date,
                Self::stage_summary(&entry.dtp),
                Self::stage_summary(&entry.qc),
                Self::stage_summary(&entry.qa),
                Self::stage_summary(&entry.qc_cxn),
                Self::stage_summary(&entry.qa_cxn)
            ]);
        }
        table.printstd();

        Ok(())
    }

    fn stage_summary(cell: &StageCellRow) -> String {
        if cell.status == "Not Started" {
            return "-".to_string();
        }
        format!("{} {}-{} ({}) {}", cell.performer, cell.start, cell.end, cell.elapsed, cell.status)
    }
}
