use calamine::Data;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

// Convert an Excel date serial to an ISO 8601 string
pub fn excel_date_to_iso_string(excel_date: f64) -> Option<String> {
    if !excel_date.is_finite() || excel_date < 0.0 {
        return None;
    }

    // Excel counts a non-existent 1900-02-29 as day 60
    let days = if excel_date >= 60.0 {
        excel_date - 1.0
    } else {
        excel_date
    };

    let base_date = NaiveDate::from_ymd_opt(1900, 1, 1)?;
    let whole_days = days.trunc() as i64;
    let fractional_day = days.fract();

    // Day 1 is 1900-01-01
    let date = base_date.checked_add_signed(Duration::try_days(whole_days - 1)?)?;

    let seconds = (fractional_day * 86_400.0).round() as u32;
    if seconds == 0 {
        return Some(date.format("%Y-%m-%d").to_string());
    }

    // Rounding can land exactly on midnight of the next day
    let (date, seconds) = if seconds >= 86_400 {
        (date.succ_opt()?, seconds - 86_400)
    } else {
        (date, seconds)
    };

    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)?;
    Some(
        NaiveDateTime::new(date, time)
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string(),
    )
}

/// Elapsed time as `[h]:mm:ss`, the way Excel shows duration cells.
pub fn excel_duration_to_string(days: f64) -> Option<String> {
    if !days.is_finite() {
        return None;
    }

    let total_seconds = (days.abs() * 86_400.0).round() as u64;
    let sign = if days < 0.0 && total_seconds > 0 { "-" } else { "" };

    Some(format!(
        "{}{}:{:02}:{:02}",
        sign,
        total_seconds / 3600,
        (total_seconds % 3600) / 60,
        total_seconds % 60
    ))
}

fn float_to_string(f: f64) -> String {
    if f == (f as i64) as f64 && f.abs() < 1e10 {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}

/// String form of a cell value; `""` for blank cells.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => float_to_string(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => {
            if *b {
                "TRUE".to_string()
            } else {
                "FALSE".to_string()
            }
        }
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            let rendered = if dt.is_duration() {
                excel_duration_to_string(serial)
            } else {
                excel_date_to_iso_string(serial)
            };
            rendered.unwrap_or_else(|| float_to_string(serial))
        }
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{CellErrorType, ExcelDateTime, ExcelDateTimeType};

    #[test]
    fn integral_floats_drop_the_fraction() {
        assert_eq!(cell_to_string(&Data::Float(5.0)), "5");
        assert_eq!(cell_to_string(&Data::Float(-12.0)), "-12");
        assert_eq!(cell_to_string(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_to_string(&Data::Int(42)), "42");
    }

    #[test]
    fn blank_and_text() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String("hello".to_string())), "hello");
        assert_eq!(cell_to_string(&Data::String(String::new())), "");
    }

    #[test]
    fn booleans_use_excel_spelling() {
        assert_eq!(cell_to_string(&Data::Bool(true)), "TRUE");
        assert_eq!(cell_to_string(&Data::Bool(false)), "FALSE");
    }

    #[test]
    fn errors_use_excel_spelling() {
        assert_eq!(cell_to_string(&Data::Error(CellErrorType::Div0)), "#DIV/0!");
        assert_eq!(cell_to_string(&Data::Error(CellErrorType::NA)), "#N/A");
    }

    #[test]
    fn date_serials() {
        assert_eq!(excel_date_to_iso_string(1.0).as_deref(), Some("1900-01-01"));
        assert_eq!(excel_date_to_iso_string(59.0).as_deref(), Some("1900-02-28"));
        assert_eq!(excel_date_to_iso_string(61.0).as_deref(), Some("1900-03-01"));
        assert_eq!(excel_date_to_iso_string(45000.0).as_deref(), Some("2023-03-15"));
        assert_eq!(
            excel_date_to_iso_string(45000.5).as_deref(),
            Some("2023-03-15T12:00:00")
        );
        assert_eq!(excel_date_to_iso_string(-1.0), None);
    }

    #[test]
    fn fractional_serials_before_the_leap_day_keep_their_date() {
        assert_eq!(
            excel_date_to_iso_string(59.5).as_deref(),
            Some("1900-02-28T12:00:00")
        );
        assert_eq!(
            excel_date_to_iso_string(60.5).as_deref(),
            Some("1900-02-28T12:00:00")
        );
        assert_eq!(
            excel_date_to_iso_string(61.25).as_deref(),
            Some("1900-03-01T06:00:00")
        );
    }

    #[test]
    fn duration_cells_are_not_dates() {
        let duration = Data::DateTime(ExcelDateTime::new(1.5, ExcelDateTimeType::TimeDelta, false));
        assert_eq!(cell_to_string(&duration), "36:00:00");

        let short = Data::DateTime(ExcelDateTime::new(
            0.5 / 24.0,
            ExcelDateTimeType::TimeDelta,
            false,
        ));
        assert_eq!(cell_to_string(&short), "0:30:00");

        let date = Data::DateTime(ExcelDateTime::new(45000.0, ExcelDateTimeType::DateTime, false));
        assert_eq!(cell_to_string(&date), "2023-03-15");
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(excel_duration_to_string(0.0).as_deref(), Some("0:00:00"));
        assert_eq!(excel_duration_to_string(2.0).as_deref(), Some("48:00:00"));
        assert_eq!(excel_duration_to_string(-0.25).as_deref(), Some("-6:00:00"));
        assert_eq!(excel_duration_to_string(f64::NAN), None);
    }
}
