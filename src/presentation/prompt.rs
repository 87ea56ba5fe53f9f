// Interactive terminal input for report requests
use crate::application::error::ReportError;
use crate::application::ports::{ReportInput, ReportRequest};
use anyhow::{Context, Result};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

pub struct TerminalInput<R, W> {
    reader: R,
    writer: W,
}

impl TerminalInput<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.writer, "{message}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            anyhow::bail!("input closed before answering: {}", message.trim_end());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

pub fn parse_lookback_days(raw: &str) -> Result<u32> {
    let raw = raw.trim();
    let days: i64 = raw
        .parse()
        .with_context(|| format!("'{raw}' is not a whole number of days"))?;
    if days <= 0 {
        return Err(ReportError::InvalidLookback(days).into());
    }
    u32::try_from(days).with_context(|| format!("{days} days is too far back"))
}

impl<R: BufRead, W: Write> ReportInput for TerminalInput<R, W> {
    fn read_request(&mut self) -> Result<ReportRequest> {
        let vehicle_name = self.prompt("Enter the name of the vehicle: ")?;
        let days = self.prompt("Enter the number of days to go back from today's date: ")?;

        Ok(ReportRequest {
            vehicle_name,
            lookback_days: parse_lookback_days(&days)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_name_then_days() {
        let mut output = Vec::new();
        let request = TerminalInput::new(Cursor::new("Truck-12\n2\n"), &mut output)
            .read_request()
            .unwrap();

        assert_eq!(
            request,
            ReportRequest {
                vehicle_name: "Truck-12".to_string(),
                lookback_days: 2,
            }
        );
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Enter the name of the vehicle: Enter the number of days to go back from today's date: "
        );
    }

    #[test]
    fn test_name_keeps_inner_whitespace() {
        let request = TerminalInput::new(Cursor::new("Reefer Van 3\r\n 7 \r\n"), Vec::new())
            .read_request()
            .unwrap();
        assert_eq!(request.vehicle_name, "Reefer Van 3");
        assert_eq!(request.lookback_days, 7);
    }

    #[test]
    fn test_rejects_bad_day_counts() {
        assert!(parse_lookback_days("three").is_err());
        assert!(parse_lookback_days("1.5").is_err());

        let err = parse_lookback_days("0").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::InvalidLookback(0))
        ));
        assert!(parse_lookback_days("-4").is_err());
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let result = TerminalInput::new(Cursor::new("Truck-12\n"), Vec::new()).read_request();
        assert!(result.is_err());
    }
}
