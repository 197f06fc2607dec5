//! Interactive Analysis Session
//!
//! Menu loop over a loaded trace: the user picks columns and operation codes,
//! the session runs the engine and prints results. `q` at any prompt returns
//! control out of the loop; the loop itself never terminates the process.
//! Engine errors for a single operation are reported and the session
//! continues.

use std::io::{BufRead, Write};
use tracelab_core::analysis::{
    corresponding_value, peak_to_peak, phase_report, rise_time, rms,
    DEFAULT_RISE_THRESHOLD,
};
use tracelab_core::ColumnTable;

/// Operations the menu exposes, by their prompt codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Rms = 1,
    PeakToPeak = 2,
    PhaseDifference = 3,
    RiseTime = 4,
    Lookup = 5,
}

impl Operation {
    /// Map a menu code (1-5) to an operation.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Operation::Rms),
            2 => Some(Operation::PeakToPeak),
            3 => Some(Operation::PhaseDifference),
            4 => Some(Operation::RiseTime),
            5 => Some(Operation::Lookup),
            _ => None,
        }
    }
}

/// Outcome of parsing one prompt line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice<T> {
    /// User asked to leave the session
    Quit,
    /// Validated selections
    Selected(Vec<T>),
}

/// Parse a comma-separated list of zero-based column indices.
///
/// Indices must lie in `[0, num_columns)`. Returns an error message suitable
/// for printing back at the prompt.
pub fn parse_columns(input: &str, num_columns: usize) -> Result<MenuChoice<usize>, String> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") {
        return Ok(MenuChoice::Quit);
    }
    if input.is_empty() {
        return Err("no columns selected".to_string());
    }

    let mut columns = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        let index: usize = token
            .parse()
            .map_err(|_| format!("invalid column index {:?}", token))?;
        if index >= num_columns {
            return Err(format!(
                "column index {} out of range (table has {} columns)",
                index, num_columns
            ));
        }
        columns.push(index);
    }
    Ok(MenuChoice::Selected(columns))
}

/// Parse a comma-separated list of operation codes (1-5).
pub fn parse_operations(input: &str) -> Result<MenuChoice<Operation>, String> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") {
        return Ok(MenuChoice::Quit);
    }
    if input.is_empty() {
        return Err("no operations selected".to_string());
    }

    let mut operations = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        let code: u32 = token
            .parse()
            .map_err(|_| format!("invalid operation code {:?}", token))?;
        let op = Operation::from_code(code)
            .ok_or_else(|| format!("operation code {} out of range (1-5)", code))?;
        operations.push(op);
    }
    Ok(MenuChoice::Selected(operations))
}

/// Control value unwinding the loop instead of exiting the process
enum SessionControl {
    Continue,
    Quit,
}

/// Run the menu loop until the user quits or input ends.
pub fn run<R: BufRead, W: Write>(
    table: &ColumnTable,
    mut input: R,
    mut output: W,
) -> std::io::Result<()> {
    writeln!(output, "Loaded trace: {} columns, {} rows", table.num_columns(), table.num_rows())?;
    writeln!(
        output,
        "Operations: 1=RMS  2=Peak-to-Peak  3=Phase Difference  4=Rise Time  5=Lookup"
    )?;

    loop {
        let line = match prompt(&mut input, &mut output, "Columns (comma-separated, q to quit): ")? {
            Some(line) => line,
            None => return Ok(()),
        };
        let columns = match parse_columns(&line, table.num_columns()) {
            Ok(MenuChoice::Quit) => return Ok(()),
            Ok(MenuChoice::Selected(columns)) => columns,
            Err(message) => {
                writeln!(output, "error: {}", message)?;
                continue;
            }
        };

        let line = match prompt(&mut input, &mut output, "Operations (comma-separated, q to quit): ")? {
            Some(line) => line,
            None => return Ok(()),
        };
        let operations = match parse_operations(&line) {
            Ok(MenuChoice::Quit) => return Ok(()),
            Ok(MenuChoice::Selected(operations)) => operations,
            Err(message) => {
                writeln!(output, "error: {}", message)?;
                continue;
            }
        };

        for op in operations {
            if let SessionControl::Quit =
                run_operation(table, op, &columns, &mut input, &mut output)?
            {
                return Ok(());
            }
        }
    }
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> std::io::Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        // EOF behaves like quit
        return Ok(None);
    }
    Ok(Some(line))
}

fn run_operation<R: BufRead, W: Write>(
    table: &ColumnTable,
    op: Operation,
    columns: &[usize],
    input: &mut R,
    output: &mut W,
) -> std::io::Result<SessionControl> {
    match op {
        Operation::Rms => {
            for &col in columns {
                match table.column(col).and_then(rms) {
                    Ok(value) => writeln!(output, "RMS(column {}): {:.6}", col, value)?,
                    Err(e) => writeln!(output, "error: {}", e)?,
                }
            }
        }

        Operation::PeakToPeak => {
            for &col in columns {
                match table.column(col).and_then(peak_to_peak) {
                    Ok(value) => {
                        writeln!(output, "Peak-to-Peak(column {}): {:.6}", col, value)?
                    }
                    Err(e) => writeln!(output, "error: {}", e)?,
                }
            }
        }

        Operation::PhaseDifference => match columns {
            [a, b] => match phase_report(table, *a, *b) {
                Ok(report) => write!(output, "{}", report.to_text())?,
                Err(e) => writeln!(output, "error: {}", e)?,
            },
            _ => writeln!(
                output,
                "error: phase difference needs exactly 2 columns, got {}",
                columns.len()
            )?,
        },

        Operation::RiseTime => {
            for &col in columns {
                match rise_time(table, col, DEFAULT_RISE_THRESHOLD) {
                    Ok(result) => {
                        writeln!(output, "Rise Time(column {}):", col)?;
                        write!(output, "{}", result.to_text())?;
                    }
                    Err(e) => writeln!(output, "error: {}", e)?,
                }
            }
        }

        Operation::Lookup => match columns {
            [base, search] => {
                let line = match prompt(input, output, "Value to look up (q to quit): ")? {
                    Some(line) => line,
                    None => return Ok(SessionControl::Quit),
                };
                let line = line.trim();
                if line.eq_ignore_ascii_case("q") {
                    return Ok(SessionControl::Quit);
                }
                match line.parse::<f64>() {
                    Ok(value) => match corresponding_value(table, *base, *search, value) {
                        Ok(Some(found)) => writeln!(
                            output,
                            "column {} = {} -> column {} = {}",
                            base, value, search, found
                        )?,
                        Ok(None) => writeln!(
                            output,
                            "no row in column {} equals {}",
                            base, value
                        )?,
                        Err(e) => writeln!(output, "error: {}", e)?,
                    },
                    Err(_) => writeln!(output, "error: invalid number {:?}", line)?,
                }
            }
            _ => writeln!(
                output,
                "error: lookup needs exactly 2 columns (base, search), got {}",
                columns.len()
            )?,
        },
    }
    Ok(SessionControl::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_columns_valid() {
        let choice = parse_columns("0, 1,2", 3).unwrap();
        assert_eq!(choice, MenuChoice::Selected(vec![0, 1, 2]));
    }

    #[test]
    fn test_parse_columns_quit() {
        assert_eq!(parse_columns("q", 3).unwrap(), MenuChoice::Quit);
        assert_eq!(parse_columns(" Q \n", 3).unwrap(), MenuChoice::Quit);
    }

    #[test]
    fn test_parse_columns_out_of_range() {
        let err = parse_columns("0,5", 3).unwrap_err();
        assert!(err.contains("out of range"), "message was {:?}", err);
    }

    #[test]
    fn test_parse_columns_not_a_number() {
        assert!(parse_columns("0,x", 3).is_err());
        assert!(parse_columns("", 3).is_err());
    }

    #[test]
    fn test_parse_operations_valid() {
        let choice = parse_operations("1,3,5").unwrap();
        assert_eq!(
            choice,
            MenuChoice::Selected(vec![
                Operation::Rms,
                Operation::PhaseDifference,
                Operation::Lookup
            ])
        );
    }

    #[test]
    fn test_parse_operations_code_out_of_range() {
        let err = parse_operations("1,6").unwrap_err();
        assert!(err.contains("out of range"), "message was {:?}", err);
    }

    #[test]
    fn test_parse_operations_quit() {
        assert_eq!(parse_operations("q").unwrap(), MenuChoice::Quit);
    }

    fn test_table() -> ColumnTable {
        ColumnTable::from_reader("0 1 1\n1 -1 1\n2 -1 -1\n3 1 -1\n".as_bytes()).unwrap()
    }

    #[test]
    fn test_session_quit_immediately() {
        let table = test_table();
        let mut out = Vec::new();
        run(&table, "q\n".as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Loaded trace"));
    }

    #[test]
    fn test_session_runs_rms_then_quits() {
        let table = test_table();
        let mut out = Vec::new();
        run(&table, "1\n1\nq\n".as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("RMS(column 1): 1.000000"), "output was {:?}", text);
    }

    #[test]
    fn test_session_reports_bad_selection_and_continues() {
        let table = test_table();
        let mut out = Vec::new();
        run(&table, "9\n1\n2\nq\n".as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("out of range"));
        assert!(text.contains("Peak-to-Peak(column 1): 2.000000"));
    }

    #[test]
    fn test_session_phase_needs_two_columns() {
        let table = test_table();
        let mut out = Vec::new();
        run(&table, "1\n3\nq\n".as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("needs exactly 2 columns"));
    }

    #[test]
    fn test_session_lookup_flow() {
        let table = test_table();
        let mut out = Vec::new();
        run(&table, "0,1\n5\n2\nq\n".as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("column 0 = 2 -> column 1 = -1"), "output was {:?}", text);
    }

    #[test]
    fn test_session_ends_on_eof() {
        let table = test_table();
        let mut out = Vec::new();
        run(&table, "".as_bytes(), &mut out).unwrap();
    }
}
