use crate::domain::{TitrationError, TitrationResult, TitrationSeries};

/// Parses titration data source text into a validated series.
///
/// One `volume pH` pair per line, separated by whitespace or a comma.
/// Blank lines and lines starting with `#` are ignored. Line numbers in
/// errors refer to the full source, comments included.
pub fn parse_series_source(source: &str) -> TitrationResult<TitrationSeries> {
    let (volumes, phs) = parse_pairs(source)?;
    TitrationSeries::new(volumes, phs)
}

/// Like [`parse_series_source`], but checks the parsed pair count against
/// a caller-declared count first when one is supplied.
pub fn parse_series_source_with_count(
    source: &str,
    declared: Option<usize>,
) -> TitrationResult<TitrationSeries> {
    let (volumes, phs) = parse_pairs(source)?;
    match declared {
        Some(declared) => TitrationSeries::with_declared_count(declared, volumes, phs),
        None => TitrationSeries::new(volumes, phs),
    }
}

fn parse_pairs(source: &str) -> TitrationResult<(Vec<f64>, Vec<f64>)> {
    let mut volumes = Vec::new();
    let mut phs = Vec::new();

    for (line_index, raw_line) in source.lines().enumerate() {
        let line_number = line_index + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line
            .split(|character: char| character == ',' || character.is_whitespace())
            .filter(|field| !field.is_empty())
            .collect();
        if fields.len() != 2 {
            return Err(TitrationError::MalformedSeriesLine {
                line: line_number,
                reason: format!("expected 2 values, got {}", fields.len()),
            });
        }

        volumes.push(parse_value(fields[0], "volume", line_number)?);
        phs.push(parse_value(fields[1], "pH", line_number)?);
    }

    Ok((volumes, phs))
}

fn parse_value(field: &str, label: &str, line_number: usize) -> TitrationResult<f64> {
    field
        .parse::<f64>()
        .map_err(|_| TitrationError::MalformedSeriesLine {
            line: line_number,
            reason: format!("invalid {label} value '{field}'"),
        })
}
