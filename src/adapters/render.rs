use crate::core::cart::CartStore;
use crate::domain::model::{Offer, OutputFormat};
use crate::utils::error::{CompareError, Result};

const RESULT_HEADERS: [&str; 7] = [
    "#",
    "Manufacturer Part Number",
    "Manufacturer",
    "Data Provider",
    "Volume",
    "Unit Price",
    "Total Price",
];

fn price(value: f64) -> String {
    format!("{:.2}", value)
}

/// Volumes print like the numbers they are: `10`, not `10.0`.
fn volume(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

pub fn render_results(offers: &[Offer], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(offers)?);
    }

    let rows: Vec<Vec<String>> = offers
        .iter()
        .enumerate()
        .map(|(i, offer)| {
            vec![
                (i + 1).to_string(),
                offer.manufacturer_part_number.clone(),
                offer.manufacturer.clone(),
                offer.data_provider.clone(),
                volume(offer.volume),
                price(offer.unit_price),
                price(offer.total_price),
            ]
        })
        .collect();

    render_rows(&RESULT_HEADERS, &rows, format)
}

pub fn render_cart(cart: &CartStore, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(cart.lines())?);
    }

    let rows: Vec<Vec<String>> = cart
        .lines()
        .iter()
        .enumerate()
        .map(|(i, line)| {
            vec![
                (i + 1).to_string(),
                line.manufacturer_part_number.clone(),
                line.manufacturer.clone(),
                line.data_provider.clone(),
                volume(line.volume),
                price(line.unit_price),
                price(line.total_price),
            ]
        })
        .collect();

    let mut output = render_rows(&RESULT_HEADERS, &rows, format)?;
    if format == OutputFormat::Table {
        output.push_str(&format!("\nSubtotal: {}\n", price(cart.total())));
    }
    Ok(output)
}

fn render_rows(headers: &[&str], rows: &[Vec<String>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Csv => delimited(headers, rows, b','),
        OutputFormat::Tsv => delimited(headers, rows, b'\t'),
        OutputFormat::Table | OutputFormat::Json => Ok(table(headers, rows)),
    }
}

fn delimited(headers: &[&str], rows: &[Vec<String>], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CompareError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| CompareError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut out = table_line(headers.iter().copied(), &widths);
    out.push_str(&table_line(rule.iter().map(String::as_str), &widths));
    for row in rows {
        out.push_str(&table_line(row.iter().map(String::as_str), &widths));
    }
    out
}

fn table_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    format!("{}\n", padded.join("  ").trim_end())
}
