//! Rendering price reports as JSON, CSV or text.

use invprice_core::PriceReport;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text
    Text,
}

impl OutputFormat {
    /// File extension used when writing reports to disk.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn format_report(report: &PriceReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => format_csv(std::slice::from_ref(report)),
        OutputFormat::Text => Ok(format_text(report)),
    }
}

/// CSV with one row per report.
pub fn format_csv(reports: &[PriceReport]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["source", "price", "found", "amount", "currency"])?;

    for report in reports {
        wtr.write_record([
            report.source.as_str(),
            report.price.as_str(),
            if report.found { "true" } else { "false" },
            &report.amount.map(|a| a.to_string()).unwrap_or_default(),
            report.currency.as_deref().unwrap_or(""),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(report: &PriceReport) -> String {
    let mut output = format!("{}\n", report.price);

    if let Some(amount) = report.amount {
        output.push_str(&format!("Amount:   {}\n", amount));
    }
    if let Some(currency) = &report.currency {
        output.push_str(&format!("Currency: {}\n", currency));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_output() {
        let report = PriceReport::new("a.txt", "$42.00").with_parsed_amount();
        assert_eq!(
            format_report(&report, OutputFormat::Text).unwrap(),
            "$42.00\nAmount:   42.00\nCurrency: $\n"
        );
    }

    #[test]
    fn test_csv_output() {
        let reports = vec![
            PriceReport::new("a.txt", "1 234,56 zł").with_parsed_amount(),
            PriceReport::new("b.txt", "No price found"),
        ];
        assert_eq!(
            format_csv(&reports).unwrap(),
            "source,price,found,amount,currency\n\
             a.txt,\"1 234,56 zł\",true,1234.56,zł\n\
             b.txt,No price found,false,,\n"
        );
    }

    #[test]
    fn test_json_output() {
        let report = PriceReport::new("stdin", "Total: $10");
        let json: serde_json::Value =
            serde_json::from_str(&format_report(&report, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["price"], "Total: $10");
        assert_eq!(json["found"], true);
    }
}
