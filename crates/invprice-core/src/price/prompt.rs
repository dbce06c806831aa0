//! Prompt sent to the model.

/// Build the price-extraction prompt with the invoice text embedded verbatim.
pub fn build_prompt(invoice_text: &str) -> String {
    format!(
        concat!(
            "You are an expert invoice analyst.\n",
            "Read the invoice text provided below and return ONLY the total invoice price ",
            "(including currency symbol if present).\n",
            "If no price exists, respond exactly with the phrase \"No price found\".\n",
            "\n",
            "Invoice text:\n",
            "{}\n"
        ),
        invoice_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prompt_embeds_invoice_verbatim() {
        let invoice = "ACME Corp\n  Widget x2   $20.00\nTOTAL {due}: $20.00";
        let prompt = build_prompt(invoice);
        assert!(prompt.ends_with(&format!("Invoice text:\n{}\n", invoice)));
    }

    #[test]
    fn test_prompt_text() {
        assert_eq!(
            build_prompt(""),
            "You are an expert invoice analyst.\n\
             Read the invoice text provided below and return ONLY the total invoice price (including currency symbol if present).\n\
             If no price exists, respond exactly with the phrase \"No price found\".\n\
             \n\
             Invoice text:\n\
             \n"
        );
    }
}
